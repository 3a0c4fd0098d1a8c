//! Logout command

use super::session::{AUTH_TOKEN_KEY, USER_KEY};
use crate::context::{BoardContext, LatencyKind};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::info;

/// End the current session
#[operation(verb = "logout", noun = "session", description = "Sign out and clear the session")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Logout;

#[async_trait]
impl Execute<BoardContext, BoardError> for Logout {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        ctx.simulate_latency(LatencyKind::Logout).await;

        ctx.session().remove(AUTH_TOKEN_KEY);
        ctx.session().remove(USER_KEY);
        info!("signed out");

        ExecutionResult::Unlogged { value: Value::Null }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{current_session_user, is_authenticated, Login};
    use crate::context::Latency;

    #[tokio::test]
    async fn test_logout_clears_session() {
        let ctx = BoardContext::new(Latency::none());
        Login::new("demo@example.com", "demo123")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        Logout.execute(&ctx).await.into_result().unwrap();

        assert!(!is_authenticated(&ctx));
        assert!(current_session_user(&ctx).is_none());
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let ctx = BoardContext::new(Latency::none());
        assert!(Logout.execute(&ctx).await.into_result().is_ok());
    }
}
