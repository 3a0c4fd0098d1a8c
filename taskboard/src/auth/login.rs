//! Login command

use super::session::{AUTH_TOKEN_KEY, USER_KEY};
use super::{SessionToken, SessionUser};
use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::{info, warn};

/// A known account
struct Account {
    email: &'static str,
    password: &'static str,
    name: &'static str,
}

const ACCOUNTS: &[Account] = &[Account {
    email: "demo@example.com",
    password: "demo123",
    name: "Demo User",
}];

/// Sign in with email and password
#[operation(verb = "login", noun = "session", description = "Sign in and store the session")]
#[derive(Debug, Deserialize, Serialize)]
pub struct Login {
    /// Account email
    pub email: String,
    /// Account password
    #[serde(skip_serializing)]
    pub password: String,
}

impl Login {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for Login {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Login).await;

            let Some(account) = ACCOUNTS
                .iter()
                .find(|a| a.email == self.email && a.password == self.password)
            else {
                warn!(email = %self.email, "login rejected");
                return Err(BoardError::InvalidCredentials);
            };

            let token = SessionToken {
                id: 1,
                email: account.email.to_string(),
                name: account.name.to_string(),
            };
            let user = SessionUser {
                email: account.email.to_string(),
                name: account.name.to_string(),
            };

            let encoded = general_purpose::STANDARD.encode(serde_json::to_vec(&token)?);
            ctx.session().set(AUTH_TOKEN_KEY, encoded);
            ctx.session().set(USER_KEY, serde_json::to_string(&user)?);

            info!(email = %user.email, "signed in");
            Ok(json!({ "success": true, "user": user }))
        }
        .await;

        unlogged(result)
    }
}
