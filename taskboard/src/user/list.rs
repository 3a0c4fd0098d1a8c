//! ListUsers and SearchUsers commands

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List every user
#[operation(verb = "list", noun = "users", description = "List all users")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListUsers;

#[async_trait]
impl Execute<BoardContext, BoardError> for ListUsers {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            Ok(serde_json::to_value(&store.users)?)
        }
        .await;

        unlogged(result)
    }
}

/// Find users whose name or role contains `query`, ignoring case
#[operation(verb = "search", noun = "users", description = "Search users by name or role")]
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchUsers {
    /// Text to look for
    pub query: String,
}

impl SearchUsers {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for SearchUsers {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let needle = self.query.to_lowercase();
            let store = ctx.read().await;
            let users: Vec<_> = store
                .users
                .iter()
                .filter(|u| {
                    u.name.to_lowercase().contains(&needle)
                        || u.role.to_lowercase().contains(&needle)
                })
                .collect();
            Ok(serde_json::to_value(users)?)
        }
        .await;

        unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;

    fn ids(value: &Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_list_users() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = ListUsers.execute(&ctx).await.into_result().unwrap();
        assert_eq!(ids(&value).len(), 5);
    }

    #[tokio::test]
    async fn test_search_by_role_ignores_case() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = SearchUsers::new("DEVELOPER")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(ids(&value), ["user-2", "user-3"]);
    }

    #[tokio::test]
    async fn test_search_by_name() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = SearchUsers::new("laura").execute(&ctx).await.into_result().unwrap();
        assert_eq!(ids(&value), ["user-5"]);

        let value = SearchUsers::new("nobody").execute(&ctx).await.into_result().unwrap();
        assert!(ids(&value).is_empty());
    }
}
