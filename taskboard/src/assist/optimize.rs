//! OptimizeDescription command

use crate::context::{BoardContext, LatencyKind};
use crate::error::BoardError;
use crate::processor::unlogged;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Paragraph appended to every optimized description
pub const OPTIMIZED_NOTE: &str =
    "Optimizado: Esta tarea ha sido analizada y estructurada para mayor claridad.";

/// Polish a task description
#[operation(verb = "optimize", noun = "description", description = "Rewrite a task description for clarity")]
#[derive(Debug, Deserialize, Serialize)]
pub struct OptimizeDescription {
    /// The description to polish
    pub description: String,
}

impl OptimizeDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn optimize(&self) -> String {
        format!("{}\n\n{}", self.description, OPTIMIZED_NOTE)
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for OptimizeDescription {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        ctx.simulate_latency(LatencyKind::Assist).await;
        unlogged(Ok(Value::String(self.optimize())))
    }
}
