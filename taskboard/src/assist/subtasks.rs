//! GenerateSubtasks command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::{ChecklistItem, ChecklistItemId};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use ulid::Ulid;

/// Generic steps that fit any kind of task
pub const SUBTASK_TEMPLATES: [&str; 9] = [
    "Investigar y recopilar información necesaria",
    "Planificar y definir alcance del trabajo",
    "Crear borrador inicial",
    "Revisar y refinar",
    "Solicitar feedback",
    "Implementar correcciones",
    "Realizar pruebas finales",
    "Documentar proceso y resultados",
    "Presentar entregable final",
];

/// Suggest four to six distinct subtasks for a task
#[operation(verb = "generate", noun = "subtasks", description = "Suggest subtasks for a task")]
#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateSubtasks {
    /// Task title
    pub title: String,
    /// Task description
    #[serde(default)]
    pub description: String,
}

impl GenerateSubtasks {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Pick the subtasks with `rng`. Ids share one ULID and end in the
    /// position of the item.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ChecklistItem> {
        let count = rng.random_range(4..=6);
        let batch = Ulid::new().to_string().to_lowercase();

        index::sample(rng, SUBTASK_TEMPLATES.len(), count)
            .into_iter()
            .enumerate()
            .map(|(position, template)| ChecklistItem {
                id: ChecklistItemId::from_string(format!("subtask-{batch}-{position}")),
                text: SUBTASK_TEMPLATES[template].to_string(),
                completed: false,
            })
            .collect()
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GenerateSubtasks {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Subtasks).await;
            let subtasks = self.generate(&mut rand::rng());
            Ok(serde_json::to_value(subtasks)?)
        }
        .await;

        unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;
    use std::collections::HashSet;

    #[test]
    fn test_generate_count_and_distinct() {
        let op = GenerateSubtasks::new("Lanzar campaña", "");
        let mut rng = rand::rng();
        for _ in 0..50 {
            let items = op.generate(&mut rng);
            assert!((4..=6).contains(&items.len()));

            let texts: HashSet<_> = items.iter().map(|i| i.text.as_str()).collect();
            assert_eq!(texts.len(), items.len());
            assert!(texts.iter().all(|t| SUBTASK_TEMPLATES.contains(t)));
        }
    }

    #[test]
    fn test_generated_ids_end_in_position() {
        let items = GenerateSubtasks::new("x", "y").generate(&mut rand::rng());
        for (position, item) in items.iter().enumerate() {
            assert!(item.id.as_str().starts_with("subtask-"));
            assert!(item.id.as_str().ends_with(&format!("-{position}")));
            assert!(!item.completed);
        }
    }

    #[tokio::test]
    async fn test_execute_returns_items() {
        let ctx = BoardContext::new(Latency::none());
        let value = GenerateSubtasks::new("Lanzar campaña", "Redes sociales")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        let items = value.as_array().unwrap();
        assert!(items.len() >= 4);
        assert_eq!(items[0]["completed"], false);
    }
}
