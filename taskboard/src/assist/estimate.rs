//! SuggestEstimate command

use crate::context::{BoardContext, LatencyKind};
use crate::error::BoardError;
use crate::processor::unlogged;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Estimate in hours derived from the text alone, between 1 and 16.
///
/// The same title and description always give the same estimate. The hash
/// is `h * 31 + c` over UTF-16 code units with 32-bit wrapping.
pub fn estimate_hours(title: &str, description: &str) -> f64 {
    let hash = title
        .encode_utf16()
        .chain(description.encode_utf16())
        .fold(0i32, |h, unit| {
            h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
        });

    let base = f64::from((hash % 16).abs() + 1);
    (base * 2.0).round() / 2.0
}

/// Suggest how many hours a task will take
#[operation(verb = "suggest", noun = "estimate", description = "Suggest a time estimate for a task")]
#[derive(Debug, Deserialize, Serialize)]
pub struct SuggestEstimate {
    /// Task title
    pub title: String,
    /// Task description
    #[serde(default)]
    pub description: String,
}

impl SuggestEstimate {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for SuggestEstimate {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        ctx.simulate_latency(LatencyKind::Assist).await;
        unlogged(Ok(json!(estimate_hours(&self.title, &self.description))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;

    #[test]
    fn test_known_values() {
        // "" -> 0 -> 1h
        assert_eq!(estimate_hours("", ""), 1.0);
        // "ab" -> 97 * 31 + 98 = 3105, 3105 % 16 = 1 -> 2h
        assert_eq!(estimate_hours("a", "b"), 2.0);
        assert_eq!(estimate_hours("ab", ""), estimate_hours("a", "b"));
    }

    #[test]
    fn test_range_and_stability() {
        let texts = [
            ("Implementar sistema de notificaciones", "Tiempo real"),
            ("Optimización de rendimiento", "Mejorar el rendimiento general"),
            ("ñandú", "🚀 emoji"),
            ("A very long title that overflows the hash many times over", ""),
        ];
        for (title, description) in texts {
            let hours = estimate_hours(title, description);
            assert!((1.0..=16.0).contains(&hours), "{title}: {hours}");
            assert_eq!(hours.fract(), 0.0);
            assert_eq!(hours, estimate_hours(title, description));
        }
    }

    #[tokio::test]
    async fn test_execute() {
        let ctx = BoardContext::new(Latency::none());
        let value = SuggestEstimate::new("a", "b")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value, 2.0);
    }
}
