//! Writing assistant commands
//!
//! Canned stand-ins for a language model: none of them reads the store and
//! none of them is logged.

mod estimate;
mod optimize;
mod subtasks;

pub use estimate::{estimate_hours, SuggestEstimate};
pub use optimize::{OptimizeDescription, OPTIMIZED_NOTE};
pub use subtasks::{GenerateSubtasks, SUBTASK_TEMPLATES};
