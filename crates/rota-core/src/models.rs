use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use sqlx::FromRow;

/// A stored task. `date` is the fixed-width `YYYYMMDD` wire form; an empty
/// `repeat` marks a one-shot task. The numeric row id travels as a JSON
/// string.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Payload for creating a task. Every field except the title may be omitted;
/// an empty date defaults to the current day at insert time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTaskData {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

/// Payload for replacing an existing task. The id is required; the remaining
/// fields overwrite the stored row wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

/// Outcome of completing a task.
#[derive(Debug)]
pub enum CompletionResult {
    /// One-shot task: removed from the store.
    Finished(Task),
    /// Recurring task: stored date advanced to the next occurrence.
    Rescheduled(Task),
}
