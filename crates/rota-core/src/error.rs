use thiserror::Error;

/// Errors produced while parsing or evaluating a repeat rule.
///
/// Every variant is deterministic for a given input: re-running the same
/// computation reproduces the same error, so callers never retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Invalid date: {0:?} (expected YYYYMMDD)")]
    InvalidDate(String),

    #[error("Empty repeat rule")]
    EmptyRule,

    #[error("Unsupported repeat rule: {0:?}")]
    UnsupportedRule(String),

    #[error("Malformed '{0}' rule: wrong number of arguments")]
    MalformedRule(char),

    #[error("Invalid day interval: {0:?} (expected 1..=400)")]
    InvalidInterval(String),

    #[error("Invalid weekday: {0:?} (expected 1..=7)")]
    InvalidWeekday(String),

    #[error("Invalid day of month: {0:?} (expected -2..=31, excluding 0)")]
    InvalidMonthDay(String),

    #[error("Invalid month: {0:?} (expected 1..=12)")]
    InvalidMonth(String),

    /// The day-by-day scan hit its safety cap without a match; the rule can
    /// never produce a date (e.g. day 30 restricted to February).
    #[error("No matching date within {0} days of the search start")]
    SearchExhausted(u32),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}
