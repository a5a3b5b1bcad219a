//! Data access layer for the task store.
//!
//! Date normalization lives here rather than in the HTTP layer: every write
//! passes through [`resolve_task_date`], which applies the same policy the
//! completion flow uses, so a task's stored date is valid no matter which
//! entry point wrote it.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::date;
use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};
use crate::recurrence;

/// Task CRUD and completion operations.
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    /// Tasks ordered by date ascending, nearest first.
    async fn upcoming_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, data: UpdateTaskData) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    /// Complete a task: one-shot tasks are deleted, recurring tasks get
    /// their date advanced to the next occurrence.
    async fn complete_task(&self, id: i64) -> Result<CompletionResult, CoreError>;
}

/// SQLite implementation of the repository pattern.
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Decide the date a task is stored with.
///
/// An empty date defaults to `now`. A stale date (before `now`) is bumped:
/// one-shot tasks move to `now`, recurring tasks advance through their rule.
/// A current or future date is kept as-is, but a present rule must still
/// parse and compute so an invalid rule rejects the write.
fn resolve_task_date(now: NaiveDate, date_text: &str, repeat: &str) -> Result<String, CoreError> {
    if date_text.is_empty() {
        return Ok(date::format_compact(now));
    }
    let anchor = date::parse_compact(date_text)?;
    if anchor < now {
        if repeat.is_empty() {
            Ok(date::format_compact(now))
        } else {
            Ok(recurrence::compute_next(now, date_text, repeat)?)
        }
    } else {
        if !repeat.is_empty() {
            recurrence::compute_next(now, date_text, repeat)?;
        }
        Ok(date_text.to_string())
    }
}

#[async_trait]
impl TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError> {
        if data.title.is_empty() {
            return Err(CoreError::InvalidInput(
                "task title must not be empty".to_string(),
            ));
        }
        let now = Utc::now().date_naive();
        let date = resolve_task_date(now, &data.date, &data.repeat)?;

        let task = sqlx::query_as(
            r#"INSERT INTO tasks (date, title, comment, repeat)
            VALUES ($1, $2, $3, $4)
            RETURNING *"#,
        )
        .bind(&date)
        .bind(&data.title)
        .bind(&data.comment)
        .bind(&data.repeat)
        .fetch_one(&self.pool)
        .await?;
        Ok(task)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn upcoming_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError> {
        let tasks = sqlx::query_as("SELECT * FROM tasks ORDER BY date LIMIT $1")
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn update_task(&self, data: UpdateTaskData) -> Result<Task, CoreError> {
        if data.id.is_empty() {
            return Err(CoreError::InvalidInput("task id is required".to_string()));
        }
        let id: i64 = data
            .id
            .parse()
            .map_err(|_| CoreError::InvalidInput(format!("invalid task id: {:?}", data.id)))?;
        if data.title.is_empty() {
            return Err(CoreError::InvalidInput(
                "task title must not be empty".to_string(),
            ));
        }
        let now = Utc::now().date_naive();
        let date = resolve_task_date(now, &data.date, &data.repeat)?;

        let task: Option<Task> = sqlx::query_as(
            r#"UPDATE tasks
            SET date = $1, title = $2, comment = $3, repeat = $4
            WHERE id = $5
            RETURNING *"#,
        )
        .bind(&date)
        .bind(&data.title)
        .bind(&data.comment)
        .bind(&data.repeat)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        task.ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn complete_task(&self, id: i64) -> Result<CompletionResult, CoreError> {
        let task: Task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if task.repeat.is_empty() {
            sqlx::query("DELETE FROM tasks WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
            return Ok(CompletionResult::Finished(task));
        }

        let now = Utc::now().date_naive();
        let next = recurrence::compute_next(now, &task.date, &task.repeat)?;
        let updated: Task = sqlx::query_as(
            r#"UPDATE tasks SET date = $1 WHERE id = $2 RETURNING *"#,
        )
        .bind(&next)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(CompletionResult::Rescheduled(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_keeps_future_dates_untouched() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(resolve_task_date(now, "20240415", "").unwrap(), "20240415");
        assert_eq!(resolve_task_date(now, "20240301", "").unwrap(), "20240301");
    }

    #[test]
    fn resolve_defaults_an_empty_date_to_now() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(resolve_task_date(now, "", "").unwrap(), "20240301");
        // The repeat rule is irrelevant when no date was supplied.
        assert_eq!(resolve_task_date(now, "", "d 7").unwrap(), "20240301");
    }

    #[test]
    fn resolve_bumps_stale_one_shot_tasks_to_now() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(resolve_task_date(now, "20240110", "").unwrap(), "20240301");
    }

    #[test]
    fn resolve_advances_stale_recurring_tasks_through_their_rule() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(resolve_task_date(now, "20240115", "d 7").unwrap(), "20240304");
    }

    #[test]
    fn resolve_rejects_an_invalid_rule_even_for_future_dates() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let err = resolve_task_date(now, "20240415", "d 401").unwrap_err();
        assert!(matches!(err, CoreError::Recurrence(_)));
    }
}
