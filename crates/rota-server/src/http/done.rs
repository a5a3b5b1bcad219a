use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use rota_core::models::CompletionResult;
use rota_core::repository::TaskRepository;
use serde_json::{json, Value};
use tracing::debug;

use crate::app::AppState;
use crate::http::task::TaskIdQuery;

use super::{core_error_response, parse_task_id, ApiResult};

/// POST /api/task/done?id= — complete a task. One-shot tasks are removed;
/// recurring tasks are moved to their next occurrence.
pub async fn done_task_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<Value>> {
    let id = parse_task_id(&query.id)?;
    match state
        .repo
        .complete_task(id)
        .await
        .map_err(core_error_response)?
    {
        CompletionResult::Finished(task) => {
            debug!(id = task.id, "one-shot task completed and removed");
        }
        CompletionResult::Rescheduled(task) => {
            debug!(id = task.id, date = %task.date, "recurring task rescheduled");
        }
    }
    Ok(Json(json!({})))
}
