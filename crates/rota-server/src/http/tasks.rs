use std::sync::Arc;

use axum::{extract::State, Json};
use rota_core::models::Task;
use rota_core::repository::TaskRepository;
use serde::Serialize;

use crate::app::AppState;

use super::{core_error_response, ApiResult};

/// How many upcoming tasks a single listing returns.
const TASK_LIST_LIMIT: u32 = 50;

#[derive(Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// GET /api/tasks — the nearest upcoming tasks, soonest first.
pub async fn list_tasks_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks = state
        .repo
        .upcoming_tasks(TASK_LIST_LIMIT)
        .await
        .map_err(core_error_response)?;
    Ok(Json(TaskListResponse { tasks }))
}
