use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use rota_core::models::{NewTaskData, Task, UpdateTaskData};
use rota_core::repository::TaskRepository;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::AppState;

use super::{core_error_response, error_response, parse_task_id, ApiResult};

#[derive(Deserialize)]
pub struct TaskIdQuery {
    #[serde(default)]
    pub id: String,
}

/// POST /api/task — create a task, responding with its new id.
pub async fn add_task_handler(
    State(state): State<Arc<AppState>>,
    Json(data): Json<NewTaskData>,
) -> ApiResult<Json<Value>> {
    let task = state.repo.add_task(data).await.map_err(core_error_response)?;
    Ok(Json(json!({ "id": task.id.to_string() })))
}

/// GET /api/task?id= — fetch a single task.
pub async fn get_task_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<Task>> {
    let id = parse_task_id(&query.id)?;
    let task = state
        .repo
        .find_task_by_id(id)
        .await
        .map_err(core_error_response)?;
    task.map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("Task not found: {id}")))
}

/// PUT /api/task — replace a task's fields.
pub async fn update_task_handler(
    State(state): State<Arc<AppState>>,
    Json(data): Json<UpdateTaskData>,
) -> ApiResult<Json<Value>> {
    state
        .repo
        .update_task(data)
        .await
        .map_err(core_error_response)?;
    Ok(Json(json!({})))
}

/// DELETE /api/task?id= — remove a task.
pub async fn delete_task_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<Value>> {
    let id = parse_task_id(&query.id)?;
    state
        .repo
        .delete_task(id)
        .await
        .map_err(core_error_response)?;
    Ok(Json(json!({})))
}
