use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use rota_core::repository::SqliteRepository;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::http;

/// Central shared state — passed as `Arc<AppState>` to all axum handlers.
pub struct AppState {
    pub repo: SqliteRepository,
}

/// Assemble the full axum router: the JSON API plus a static-file fallback
/// for the web front end.
pub fn build_router(state: Arc<AppState>, web_dir: &str) -> Router {
    Router::new()
        .route("/api/nextdate", get(http::next_date::next_date_handler))
        .route(
            "/api/task",
            get(http::task::get_task_handler)
                .post(http::task::add_task_handler)
                .put(http::task::update_task_handler)
                .delete(http::task::delete_task_handler),
        )
        .route("/api/tasks", get(http::tasks::list_tasks_handler))
        .route("/api/task/done", post(http::done::done_task_handler))
        .fallback_service(ServeDir::new(web_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
