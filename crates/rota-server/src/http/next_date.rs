use axum::{extract::Query, http::StatusCode};
use chrono::Utc;
use rota_core::{date, recurrence};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NextDateQuery {
    #[serde(default)]
    pub now: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub repeat: String,
}

/// GET /api/nextdate?now=&date=&repeat= — preview the next occurrence of a
/// repeat rule, echoed as plain text. A missing `now` defaults to the
/// server's current date; all validation errors come back as 400 plain text.
pub async fn next_date_handler(
    Query(query): Query<NextDateQuery>,
) -> Result<String, (StatusCode, String)> {
    let now = if query.now.is_empty() {
        Utc::now().date_naive()
    } else {
        date::parse_compact(&query.now)
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid 'now' parameter: {e}")))?
    };

    recurrence::compute_next(now, &query.date, &query.repeat)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}
