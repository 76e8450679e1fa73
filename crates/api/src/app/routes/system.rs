use axum::{response::IntoResponse, Json};

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "stockroom API is running" }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
