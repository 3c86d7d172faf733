use axum::{http::StatusCode, Json, Router};
use serde_json::{json, Value};

use crate::app::AppState;

mod root;
mod stock;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // banner and health checks
        .merge(root::router())
        .nest("/api", stock::router())
        .fallback(not_found)
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})))
}
