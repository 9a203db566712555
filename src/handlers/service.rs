use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::api::routes::RESOURCE_PATHS;
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// GET / - service descriptor
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Cars API (Rust)",
        "version": env!("CARGO_PKG_VERSION"),
        "resources": RESOURCE_PATHS.iter().map(|p| format!("/{}", p)).collect::<Vec<_>>(),
        "endpoints": {
            "register": "/register",
            "health": "/health",
        }
    }))
}

/// GET /health - 503 when the pool cannot reach the database
pub async fn health(State(db): State<DatabaseManager>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match db.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
