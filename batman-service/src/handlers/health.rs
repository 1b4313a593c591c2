use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

use crate::dtos::{DatabaseStatusResponse, MessageResponse};
use crate::services::get_metrics;
use crate::startup::AppState;

/// Store errors are cut to this many characters in the `/test` report.
const STATUS_ERROR_CHARS: usize = 50;
const STATUS_COLLECTIONS: usize = 10;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Batman API running".to_string(),
    })
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

/// Human-readable database report. Always answers 200: store failures are
/// rendered into the `database` field.
#[tracing::instrument(skip(state))]
pub async fn database_status(State(state): State<AppState>) -> Json<DatabaseStatusResponse> {
    let mut response = DatabaseStatusResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: String::new(),
        database_name: String::new(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if state.db.is_configured() {
        response.database = "✅ Available".to_string();
        response.connection_status = "Connected".to_string();

        match state.db.list_collection_names().await {
            Ok(mut collections) => {
                collections.truncate(STATUS_COLLECTIONS);
                response.collections = collections;
                response.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                tracing::warn!("Database status check failed: {}", e);
                let message: String = e.to_string().chars().take(STATUS_ERROR_CHARS).collect();
                response.database = format!("⚠️  Connected but Error: {}", message);
            }
        }
    } else {
        response.database = "⚠️  Available but not initialized".to_string();
    }

    response.database_url = set_marker(state.config.database.url.is_some());
    response.database_name = set_marker(state.config.database.name.is_some());

    Json(response)
}

fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

/// Liveness check including a store ping.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "batman-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": "batman-service",
                "error": e.to_string()
            })),
        ),
    }
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .db
        .health_check()
        .await
        .map(|_| StatusCode::OK)
        .map_err(|_| AppError::ServiceUnavailable)
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
