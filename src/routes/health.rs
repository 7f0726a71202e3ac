use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Reports whether the data directory is usable. The inference server is
/// probed separately through `/api/settings` so that a slow model host does
/// not make this endpoint slow.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let data_dir = state.config.data_dir.clone();
    let storage_status = tokio::task::spawn_blocking(move || match std::fs::metadata(&data_dir) {
        Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => "available",
        Ok(_) => {
            tracing::error!("Data directory {:?} is not writable", data_dir);
            "unavailable"
        }
        Err(e) => {
            tracing::error!("Data directory health check failed: {:?}", e);
            "unavailable"
        }
    })
    .await
    .unwrap_or("error");

    Json(json!({
        "status": if storage_status == "available" { "healthy" } else { "unhealthy" },
        "storage": storage_status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
