use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::ollama::{HealthStatus, InferenceSettings};
use crate::session::AuthSession;
use crate::AppState;

use super::ApiJson;

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub base_url: String,
    pub model: String,
    pub health: HealthStatus,
}

async fn describe(state: &AppState, settings: InferenceSettings) -> SettingsResponse {
    let health = state.inference.health_check(&settings).await;

    SettingsResponse {
        base_url: settings.base_url,
        model: settings.model,
        health,
    }
}

/// Current inference settings of the session, with a live health probe
pub async fn get_settings(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Json<SettingsResponse> {
    Json(describe(&state, auth.session.settings).await)
}

/// Point the session at another inference server or model
///
/// Omitted fields keep their current value. A base URL must be http(s).
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthSession,
    ApiJson(payload): ApiJson<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>> {
    let mut settings = auth.session.settings.clone();

    if let Some(base_url) = payload.base_url {
        let base_url = base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::InvalidInput(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }
        settings.base_url = base_url.to_string();
    }

    if let Some(model) = payload.model {
        let model = model.trim();
        if model.is_empty() {
            return Err(AppError::InvalidInput("Model name must not be empty".to_string()));
        }
        settings.model = model.to_string();
    }

    let updated = state
        .sessions
        .update_settings(&auth.token, settings)
        .ok_or(AppError::Unauthorized)?;

    tracing::info!(
        "Inference settings for {}: {} ({})",
        updated.username,
        updated.settings.base_url,
        updated.settings.model
    );

    Ok(Json(describe(&state, updated.settings).await))
}
