use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::models::Credentials;
use crate::session::AuthSession;
use crate::AppState;

use super::ApiJson;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Register a new user
///
/// Returns 400 when either field is empty or the username is not file-name
/// safe, and 409 Conflict if the username already exists. Registration does
/// not sign the user in.
pub async fn register_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<Json<RegisterResponse>> {
    let credentials = state.credentials.clone();

    tokio::task::spawn_blocking(move || {
        credentials.register(&payload.username, &payload.password)
    })
    .await??;

    Ok(Json(RegisterResponse {
        success: true,
        message: "Account created. Please sign in.".to_string(),
    }))
}

/// Sign in and receive a bearer token
///
/// Returns 401 for an unknown user or a wrong password.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<Json<LoginResponse>> {
    let credentials = state.credentials.clone();
    let username = payload.username.clone();

    tokio::task::spawn_blocking(move || {
        credentials.verify(&payload.username, &payload.password)
    })
    .await??;

    let token = state.sessions.create(&username, state.default_settings());
    tracing::info!("User signed in: {}", username);

    Ok(Json(LoginResponse { token, username }))
}

/// Sign out, invalidating the bearer token
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Json<LogoutResponse> {
    state.sessions.remove(&auth.token);
    tracing::info!("User signed out: {}", auth.session.username);

    Json(LogoutResponse { success: true })
}
