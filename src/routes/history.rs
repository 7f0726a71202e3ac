use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::models::ChatTurn;
use crate::session::AuthSession;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub turns: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportHistoryResponse {
    pub path: String,
    pub turns: usize,
}

/// Chat history of the signed-in user, oldest first
pub async fn get_history(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<HistoryResponse>> {
    let chats = state.chats.clone();
    let username = auth.session.username;

    let turns = tokio::task::spawn_blocking(move || chats.load(&username)).await?;

    Ok(Json(HistoryResponse { turns }))
}

/// Delete every turn of the signed-in user's history
pub async fn clear_history(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ClearHistoryResponse>> {
    let chats = state.chats.clone();
    let username = auth.session.username;

    tokio::task::spawn_blocking(move || chats.clear(&username)).await??;

    Ok(Json(ClearHistoryResponse { success: true }))
}

/// Write the history to an export file in the data directory
pub async fn export_history(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ExportHistoryResponse>> {
    let chats = state.chats.clone();
    let username = auth.session.username;

    let (path, turns) = tokio::task::spawn_blocking(move || chats.export(&username)).await??;

    Ok(Json(ExportHistoryResponse {
        path: path.display().to_string(),
        turns,
    }))
}
