pub mod auth;
pub mod health;
pub mod history;
pub mod itinerary;
pub mod json;
pub mod settings;

pub use auth::{login, logout, register_user};
pub use health::health_check;
pub use history::{clear_history, export_history, get_history};
pub use itinerary::{generate_itinerary, trip_defaults};
pub use json::ApiJson;
pub use settings::{get_settings, update_settings};

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// All API routes bound to the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/register", post(register_user))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/settings", get(get_settings).put(update_settings))
        .route("/api/trip/defaults", get(trip_defaults))
        .route("/api/itinerary", post(generate_itinerary))
        .route("/api/history", get(get_history).delete(clear_history))
        .route("/api/history/export", post(export_history))
        .with_state(state)
}
