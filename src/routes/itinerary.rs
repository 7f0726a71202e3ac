use axum::{extract::State, Json};
use chrono::Local;
use serde::Serialize;

use crate::constants::TURN_TIME_FORMAT;
use crate::error::Result;
use crate::models::{Interest, Pace, TripRequest};
use crate::prompt::build_prompt;
use crate::session::AuthSession;
use crate::AppState;

use super::ApiJson;

#[derive(Debug, Serialize)]
pub struct TripDefaultsResponse {
    pub defaults: TripRequest,
    pub interests: Vec<Interest>,
    pub paces: Vec<Pace>,
}

#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub itinerary: String,
    pub prompt: String,
    pub time: String,
}

/// Form defaults and the allowed interest/pace values
pub async fn trip_defaults() -> Json<TripDefaultsResponse> {
    Json(TripDefaultsResponse {
        defaults: TripRequest::defaults(Local::now().date_naive()),
        interests: Interest::ALL.to_vec(),
        paces: Pace::ALL.to_vec(),
    })
}

/// Generate an itinerary and record the exchange
///
/// The (prompt, response) pair is appended to the user's history only after
/// the model answered; a failed generation returns 502 and stores nothing.
pub async fn generate_itinerary(
    State(state): State<AppState>,
    auth: AuthSession,
    ApiJson(trip): ApiJson<TripRequest>,
) -> Result<Json<ItineraryResponse>> {
    trip.validate()?;

    let username = auth.session.username;
    let prompt = build_prompt(&trip);

    tracing::info!(
        "Generating {}-day itinerary {} -> {} for {}",
        trip.day_count(),
        trip.origin,
        trip.destination,
        username
    );

    let itinerary = state
        .inference
        .generate(&auth.session.settings, &prompt)
        .await?;

    let time = Local::now().format(TURN_TIME_FORMAT).to_string();

    let chats = state.chats.clone();
    let (stored_prompt, stored_response, stored_time) =
        (prompt.clone(), itinerary.clone(), time.clone());
    let turns = tokio::task::spawn_blocking(move || {
        chats.append_exchange(&username, stored_prompt, stored_response, &stored_time)
    })
    .await??;

    tracing::debug!("History now holds {} turns", turns);

    Ok(Json(ItineraryResponse {
        itinerary,
        prompt,
        time,
    }))
}
