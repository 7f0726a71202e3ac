//! Signed-in sessions
//!
//! A successful login mints a random bearer token. Each token carries the
//! username and that user's inference settings, which can be changed for the
//! lifetime of the session without touching the server configuration.
//! Sessions left idle longer than the configured timeout are signed out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::AppError;
use crate::ollama::InferenceSettings;
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub settings: InferenceSettings,
}

struct SessionEntry {
    session: Session,
    last_seen: Instant,
}

impl SessionEntry {
    fn is_idle(&self, idle_timeout: Duration) -> bool {
        self.last_seen.elapsed() > idle_timeout
    }
}

/// Token -> session map shared across handlers
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            idle_timeout,
        }
    }

    /// Start a session and return its token
    ///
    /// Idle sessions are swept first, so abandoned logins do not accumulate.
    pub fn create(&self, username: &str, settings: InferenceSettings) -> String {
        self.purge_idle();

        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            SessionEntry {
                session: Session {
                    username: username.to_string(),
                    settings,
                },
                last_seen: Instant::now(),
            },
        );
        token
    }

    /// Look up a live session and mark it as used
    pub fn get(&self, token: &str) -> Option<Session> {
        {
            let mut entry = self.sessions.get_mut(token)?;
            if !entry.is_idle(self.idle_timeout) {
                entry.last_seen = Instant::now();
                return Some(entry.session.clone());
            }
        }

        // The shard guard is released above; removing under it would deadlock
        self.sessions.remove(token);
        tracing::info!("Session expired after {:?} idle", self.idle_timeout);
        None
    }

    /// Replace the inference settings of a live session
    pub fn update_settings(&self, token: &str, settings: InferenceSettings) -> Option<Session> {
        let mut entry = self.sessions.get_mut(token)?;
        entry.session.settings = settings;
        entry.last_seen = Instant::now();
        Some(entry.session.clone())
    }

    /// Drop every session idle longer than the timeout; returns how many
    pub fn purge_idle(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !entry.is_idle(self.idle_timeout));
        let purged = before.saturating_sub(self.sessions.len());
        if purged > 0 {
            tracing::debug!("Purged {} idle sessions", purged);
        }
        purged
    }

    /// Sign out; returns whether the token was live
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Extractor for handlers that need a signed-in user
///
/// Reads `Authorization: Bearer <token>`; rejects with 401 when the header is
/// missing or the token is unknown.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub session: Session,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let session = state.sessions.get(token).ok_or(AppError::Unauthorized)?;

        Ok(AuthSession {
            token: token.to_string(),
            session,
        })
    }
}
