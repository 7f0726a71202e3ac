//! Smart Itinerary Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod ollama;
pub mod prompt;
pub mod routes;
pub mod security;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};

use std::sync::Arc;

use ollama::{InferenceSettings, OllamaClient};
use session::SessionStore;
use store::{ChatStore, CredentialStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub credentials: Arc<CredentialStore>,
    pub chats: Arc<ChatStore>,
    pub sessions: SessionStore,
    pub inference: OllamaClient,
}

impl AppState {
    /// Create the data directory and the stores that live in it
    pub fn new(config: Config) -> Result<Self> {
        store::ensure_data_dir(&config.data_dir)?;

        Ok(Self {
            credentials: Arc::new(CredentialStore::new(&config.data_dir)),
            chats: Arc::new(ChatStore::new(&config.data_dir)),
            sessions: SessionStore::new(config.session_idle_timeout()),
            inference: OllamaClient::new(config.health_timeout(), config.generate_timeout()),
            config,
        })
    }

    /// Inference settings a new session starts with
    pub fn default_settings(&self) -> InferenceSettings {
        InferenceSettings {
            base_url: self.config.ollama_base_url.clone(),
            model: self.config.model_name.clone(),
        }
    }
}
