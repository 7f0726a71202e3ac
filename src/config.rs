use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_GENERATE_TIMEOUT_SECS, DEFAULT_HEALTH_TIMEOUT_SECS, DEFAULT_MODEL,
    DEFAULT_OLLAMA_BASE_URL, DEFAULT_SESSION_IDLE_SECS,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub data_dir: PathBuf,
    pub ollama_base_url: String,
    pub model_name: String,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub health_timeout_secs: u64,
    pub generate_timeout_secs: u64,
    pub session_idle_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        let ollama_base_url =
            env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_BASE_URL.to_string());
        let model_name = env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let health_timeout_secs = env::var("HEALTH_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_HEALTH_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| "Invalid HEALTH_TIMEOUT_SECS")?;

        let generate_timeout_secs = env::var("GENERATE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_GENERATE_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| "Invalid GENERATE_TIMEOUT_SECS")?;

        let session_idle_secs = env::var("SESSION_IDLE_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_IDLE_SECS.to_string())
            .parse()
            .map_err(|_| "Invalid SESSION_IDLE_SECS")?;

        Ok(Config {
            server_host,
            server_port,
            data_dir,
            ollama_base_url,
            model_name,
            allowed_origins,
            environment,
            health_timeout_secs,
            generate_timeout_secs,
            session_idle_secs,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}
