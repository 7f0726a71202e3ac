//! Client for the Ollama text-generation HTTP API
//!
//! Two calls are used: `GET /api/tags` as a cheap liveness probe and
//! `POST /api/generate` with `stream: false` for a single blocking completion.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Errors returned by [`OllamaClient::generate`]
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Where to send generation requests and which model to ask for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceSettings {
    pub base_url: String,
    pub model: String,
}

impl InferenceSettings {
    /// Join an API path onto the base URL, ignoring trailing slashes
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Outcome of a health probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
    /// `HTTP <code>` when the server answered, `Error: ...` otherwise
    pub detail: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Clone)]
pub struct OllamaClient {
    http: Client,
    health_timeout: Duration,
    generate_timeout: Duration,
}

impl OllamaClient {
    pub fn new(health_timeout: Duration, generate_timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            health_timeout,
            generate_timeout,
        }
    }

    /// Probe `/api/tags`; healthy only on HTTP 200
    pub async fn health_check(&self, settings: &InferenceSettings) -> HealthStatus {
        let url = settings.endpoint("/api/tags");

        match self
            .http
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                HealthStatus {
                    ok: status == StatusCode::OK,
                    detail: format!("HTTP {}", status.as_u16()),
                }
            }
            Err(e) => {
                tracing::debug!("Health probe to {} failed: {}", url, e);
                HealthStatus {
                    ok: false,
                    detail: format!("Error: {}", e),
                }
            }
        }
    }

    /// Request a single non-streaming completion and return its trimmed text
    pub async fn generate(
        &self,
        settings: &InferenceSettings,
        prompt: &str,
    ) -> Result<String, InferenceError> {
        let url = settings.endpoint("/api/generate");
        let payload = json!({
            "model": settings.model,
            "prompt": prompt,
            "stream": false,
        });

        tracing::debug!(
            "Generating with model {} at {} ({} prompt bytes)",
            settings.model,
            url,
            prompt.len()
        );

        let response = self
            .http
            .post(&url)
            .timeout(self.generate_timeout)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: GenerateResponse = response.json().await?;
        Ok(data.response.trim().to_string())
    }
}
