use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::MAX_USERNAME_LEN;

/// User record stored in the credential document, keyed by username
///
/// Field names match the on-disk format: `{"pw": "...", "created": "..."}`.
/// Only `pw` is required; a missing or unparseable `created` reads as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// SHA-256 hex digest of the password
    #[serde(rename = "pw")]
    pub password_digest: String,
    /// When the user registered (local time)
    #[serde(
        rename = "created",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Username and password submitted to register or sign in
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Check that a username is safe to embed in a chat file name
pub fn validate_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && !username.starts_with('.')
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
