use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use serde_json::Value;

use super::json_file::{read_or_default, write_pretty};
use crate::constants::{ERR_INVALID_USERNAME, ERR_MISSING_CREDENTIALS, USERS_FILE};
use crate::error::{AppError, Result};
use crate::models::{validate_username, UserRecord};
use crate::security::{hash_password, verify_password};

/// Username -> record map of every readable entry
pub type UserMap = BTreeMap<String, UserRecord>;

/// The document as written, entries kept verbatim
type RawUserMap = BTreeMap<String, Value>;

fn parse_record(username: &str, value: Value) -> Option<UserRecord> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Skipping unreadable credential entry {}: {}", username, e);
            None
        }
    }
}

/// Credential document shared by all users (`users.json`)
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CredentialStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(USERS_FILE),
            write_lock: Mutex::new(()),
        }
    }

    fn load_raw(&self) -> RawUserMap {
        read_or_default(&self.path)
    }

    /// Current contents; empty when the file is missing or unreadable
    ///
    /// Entries without a usable `pw` are left out but stay in the file.
    pub fn load(&self) -> UserMap {
        self.load_raw()
            .into_iter()
            .filter_map(|(name, value)| parse_record(&name, value).map(|r| (name, r)))
            .collect()
    }

    /// Create a user; fails on blank fields, unsafe names and duplicates
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(ERR_MISSING_CREDENTIALS.to_string()));
        }
        if !validate_username(username) {
            return Err(AppError::InvalidInput(ERR_INVALID_USERNAME.to_string()));
        }

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut users = self.load_raw();
        if users.contains_key(username) {
            tracing::info!("Registration rejected, username taken: {}", username);
            return Err(AppError::UserAlreadyExists);
        }

        let record = UserRecord {
            password_digest: hash_password(password),
            created_at: Some(Local::now().naive_local()),
        };
        users.insert(username.to_string(), serde_json::to_value(record)?);
        write_pretty(&self.path, &users)?;

        tracing::info!("New user registered: {}", username);
        Ok(())
    }

    /// Check a username/password pair
    ///
    /// Unknown users and wrong passwords produce the same error.
    pub fn verify(&self, username: &str, password: &str) -> Result<()> {
        let record = self
            .load_raw()
            .remove(username)
            .and_then(|value| parse_record(username, value));

        match record {
            Some(record) if verify_password(password, &record.password_digest) => Ok(()),
            _ => {
                tracing::warn!("Rejected sign-in for {}", username);
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
