pub mod chats;
pub mod credentials;
pub mod json_file;

pub use chats::ChatStore;
pub use credentials::{CredentialStore, UserMap};

use std::path::Path;

/// Create the data directory if it doesn't exist
pub fn ensure_data_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        tracing::info!("Creating data directory at: {:?}", path);
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
