use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// Read a JSON document, falling back to `T::default()`
///
/// A missing file is the normal first-run case and is silent. Unreadable or
/// corrupt files are logged and treated as empty.
pub fn read_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return T::default(),
        Err(e) => {
            tracing::warn!("Failed to read {:?}, using empty default: {}", path, e);
            return T::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Corrupt JSON in {:?}, using empty default: {}", path, e);
            T::default()
        }
    }
}

/// Write a JSON document, pretty-printed
///
/// The document is written next to its destination and renamed into place,
/// so readers never observe a half-written file.
pub fn write_pretty<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    Ok(())
}
