use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::json_file::{read_or_default, write_pretty};
use crate::constants::{CHAT_FILE_PREFIX, EXPORT_FILE_PREFIX};
use crate::error::Result;
use crate::models::ChatTurn;

/// Per-user chat histories, one JSON array per user
#[derive(Debug)]
pub struct ChatStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl ChatStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn chat_path(&self, username: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}.json", CHAT_FILE_PREFIX, username))
    }

    pub fn export_path(&self, username: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}.json", EXPORT_FILE_PREFIX, username))
    }

    /// History in insertion order; empty when missing or unreadable
    pub fn load(&self, username: &str) -> Vec<ChatTurn> {
        read_or_default(&self.chat_path(username))
    }

    /// Append one (user prompt, assistant response) pair
    pub fn append_exchange(
        &self,
        username: &str,
        prompt: String,
        response: String,
        time: &str,
    ) -> Result<usize> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut turns = self.load(username);
        turns.extend(ChatTurn::exchange(prompt, response, time));
        write_pretty(&self.chat_path(username), &turns)?;

        Ok(turns.len())
    }

    /// Replace the history with an empty list
    pub fn clear(&self, username: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        write_pretty(&self.chat_path(username), &Vec::<ChatTurn>::new())?;
        tracing::info!("Chat history cleared for {}", username);
        Ok(())
    }

    /// Copy the current history to `export_chat_<username>.json`
    ///
    /// Returns the export path and the number of turns written.
    pub fn export(&self, username: &str) -> Result<(PathBuf, usize)> {
        let turns = self.load(username);
        let path = self.export_path(username);
        write_pretty(&path, &turns)?;

        tracing::info!("Exported {} turns for {} to {:?}", turns.len(), username, path);
        Ok((path, turns.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::fs;
    use tempfile::TempDir;

    const TIME: &str = "2024-05-01 10:00:00";

    #[test]
    fn test_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = ChatStore::new(dir.path());

        assert!(store.load("alice").is_empty());
    }

    #[test]
    fn test_append_exchange_in_pairs() {
        let dir = TempDir::new().unwrap();
        let store = ChatStore::new(dir.path());

        assert_eq!(
            store
                .append_exchange("alice", "p1".into(), "r1".into(), TIME)
                .unwrap(),
            2
        );
        assert_eq!(
            store
                .append_exchange("alice", "p2".into(), "r2".into(), "2024-05-01 11:00:00")
                .unwrap(),
            4
        );

        let turns = store.load("alice");
        let roles: Vec<Role> = turns.iter().map(|t| t.role).collect();
        let contents: Vec<&str> = turns.iter().map(|t| t.content.as_str()).collect();

        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert_eq!(contents, vec!["p1", "r1", "p2", "r2"]);
        assert_eq!(turns[0].time, TIME);
    }

    #[test]
    fn test_histories_are_per_user() {
        let dir = TempDir::new().unwrap();
        let store = ChatStore::new(dir.path());

        store
            .append_exchange("alice", "p".into(), "r".into(), TIME)
            .unwrap();

        assert_eq!(store.load("alice").len(), 2);
        assert!(store.load("bob").is_empty());
        assert!(dir.path().join("chats_alice.json").exists());
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = ChatStore::new(dir.path());
        store
            .append_exchange("alice", "p".into(), "r".into(), TIME)
            .unwrap();

        store.clear("alice").unwrap();

        assert!(store.load("alice").is_empty());
        let on_disk = fs::read_to_string(store.chat_path("alice")).unwrap();
        assert_eq!(on_disk.trim(), "[]");
    }

    #[test]
    fn test_corrupt_history_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = ChatStore::new(dir.path());
        fs::write(store.chat_path("alice"), "[{\"role\": ").unwrap();

        assert!(store.load("alice").is_empty());
    }

    #[test]
    fn test_export_writes_copy() {
        let dir = TempDir::new().unwrap();
        let store = ChatStore::new(dir.path());
        store
            .append_exchange("alice", "p".into(), "r".into(), TIME)
            .unwrap();

        let (path, count) = store.export("alice").unwrap();

        assert_eq!(count, 2);
        assert_eq!(path, dir.path().join("export_chat_alice.json"));
        let exported: Vec<ChatTurn> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(exported, store.load("alice"));
    }
}
