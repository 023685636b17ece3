// src/client/token_store.rs
//! Persisted client state: the bearer token and the demo profile record

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

use crate::types::Role;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const DEMO_PROFILE_KEY: &str = "demo_profile";

/// String key/value storage that outlives a single run
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().remove(key);
        Ok(())
    }
}

/// JSON object file holding all keys. Every read goes to disk so separate
/// CLI invocations see each other's writes.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse storage file: {}", self.path.display()))
    }

    fn save(&self, items: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }

    /// A file that cannot be read back is replaced rather than blocking
    /// every later write.
    fn update<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let _guard = self.write_lock.lock();
        let mut items = self.load().unwrap_or_else(|e| {
            warn!("Overwriting unreadable client state: {:#}", e);
            HashMap::new()
        });
        apply(&mut items);
        self.save(&items)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut items) => items.remove(key),
            Err(e) => {
                warn!("Ignoring unreadable client state: {:#}", e);
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

/// Record kept next to the token for display: who signed in, as what, when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoProfile {
    pub email: String,
    pub role: Option<Role>,
    pub logged_in_at: DateTime<Utc>,
}

/// Token access over an injected [`Storage`]. Presence of a token is all
/// that counts as being signed in; nothing expires.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn Storage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage.get_item(AUTH_TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.storage.set_item(AUTH_TOKEN_KEY, token)
    }

    pub fn clear_token(&self) -> Result<()> {
        self.storage.remove_item(AUTH_TOKEN_KEY)
    }

    pub fn demo_profile(&self) -> Option<DemoProfile> {
        let raw = self.storage.get_item(DEMO_PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Ignoring malformed demo profile: {}", e);
                None
            }
        }
    }

    pub fn set_demo_profile(&self, profile: &DemoProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.storage.set_item(DEMO_PROFILE_KEY, &raw)
    }

    pub fn clear_demo_profile(&self) -> Result<()> {
        self.storage.remove_item(DEMO_PROFILE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_state_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("jobmatch-test-{}", uuid::Uuid::new_v4()))
            .join("session.json")
    }

    #[test]
    fn test_set_get_clear_token() {
        let store = TokenStore::in_memory();
        assert_eq!(store.get_token(), None);

        store.set_token("demo_token_123").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("demo_token_123"));

        store.clear_token().unwrap();
        assert_eq!(store.get_token(), None);

        store.set_token("").unwrap();
        assert_eq!(store.get_token().as_deref(), Some(""));
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let path = temp_state_path();

        let first = TokenStore::new(Arc::new(FileStorage::new(&path)));
        first.set_token("persisted").unwrap();
        first
            .set_demo_profile(&DemoProfile {
                email: "user@example.com".into(),
                role: Some(Role::Talent),
                logged_in_at: Utc::now(),
            })
            .unwrap();

        let second = TokenStore::new(Arc::new(FileStorage::new(&path)));
        assert_eq!(second.get_token().as_deref(), Some("persisted"));
        assert_eq!(second.demo_profile().unwrap().email, "user@example.com");

        second.clear_token().unwrap();
        assert_eq!(first.get_token(), None);
        assert!(first.demo_profile().is_some());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_unreadable_file_reads_as_empty() {
        let path = temp_state_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let store = TokenStore::new(Arc::new(FileStorage::new(&path)));
        assert_eq!(store.get_token(), None);

        store.set_token("fresh").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("fresh"));
        store.clear_token().unwrap();
        assert_eq!(store.get_token(), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
