//! Profile persistence for resumable sessions.
//!
//! Saves the life-architect state (lists, history, theme) as versioned
//! JSON, plus a small key-value abstraction for frontends that keep
//! per-user scraps of state under namespaced keys.

use crate::architect::ArchitectState;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Current profile file version.
const PROFILE_VERSION: u32 = 1;

/// Unique identifier for a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace a key under a user, so profiles sharing one store never
/// collide.
pub fn scoped_key(user: UserId, key: &str) -> String {
    format!("{user}/{key}")
}

/// A minimal key-value backend for frontend state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<serde_json::Value>;
    fn set(&mut self, key: &str, value: serde_json::Value);
    fn remove(&mut self, key: &str) -> Option<serde_json::Value>;
}

/// In-memory store, for tests and frontends without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: serde_json::Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.entries.remove(key)
    }
}

/// Fetch and deserialize a value, falling back to `T::default()` when the
/// key is missing or holds something malformed.
pub fn get_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    store
        .get(key)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// A saved profile with everything needed to resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProfile {
    /// File format version for compatibility checking.
    pub version: u32,

    /// When the profile was saved (unix seconds, as a string).
    pub saved_at: String,

    /// The complete life-architect state.
    pub architect: ArchitectState,

    /// Quick-access metadata about the profile.
    pub metadata: ProfileMetadata,
}

/// Metadata about a profile file for quick display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Owning user.
    pub user: UserId,

    /// User's display name, if known.
    pub user_name: Option<String>,

    /// Number of task-manager entries.
    pub task_count: usize,

    /// Number of history lines.
    pub history_len: usize,

    /// Chosen display theme.
    pub theme: Option<String>,
}

impl SavedProfile {
    /// Create a new saved profile from session state.
    pub fn new(user: UserId, user_name: Option<String>, architect: ArchitectState) -> Self {
        let metadata = ProfileMetadata {
            user,
            user_name,
            task_count: architect.tasks.len(),
            history_len: architect.history.len(),
            theme: architect.theme.clone(),
        };

        Self {
            version: PROFILE_VERSION,
            saved_at: unix_now(),
            architect,
            metadata,
        }
    }

    /// Save to a JSON file.
    pub async fn save_json(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Load from a JSON file.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).await?;
        let saved: Self = serde_json::from_str(&content)?;

        if saved.version != PROFILE_VERSION {
            return Err(StoreError::VersionMismatch {
                expected: PROFILE_VERSION,
                found: saved.version,
            });
        }

        Ok(saved)
    }

    /// Load a profile, falling back to a fresh one when the file is
    /// missing or unreadable.
    pub async fn load_or_default(path: impl AsRef<Path>, user: UserId) -> Self {
        match Self::load_json(path).await {
            Ok(saved) => saved,
            Err(_) => Self::new(user, None, ArchitectState::default()),
        }
    }

    /// Get metadata without deserializing the full architect state.
    pub async fn peek_metadata(path: impl AsRef<Path>) -> Result<ProfileMetadata, StoreError> {
        let content = fs::read_to_string(path).await?;

        #[derive(Deserialize)]
        struct Partial {
            version: u32,
            metadata: ProfileMetadata,
        }

        let partial: Partial = serde_json::from_str(&content)?;

        if partial.version != PROFILE_VERSION {
            return Err(StoreError::VersionMismatch {
                expected: PROFILE_VERSION,
                found: partial.version,
            });
        }

        Ok(partial.metadata)
    }
}

/// Generate a profile path for a user.
pub fn profile_path(dir: impl AsRef<Path>, user: UserId) -> std::path::PathBuf {
    dir.as_ref().join(format!("{user}.json"))
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", now.as_secs())
}
