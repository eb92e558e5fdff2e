use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::models::Page;

/// Storage key of the session token
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Error type for session storage
#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "Session storage error: {}", e),
            SessionError::Json(e) => write!(f, "Session file is corrupt: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Io(e)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        SessionError::Json(e)
    }
}

/// Persistent string key/value store, the local-storage of the client
///
/// Backed by a single JSON object file. Every change is persisted at once.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl SessionStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let entries: BTreeMap<String, String> = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.into());
        self.persist()
    }

    /// Remove `key`, returning whether it was present
    pub fn remove(&mut self, key: &str) -> Result<bool, SessionError> {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.get(AUTH_TOKEN_KEY)
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth_token().is_some_and(|t| !t.is_empty())
    }

    /// Write to a temp file next to the store and rename it into place, so
    /// the store file is always either the old or the new content
    fn persist(&self) -> Result<(), SessionError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let raw = serde_json::to_string_pretty(&self.entries)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(raw.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Drop the session token; the caller should show the login page next
pub fn logout(store: &mut SessionStore) -> Result<Page, SessionError> {
    if store.remove(AUTH_TOKEN_KEY)? {
        log::info!("Session token cleared");
    } else {
        log::debug!("Logout without a stored session token");
    }
    Ok(Page::Login)
}
