use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Address the NoteFlow server binds to by default
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:10106";

/// Client settings, read from `config.toml` in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&raw)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(settings)
    }

    /// Apply a server URL given on the command line or in the environment
    pub fn with_server_override(mut self, server: Option<String>) -> Self {
        if let Some(server) = server.filter(|s| !s.trim().is_empty()) {
            self.server_url = server;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server_url = \"https://notes.example.com\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.server_url, "https://notes.example.com");
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_server_override() {
        let settings = Settings::default().with_server_override(Some("http://localhost:9".into()));
        assert_eq!(settings.server_url, "http://localhost:9");

        let settings = Settings::default().with_server_override(Some("  ".into()));
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
    }
}
