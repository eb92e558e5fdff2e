use std::fmt;

use noteflow_auth::{SessionError, TransportError};

/// Central error types for the NoteFlow client
#[derive(Debug)]
pub enum AppError {
    /// Config file could not be read or parsed
    Config(String),
    /// Session storage error
    Session(SessionError),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// HTTP client could not be set up
    Transport(TransportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Session(e) => write!(f, "{}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Transport(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<TransportError> for AppError {
    fn from(e: TransportError) -> Self {
        AppError::Transport(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// User-friendly error messages for the terminal
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(msg) => format!("Invalid config.toml: {}", msg),
            AppError::Session(_) => {
                "Could not access the local session. Please check the data directory.".to_string()
            }
            AppError::Filesystem(_) => {
                "Error accessing files. Please check permissions of the data directory."
                    .to_string()
            }
            AppError::Transport(_) => "Could not set up the network client.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_becomes_config() {
        let err: AppError = toml::from_str::<toml::Table>("server_url = ")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.user_message().starts_with("Invalid config.toml"));
    }
}
