use std::fmt;
use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Collaborator endpoint a fetch failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Catalog,
    Ownership,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Catalog => "dex",
            Endpoint::Ownership => "pokemon",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No session credential, log in first")]
    AuthMissing,

    #[error("Failed to fetch /{endpoint}: {reason}")]
    FetchFailure {
        endpoint: Endpoint,
        status: Option<u16>,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to persist settings at {path}: {reason}")]
    Preferences { path: String, reason: String },
}

impl ClientError {
    pub fn fetch(endpoint: Endpoint, status: Option<u16>, reason: impl Into<String>) -> Self {
        ClientError::FetchFailure {
            endpoint,
            status,
            reason: reason.into(),
        }
    }

    pub fn preferences(path: &Path, reason: impl fmt::Display) -> Self {
        ClientError::Preferences {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the UI should send the user back through login.
    pub fn needs_login(&self) -> bool {
        matches!(self, ClientError::AuthMissing)
    }
}
