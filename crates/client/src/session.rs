use std::fmt;

use crate::error::{ClientError, Result};

pub const TOKEN_ENV: &str = "POKEDEX_TOKEN";

/// Opaque bearer credential held on the client side.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    credential: Option<String>,
}

impl Session {
    pub fn new(credential: impl Into<String>) -> Self {
        let credential = credential.into();
        let credential = (!credential.trim().is_empty()).then_some(credential);
        Self { credential }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        std::env::var(TOKEN_ENV)
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// The credential, or `AuthMissing` when the user has to log in.
    pub fn credential(&self) -> Result<&str> {
        self.credential.as_deref().ok_or(ClientError::AuthMissing)
    }

    /// Drops the credential ("reset session" recovery).
    pub fn reset(&mut self) {
        self.credential = None;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
