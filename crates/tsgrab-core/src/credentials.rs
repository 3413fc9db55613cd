//! Messaging credentials read from the environment.
//!
//! `API_ID`, `API_HASH` and `SESSION_STRING` are accepted for compatibility
//! with existing launch scripts. Nothing in the download pipeline uses them.

use std::fmt;

pub const API_ID: &str = "API_ID";
pub const API_HASH: &str = "API_HASH";
pub const SESSION_STRING: &str = "SESSION_STRING";

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("API_ID must be an integer, got {0:?}")]
    InvalidApiId(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct MessagingCredentials {
    pub api_id: i64,
    pub api_hash: String,
    pub session_string: String,
}

impl fmt::Debug for MessagingCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessagingCredentials")
            .field("api_id", &self.api_id)
            .field("api_hash", &"<redacted>")
            .field("session_string", &"<redacted>")
            .finish()
    }
}

impl MessagingCredentials {
    /// Reads the process environment. `Ok(None)` if any value is unset.
    pub fn from_env() -> Result<Option<Self>, CredentialsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (Some(id), Some(api_hash), Some(session_string)) =
            (lookup(API_ID), lookup(API_HASH), lookup(SESSION_STRING))
        else {
            return Ok(None);
        };
        let api_id = id
            .trim()
            .parse::<i64>()
            .map_err(|_| CredentialsError::InvalidApiId(id.clone()))?;
        Ok(Some(Self {
            api_id,
            api_hash,
            session_string,
        }))
    }
}
