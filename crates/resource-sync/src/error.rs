//! Synchronization Errors
//!
//! Every failure of a load or mutation ends up here. None of them is
//! fatal: callers keep their previous state and surface the message.

use serde::{Deserialize, Serialize};

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Sync-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyncError {
    /// Server answered with a non-2xx status
    Http { status: u16, message: Option<String> },
    /// Request never produced a response
    Transport(String),
    /// Response body did not have the expected shape
    Decode(String),
    /// Rejected before any request was made
    Validation(String),
    /// Preference storage could not be written
    Storage(String),
}

impl SyncError {
    /// Short text suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Http { message: Some(msg), .. } if !msg.trim().is_empty() => msg.clone(),
            SyncError::Validation(msg) => msg.clone(),
            _ => "Something went wrong while talking to the server".to_string(),
        }
    }
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::Http { status, message: Some(msg) } => write!(f, "HTTP {}: {}", status, msg),
            SyncError::Http { status, message: None } => write!(f, "HTTP {}", status),
            SyncError::Transport(msg) => write!(f, "Transport error: {}", msg),
            SyncError::Decode(msg) => write!(f, "Decode error: {}", msg),
            SyncError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            SyncError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}
