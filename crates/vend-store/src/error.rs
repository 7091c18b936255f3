//! # Store Error Types
//!
//! Error types for file, configuration and credential gate operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / toml::de::Error                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and categorization      │
//! │       │                                                                 │
//! │       ├──► GateError::Store (setup while persisting credentials)       │
//! │       ▼                                                                 │
//! │  AppError (in terminal app) ← Rendered as a message                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use vend_core::{CoreError, ErrorKind};

/// Persistence and configuration errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record file exists but could not be read, or could not be written.
    ///
    /// ## When This Occurs
    /// - Permission denied on the data directory
    /// - The record path is a directory
    /// - Disk full
    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file was read but its contents are not a valid record.
    ///
    /// ## When This Occurs
    /// - File truncated or edited by hand
    /// - Two items in the file share a code or a name
    #[error("{} is corrupted: {reason}", .path.display())]
    Corrupted { path: PathBuf, reason: String },

    /// Serializing a record failed.
    #[error("Failed to encode {what}: {reason}")]
    Encode { what: &'static str, reason: String },

    /// The config file could not be parsed.
    #[error("Failed to load config {}: {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    /// The configuration parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupted(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        StoreError::Corrupted {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Maps this error onto the shared taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Io { .. } | StoreError::Corrupted { .. } | StoreError::Encode { .. } => {
                ErrorKind::Persistence
            }
            StoreError::ConfigLoad { .. } | StoreError::InvalidConfig(_) => ErrorKind::Validation,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Gate Error
// =============================================================================

/// Credential gate errors.
#[derive(Debug, Error)]
pub enum GateError {
    /// Login attempted before any credentials were set up.
    #[error("Owner credentials have not been set up yet")]
    NotInitialized,

    /// Setup attempted after credentials already exist.
    #[error("Owner credentials are already set up")]
    AlreadyInitialized,

    /// Credential mismatch.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Saving or loading the credential record failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::NotInitialized => ErrorKind::NotFound,
            GateError::AlreadyInitialized => ErrorKind::Conflict,
            GateError::Core(err) => err.kind(),
            GateError::Store(err) => err.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_kinds() {
        let io = StoreError::io(
            "/data/inventory.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(io.kind(), ErrorKind::Persistence);
        assert!(io.to_string().contains("/data/inventory.json"));

        let corrupted = StoreError::corrupted("/data/inventory.json", "expected value");
        assert_eq!(corrupted.kind(), ErrorKind::Persistence);
        assert_eq!(
            corrupted.to_string(),
            "/data/inventory.json is corrupted: expected value"
        );

        assert_eq!(
            StoreError::InvalidConfig("bad".into()).kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_gate_error_kinds() {
        assert_eq!(GateError::NotInitialized.kind(), ErrorKind::NotFound);
        assert_eq!(GateError::AlreadyInitialized.kind(), ErrorKind::Conflict);
        assert_eq!(
            GateError::from(CoreError::InvalidCredentials).kind(),
            ErrorKind::Auth
        );
    }
}
