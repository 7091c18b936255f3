//! # App Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal                           │
//! │                                                                         │
//! │  Menu action (e.g. "Add to cart")                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  AppResult<T>                                                    │  │
//! │  │         │                                                        │  │
//! │  │  StoreError? ───── logged with tracing::error! ─────┐           │  │
//! │  │         │                                          │           │  │
//! │  │  CoreError / GateError? ───────────────────── AppError ───────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu prints "[INSUFFICIENT_STOCK] Only 3 Water(s) in stock ..."       │
//! │  and re-prompts. TERMINAL_ERROR (stdin closed) ends the session.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use vend_core::{CoreError, ErrorKind, ValidationError};
use vend_store::{GateError, StoreError};

/// Error returned from terminal commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Item or credential record missing
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Duplicate code or name
    Conflict,

    /// Insufficient stock
    InsufficientStock,

    /// Owner login failed
    AuthError,

    /// Reading or writing the data directory failed
    PersistenceError,

    /// Prompt could not be shown or read
    TerminalError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::AuthError => "AUTH_ERROR",
            ErrorCode::PersistenceError => "PERSISTENCE_ERROR",
            ErrorCode::TerminalError => "TERMINAL_ERROR",
        }
    }

    /// Code for an error of the given kind.
    pub const fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Validation => ErrorCode::ValidationError,
            ErrorKind::Conflict => ErrorCode::Conflict,
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::Stock => ErrorCode::InsufficientStock,
            ErrorKind::Auth => ErrorCode::AuthError,
            ErrorKind::Persistence => ErrorCode::PersistenceError,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Errors that end the interactive session instead of re-prompting.
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::TerminalError
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = ErrorCode::from_kind(err.kind());
        match err {
            CoreError::InsufficientStock {
                name,
                available,
                requested,
                ..
            } => AppError::new(
                code,
                format!(
                    "Only {} {}(s) in stock, {} requested",
                    available, name, requested
                ),
            ),
            other => AppError::new(code, other.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts store errors to app errors.
///
/// The path and cause are kept in the message: the owner is the one who can
/// fix a permissions problem or a damaged file.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Store operation failed");
        AppError::new(ErrorCode::from_kind(err.kind()), err.to_string())
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Core(e) => e.into(),
            GateError::Store(e) => e.into(),
            other => AppError::new(ErrorCode::from_kind(other.kind()), other.to_string()),
        }
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        tracing::error!(error = %err, "Prompt failed");
        AppError::new(ErrorCode::TerminalError, err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type for terminal commands.
pub type AppResult<T> = Result<T, AppError>;
