//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vend-core errors (this file)                                          │
//! │  ├── CoreError        - Inventory, cart, checkout, login failures      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vend-store errors (separate crate)                                    │
//! │  ├── StoreError       - File read/write/decode failures                │
//! │  └── GateError        - Credential gate state failures                 │
//! │                                                                         │
//! │  Terminal errors (in app)                                              │
//! │  └── AppError         - What the menus render                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → message on screen      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error can be classified with [`ErrorKind`], the taxonomy the
//! presentation layer uses to pick how to react (re-prompt, deny, abort).

use std::fmt;

use thiserror::Error;

// =============================================================================
// Error Kind (taxonomy)
// =============================================================================

/// Classification shared by every error in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad shape or range of input (invalid name, negative price).
    Validation,
    /// Duplicate code or name.
    Conflict,
    /// Item or credential lookup miss.
    NotFound,
    /// Not enough quantity on hand.
    Stock,
    /// Credential mismatch.
    Auth,
    /// I/O failure on load/save.
    Persistence,
}

impl ErrorKind {
    /// Stable lowercase name, used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Stock => "stock",
            ErrorKind::Auth => "auth",
            ErrorKind::Persistence => "persistence",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent rule violations in the Inventory Manager, the Cart
/// & Checkout Engine, or an owner login attempt. They never carry I/O
/// failures; those belong to `vend-store`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No item with this code in the inventory.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The code exists in the inventory but is not in the cart.
    #[error("Item {0} is not in the cart")]
    NotInCart(String),

    /// Another item already uses this code.
    #[error("Item code '{0}' already exists")]
    DuplicateCode(String),

    /// Another item already uses this name (case-insensitive).
    #[error("An item named '{0}' already exists")]
    DuplicateName(String),

    /// Not enough stock to satisfy the request.
    ///
    /// ## When This Occurs
    /// - Owner removes more units than are on hand
    /// - User adds more to the cart than the machine holds
    /// - Stock dropped between add-to-cart and confirm
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { code: "101", name: "Water", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Menu shows: "Only 3 Water in stock"
    /// ```
    #[error("Insufficient stock for {name} ({code}): available {available}, requested {requested}")]
    InsufficientStock {
        code: String,
        name: String,
        available: i64,
        requested: i64,
    },

    /// Bill or purchase requested on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Owner ID or password did not match the stored record.
    #[error("Incorrect owner ID or password")]
    InvalidCredentials,

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Maps this error onto the shared taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ItemNotFound(_) | CoreError::NotInCart(_) => ErrorKind::NotFound,
            CoreError::DuplicateCode(_) | CoreError::DuplicateName(_) => ErrorKind::Conflict,
            CoreError::InsufficientStock { .. } => ErrorKind::Stock,
            CoreError::EmptyCart | CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::InvalidCredentials => ErrorKind::Auth,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched, so a failed validation never leaves a
/// partial change behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Item code is empty, too long, or has disallowed characters.
    #[error("Invalid item code '{code}': {reason}")]
    InvalidCode { code: String, reason: String },

    /// Item name breaks the character rules.
    #[error("Invalid item name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Price is negative or not a number.
    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },

    /// Quantity is out of range or not a whole number.
    #[error("Invalid quantity: {reason}")]
    InvalidQuantity { reason: String },
}

impl ValidationError {
    pub(crate) fn price(reason: impl Into<String>) -> Self {
        ValidationError::InvalidPrice {
            reason: reason.into(),
        }
    }

    pub(crate) fn quantity(reason: impl Into<String>) -> Self {
        ValidationError::InvalidQuantity {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
