//! # vend-core: Pure Business Logic for the Vending Machine
//!
//! This crate is the **heart** of the machine. It contains the inventory,
//! cart and checkout rules as plain functions over explicit values, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal (apps/terminal)                        │   │
//! │  │      Owner menu ──► Inventory ops    User menu ──► Cart ops     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed arguments                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vend-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │   cart    │  │ checkout  │  │ validation│  │   │
//! │  │   │ Inventory │  │   Cart    │  │   Bill    │  │   rules   │  │   │
//! │  │   │   Item    │  │ CartEntry │  │  Receipt  │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • EXPLICIT STATE              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vend-store (Persistence Layer)                  │   │
//! │  │          inventory.json, owner_credentials.json, config         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Item, Credentials)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types and the error taxonomy
//! - [`validation`] - Input validation rules
//! - [`inventory`] - Inventory Manager
//! - [`cart`] - Cart operations checked against live stock
//! - [`checkout`] - Bills, purchase confirmation, receipts
//!
//! ## Example Usage
//!
//! ```rust
//! use vend_core::{Cart, Inventory, Money, PurchaseOptions};
//! use vend_core::cart::add_to_cart;
//! use vend_core::checkout::{compute_bill, confirm_purchase};
//!
//! let mut inventory = Inventory::new();
//! inventory.add_item("101", "Water", Money::from_cents(100), 10).unwrap();
//!
//! let mut cart = Cart::new();
//! add_to_cart(&mut cart, "101", 3, &inventory).unwrap();
//! assert_eq!(compute_bill(&cart, &inventory).unwrap().total(), Money::from_cents(300));
//!
//! let receipt = confirm_purchase(&mut cart, &mut inventory, &PurchaseOptions::default()).unwrap();
//! assert_eq!(receipt.total(), Money::from_cents(300));
//! assert_eq!(inventory.get("101").unwrap().quantity, 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod inventory;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry};
pub use checkout::{Bill, BillLine, PurchaseOptions, Receipt};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item code.
pub const MAX_ITEM_CODE_LEN: usize = 32;

/// Maximum length of an item name.
///
/// Long enough for "Half & Half Coffee Creamer 12-Pack", short enough to keep
/// the stock table readable.
pub const MAX_ITEM_NAME_LEN: usize = 64;

/// Maximum units of one item, on hand or in a cart.
///
/// ## Business Reason
/// A slot holds a few dozen units; the cap catches typing 10000 instead of
/// 10 and keeps every price × quantity product far inside `i64`.
pub const MAX_ITEM_QUANTITY: i64 = 9_999;

/// Maximum unit price in cents ($10,000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000;

/// Number of characters kept from the UUID when building a transaction ID.
pub const TRANSACTION_ID_LEN: usize = 8;
