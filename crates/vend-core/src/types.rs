//! # Domain Types
//!
//! Core records used throughout the machine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Item       │   │   Credentials   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  code (unique)  │   │  owner_id       │                             │
//! │  │  name (unique)  │   │  password       │                             │
//! │  │  price_cents    │   │  (plain text)   │                             │
//! │  │  quantity       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Collections and session types live next to their rules:               │
//! │  Inventory (inventory.rs), Cart (cart.rs), Bill/Receipt (checkout.rs)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A product slot in the vending machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Business identifier typed by owner and user (e.g. "101").
    pub code: String,

    /// Display name, unique across the inventory (case-insensitive).
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Units on hand, never negative.
    pub quantity: i64,
}

impl Item {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Price × quantity on hand.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }

    /// Checks whether `quantity` units can be taken from this item.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity <= self.quantity
    }

    /// True when nothing is left on hand.
    #[inline]
    pub fn is_sold_out(&self) -> bool {
        self.quantity == 0
    }
}

// =============================================================================
// Credentials
// =============================================================================

/// The single owner login record.
///
/// ## Security Note
/// The password is stored and compared in plain text. The owner gate is a
/// convenience that keeps customers out of the stock menu, not a security
/// boundary.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub owner_id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(owner_id: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            owner_id: owner_id.into(),
            password: password.into(),
        }
    }

    /// Compares a login attempt against this record.
    ///
    /// Both fields must match exactly (case-sensitive, no trimming).
    pub fn verify(&self, owner_id: &str, password: &str) -> CoreResult<()> {
        if self.owner_id == owner_id && self.password == password {
            Ok(())
        } else {
            Err(CoreError::InvalidCredentials)
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("owner_id", &self.owner_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
