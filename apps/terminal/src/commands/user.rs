//! # User Commands
//!
//! Cart manipulation and checkout for one customer visit.
//!
//! ## Checkout Persistence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  cart ──clone──► staged cart ─┐                                        │
//! │                               ├─► confirm_purchase() ─► Receipt        │
//! │  inventory ─clone─► staged ───┘          │                             │
//! │                                          ▼                             │
//! │                              save staged inventory                     │
//! │                                   │            │                       │
//! │                                 Ok │            │ Err                  │
//! │                                   ▼            ▼                       │
//! │                 staged → live (both)     live state untouched,         │
//! │                                          PERSISTENCE_ERROR             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};
use vend_core::{cart, checkout, Bill, Cart, CartEntry, Receipt};

use crate::error::AppResult;
use crate::state::MachineState;

/// Adds units to the cart; returns the quantity of that code now in the cart.
pub fn add_to_cart(
    state: &MachineState,
    cart: &mut Cart,
    code: &str,
    quantity: i64,
) -> AppResult<i64> {
    debug!(code = %code, quantity, "add_to_cart command");
    cart::add_to_cart(cart, code, quantity, &state.inventory)?;
    Ok(cart.quantity_of(code))
}

pub fn update_cart_quantity(
    state: &MachineState,
    cart: &mut Cart,
    code: &str,
    quantity: i64,
) -> AppResult<()> {
    debug!(code = %code, quantity, "update_cart_quantity command");
    cart::update_cart_quantity(cart, code, quantity, &state.inventory)?;
    Ok(())
}

pub fn remove_from_cart(cart: &mut Cart, code: &str) -> AppResult<CartEntry> {
    debug!(code = %code, "remove_from_cart command");
    Ok(cart::remove_from_cart(cart, code)?)
}

/// Prices the cart at current inventory prices.
pub fn view_bill(state: &MachineState, cart: &Cart) -> AppResult<Bill> {
    Ok(checkout::compute_bill(cart, &state.inventory)?)
}

/// Confirms the purchase and saves the new stock levels.
pub fn checkout(state: &mut MachineState, cart: &mut Cart) -> AppResult<Receipt> {
    debug!(entries = cart.len(), "checkout command");

    let options = state.config.purchase_options();
    let mut staged_cart = cart.clone();
    let receipt = state.update_inventory(|inventory| {
        checkout::confirm_purchase(&mut staged_cart, inventory, &options)
    })?;
    *cart = staged_cart;

    info!(
        transaction_id = %receipt.transaction_id,
        total = %receipt.total(),
        lines = receipt.lines.len(),
        sold_out = receipt.sold_out.len(),
        "Purchase confirmed"
    );
    Ok(receipt)
}
