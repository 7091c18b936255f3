//! # Owner Commands
//!
//! Stock management behind the credential gate. Every successful change is
//! saved before it becomes live (see [`MachineState::update_inventory`]).

use tracing::{debug, info};
use vend_core::validation::{title_case, validate_cart_quantity};
use vend_core::{Item, Money};

use crate::error::AppResult;
use crate::state::MachineState;

/// Inventory listing with its total value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub items: Vec<Item>,
    pub total_value: Money,
}

/// Adds a new item. The name is title-cased first ("red bull" → "Red Bull").
pub fn add_item(
    state: &mut MachineState,
    code: &str,
    name: &str,
    price: Money,
    quantity: i64,
) -> AppResult<Item> {
    let code = code.trim();
    let name = title_case(name.trim());
    debug!(code = %code, name = %name, "add_item command");

    let item =
        state.update_inventory(|inventory| inventory.add_item(code, &name, price, quantity))?;

    info!(
        code = %item.code,
        name = %item.name,
        price = %item.price(),
        quantity = item.quantity,
        "Item added"
    );
    Ok(item)
}

/// Adds `quantity` units to an existing item.
pub fn restock(state: &mut MachineState, code: &str, quantity: i64) -> AppResult<Item> {
    debug!(code = %code, quantity, "restock command");
    validate_cart_quantity(quantity)?;
    adjust_stock(state, code, quantity)
}

/// Adds (positive delta) or removes (negative delta) units.
pub fn adjust_stock(state: &mut MachineState, code: &str, delta: i64) -> AppResult<Item> {
    debug!(code = %code, delta, "adjust_stock command");

    let item = state.update_inventory(|inventory| {
        inventory.adjust_quantity(code, delta)?;
        inventory.require(code).cloned()
    })?;

    info!(code = %code, delta, quantity = item.quantity, "Stock adjusted");
    Ok(item)
}

/// Sets the units on hand to an absolute value.
pub fn set_quantity(state: &mut MachineState, code: &str, quantity: i64) -> AppResult<Item> {
    debug!(code = %code, quantity, "set_quantity command");

    let item = state.update_inventory(|inventory| {
        inventory.set_quantity(code, quantity)?;
        inventory.require(code).cloned()
    })?;

    info!(code = %code, quantity, "Stock set");
    Ok(item)
}

pub fn update_price(state: &mut MachineState, code: &str, price: Money) -> AppResult<Item> {
    debug!(code = %code, price = %price, "update_price command");

    let item = state.update_inventory(|inventory| inventory.update_price(code, price))?;

    info!(code = %code, price = %item.price(), "Price updated");
    Ok(item)
}

pub fn remove_item(state: &mut MachineState, code: &str) -> AppResult<Item> {
    debug!(code = %code, "remove_item command");

    let item = state.update_inventory(|inventory| inventory.remove_item(code))?;

    info!(code = %item.code, name = %item.name, "Item removed");
    Ok(item)
}

pub fn inventory_summary(state: &MachineState) -> InventorySummary {
    InventorySummary {
        items: state.inventory.items().cloned().collect(),
        total_value: state.inventory.compute_total_stock_value(),
    }
}
