//! # Demo Inventory
//!
//! Stocks an empty machine with a fixed set of snacks and drinks for
//! development and demos.
//!
//! ## Usage
//! ```bash
//! # Seed the default data directory
//! vend seed
//!
//! # Replace whatever is already there
//! vend seed --force
//!
//! # Seed a scratch directory
//! vend --data-dir ./scratch seed
//! ```
//!
//! Codes follow the slot numbering on the machine's keypad: row letter, then
//! column (`A1`, `A2`, ... `C4`).

use tracing::{debug, info};
use vend_core::{Inventory, Money};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::state::MachineState;

/// (code, name, price in cents, quantity)
pub const DEMO_ITEMS: &[(&str, &str, i64, i64)] = &[
    ("A1", "Coca-Cola", 175, 12),
    ("A2", "Sprite", 175, 10),
    ("A3", "Dr Pepper", 175, 8),
    ("A4", "Red Bull", 325, 6),
    ("B1", "Dasani Water", 125, 15),
    ("B2", "Iced Tea", 200, 8),
    ("B3", "Orange Juice", 250, 6),
    ("B4", "Half & Half", 150, 4),
    ("C1", "Lays Classic", 150, 10),
    ("C2", "Doritos Nacho", 150, 10),
    ("C3", "M&Ms", 125, 12),
    ("C4", "Kit Kat", 125, 12),
];

/// Builds the demo inventory without touching the machine.
pub fn demo_inventory() -> AppResult<Inventory> {
    let mut inventory = Inventory::new();
    for &(code, name, cents, quantity) in DEMO_ITEMS {
        inventory.add_item(code, name, Money::from_cents(cents), quantity)?;
    }
    Ok(inventory)
}

/// Replaces the machine's inventory with the demo set and saves it.
///
/// Refuses to overwrite a stocked machine unless `force` is set.
pub fn seed_inventory(state: &mut MachineState, force: bool) -> AppResult<usize> {
    debug!(force, "seed_inventory command");

    if !state.inventory.is_empty() && !force {
        return Err(AppError::new(
            ErrorCode::Conflict,
            format!(
                "Inventory already holds {} item(s); use --force to replace it",
                state.inventory.len()
            ),
        ));
    }

    let demo = demo_inventory()?;
    let count = state.update_inventory(|inventory| {
        *inventory = demo;
        Ok(inventory.len())
    })?;

    info!(items = count, "Demo inventory seeded");
    Ok(count)
}
