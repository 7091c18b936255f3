//! # Cart
//!
//! The user's session cart and the operations that change it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Function                 Cart Change          │
//! │  ───────────              ────────                 ───────────          │
//! │                                                                         │
//! │  Pick item ──────────────► add_to_cart() ────────► push / increment    │
//! │                                                                         │
//! │  Change quantity ────────► update_cart_quantity() ► entry.qty = n      │
//! │                                                                         │
//! │  Remove ─────────────────► remove_from_cart() ───► entries.remove(i)   │
//! │                                                                         │
//! │  View / checkout ────────► checkout.rs ──────────► (read, then clear)  │
//! │                                                                         │
//! │  Stock is checked eagerly against the LIVE inventory on every change.  │
//! │  Nothing is reserved: checkout re-checks before selling.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::validation::validate_cart_quantity;

/// One requested item in the cart.
///
/// Only the code and quantity are kept; names and prices are read from the
/// inventory when the bill is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub code: String,
    pub quantity: i64,
}

/// The shopping cart for one user session.
///
/// ## Invariants
/// - Entries are unique by `code` (adding the same code increases quantity)
/// - Every quantity is > 0
/// - Entries keep the order they were added in
///
/// Never persisted: dropped when the user leaves or the purchase completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, code: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Quantity of `code` already in the cart (0 if absent).
    pub fn quantity_of(&self, code: &str) -> i64 {
        self.get(code).map_or(0, |e| e.quantity)
    }

    /// Returns the number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn get_mut(&mut self, code: &str) -> CoreResult<&mut CartEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.code == code)
            .ok_or_else(|| CoreError::NotInCart(code.to_string()))
    }
}

/// Adds `quantity` of an item to the cart, or increases it if already there.
///
/// ## Checks
/// - `ItemNotFound` if the code is not in the inventory
/// - `InvalidQuantity` if quantity ≤ 0
/// - `InsufficientStock` if what is already in the cart plus `quantity`
///   exceeds the units on hand right now
///
/// ## Example
/// ```rust
/// use vend_core::{Cart, CoreError, Inventory, Money};
/// use vend_core::cart::add_to_cart;
///
/// let mut inventory = Inventory::new();
/// inventory.add_item("2", "Soda", Money::from_cents(150), 5).unwrap();
///
/// let mut cart = Cart::new();
/// add_to_cart(&mut cart, "2", 3, &inventory).unwrap();
/// assert!(matches!(
///     add_to_cart(&mut cart, "2", 3, &inventory),
///     Err(CoreError::InsufficientStock { available: 5, requested: 6, .. })
/// ));
/// assert_eq!(cart.quantity_of("2"), 3);
/// ```
pub fn add_to_cart(
    cart: &mut Cart,
    code: &str,
    quantity: i64,
    inventory: &Inventory,
) -> CoreResult<()> {
    let item = inventory.require(code)?;
    validate_cart_quantity(quantity)?;

    let already_in_cart = cart.quantity_of(code);
    let requested = already_in_cart.saturating_add(quantity);
    if !item.can_sell(requested) {
        return Err(CoreError::InsufficientStock {
            code: item.code.clone(),
            name: item.name.clone(),
            available: item.quantity,
            requested,
        });
    }

    match cart.entries.iter_mut().find(|e| e.code == code) {
        Some(entry) => entry.quantity = requested,
        None => cart.entries.push(CartEntry {
            code: code.to_string(),
            quantity,
        }),
    }

    Ok(())
}

/// Replaces the quantity of an item already in the cart.
///
/// ## Checks
/// - `NotInCart` if the code is not in the cart
/// - `InvalidQuantity` if new_quantity ≤ 0 (use [`remove_from_cart`])
/// - `ItemNotFound` if the item has since left the inventory
/// - `InsufficientStock` if new_quantity exceeds the units on hand
pub fn update_cart_quantity(
    cart: &mut Cart,
    code: &str,
    new_quantity: i64,
    inventory: &Inventory,
) -> CoreResult<()> {
    if cart.get(code).is_none() {
        return Err(CoreError::NotInCart(code.to_string()));
    }
    validate_cart_quantity(new_quantity)?;

    let item = inventory.require(code)?;
    if !item.can_sell(new_quantity) {
        return Err(CoreError::InsufficientStock {
            code: item.code.clone(),
            name: item.name.clone(),
            available: item.quantity,
            requested: new_quantity,
        });
    }

    cart.get_mut(code)?.quantity = new_quantity;
    Ok(())
}

/// Removes an item from the cart, returning the removed entry.
pub fn remove_from_cart(cart: &mut Cart, code: &str) -> CoreResult<CartEntry> {
    let index = cart
        .entries
        .iter()
        .position(|e| e.code == code)
        .ok_or_else(|| CoreError::NotInCart(code.to_string()))?;
    Ok(cart.entries.remove(index))
}
