//! # Inventory Manager
//!
//! The full set of items in the machine, and every owner operation on it.
//!
//! ## Owner Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Owner Action             Method                   Fails With           │
//! │  ────────────             ──────                   ──────────           │
//! │                                                                         │
//! │  Load new item ─────────► add_item() ────────────► DuplicateCode        │
//! │                                                    DuplicateName        │
//! │                                                    Invalid*             │
//! │                                                                         │
//! │  Restock / take out ────► adjust_quantity() ─────► ItemNotFound         │
//! │                                                    InsufficientStock    │
//! │                                                                         │
//! │  Count correction ──────► set_quantity() ────────► ItemNotFound         │
//! │                                                    InvalidQuantity      │
//! │                                                                         │
//! │  Change price ──────────► update_price() ────────► ItemNotFound         │
//! │                                                    InvalidPrice         │
//! │                                                                         │
//! │  Remove slot ───────────► remove_item() ─────────► ItemNotFound         │
//! │                                                                         │
//! │  NOTE: every method validates first, then mutates. A failed call       │
//! │        leaves the inventory exactly as it was.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Item;
use crate::validation::{
    validate_item_code, validate_item_name, validate_price_cents, validate_stock_quantity,
};

/// All items in the machine, keyed by code.
///
/// ## Invariants
/// - Codes are unique (map key == `item.code`)
/// - Names are unique, compared case-insensitively
/// - Every quantity and price is non-negative
///
/// Items iterate in code order, which is the order the stock table shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
}

impl Inventory {
    /// Creates an empty inventory (first run).
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Rebuilds an inventory from stored records, re-checking every invariant.
    ///
    /// Used by the persistence layer so a hand-edited file cannot smuggle in a
    /// duplicate name or a negative quantity.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> CoreResult<Self> {
        let mut inventory = Inventory::new();
        for item in items {
            inventory.add_item(&item.code, &item.name, item.price(), item.quantity)?;
        }
        Ok(inventory)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&Item> {
        self.items.get(code)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.items.contains_key(code)
    }

    /// Finds an item by name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let wanted = name.to_lowercase();
        self.items
            .values()
            .find(|item| item.name.to_lowercase() == wanted)
    }

    /// Items in code order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Looks up an item or fails with `ItemNotFound`.
    pub fn require(&self, code: &str) -> CoreResult<&Item> {
        self.items
            .get(code)
            .ok_or_else(|| CoreError::ItemNotFound(code.to_string()))
    }

    fn require_mut(&mut self, code: &str) -> CoreResult<&mut Item> {
        self.items
            .get_mut(code)
            .ok_or_else(|| CoreError::ItemNotFound(code.to_string()))
    }

    // =========================================================================
    // Owner Operations
    // =========================================================================

    /// Loads a new item into the machine.
    ///
    /// ## Order of Checks
    /// 1. Code shape (`Validation`)
    /// 2. Code already used (`DuplicateCode`)
    /// 3. Name shape (`Validation`)
    /// 4. Name already used, case-insensitive (`DuplicateName`)
    /// 5. Price, then quantity (`Validation`)
    ///
    /// A duplicate code or name is reported as a conflict whatever the
    /// price and quantity are.
    ///
    /// ## Returns
    /// The inserted item, with exactly the fields that were passed in.
    pub fn add_item(
        &mut self,
        code: &str,
        name: &str,
        price: Money,
        quantity: i64,
    ) -> CoreResult<Item> {
        validate_item_code(code)?;
        if self.contains_code(code) {
            return Err(CoreError::DuplicateCode(code.to_string()));
        }

        validate_item_name(name)?;
        if let Some(existing) = self.find_by_name(name) {
            return Err(CoreError::DuplicateName(existing.name.clone()));
        }

        validate_price_cents(price.cents())?;
        validate_stock_quantity(quantity)?;

        let item = Item {
            code: code.to_string(),
            name: name.to_string(),
            price_cents: price.cents(),
            quantity,
        };
        self.items.insert(item.code.clone(), item.clone());
        Ok(item)
    }

    /// Adds `delta` units (negative to take units out).
    ///
    /// ## Returns
    /// The new quantity on hand.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::{CoreError, Inventory, Money};
    ///
    /// let mut inventory = Inventory::new();
    /// inventory.add_item("101", "Water", Money::from_cents(100), 10).unwrap();
    ///
    /// assert_eq!(inventory.adjust_quantity("101", 5).unwrap(), 15);
    /// assert!(matches!(
    ///     inventory.adjust_quantity("101", -20),
    ///     Err(CoreError::InsufficientStock { .. })
    /// ));
    /// assert_eq!(inventory.get("101").unwrap().quantity, 15);
    /// ```
    pub fn adjust_quantity(&mut self, code: &str, delta: i64) -> CoreResult<i64> {
        let item = self.require_mut(code)?;

        let new_quantity = item
            .quantity
            .checked_add(delta)
            .ok_or_else(|| ValidationError::quantity("adjustment is too large"))?;

        if new_quantity < 0 {
            return Err(CoreError::InsufficientStock {
                code: item.code.clone(),
                name: item.name.clone(),
                available: item.quantity,
                requested: delta.saturating_neg(),
            });
        }
        validate_stock_quantity(new_quantity)?;

        item.quantity = new_quantity;
        Ok(new_quantity)
    }

    /// Sets the quantity on hand to an absolute count.
    pub fn set_quantity(&mut self, code: &str, new_quantity: i64) -> CoreResult<i64> {
        let item = self.require_mut(code)?;
        validate_stock_quantity(new_quantity)?;
        item.quantity = new_quantity;
        Ok(new_quantity)
    }

    /// Changes the unit price of an item.
    pub fn update_price(&mut self, code: &str, new_price: Money) -> CoreResult<Item> {
        let item = self.require_mut(code)?;
        validate_price_cents(new_price.cents())?;
        item.price_cents = new_price.cents();
        Ok(item.clone())
    }

    /// Removes an item entirely.
    pub fn remove_item(&mut self, code: &str) -> CoreResult<Item> {
        self.items
            .remove(code)
            .ok_or_else(|| CoreError::ItemNotFound(code.to_string()))
    }

    /// Sum over all items of price × quantity. Zero for an empty machine.
    pub fn compute_total_stock_value(&self) -> Money {
        self.items.values().map(Item::stock_value).sum()
    }

    // =========================================================================
    // Checkout Support
    // =========================================================================

    /// Takes sold units out of stock. Callers check availability first.
    pub(crate) fn take_sold(&mut self, code: &str, quantity: i64) -> CoreResult<&Item> {
        let item = self.require_mut(code)?;
        if !item.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                code: item.code.clone(),
                name: item.name.clone(),
                available: item.quantity,
                requested: quantity,
            });
        }
        item.quantity -= quantity;
        Ok(item)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add_item("101", "Water", Money::from_cents(100), 10)
            .unwrap();
        inventory
            .add_item("102", "Red Bull", Money::from_cents(325), 4)
            .unwrap();
        inventory
    }

    #[test]
    fn test_add_then_lookup_returns_same_fields() {
        let mut inventory = Inventory::new();
        let added = inventory
            .add_item("A1", "Half & Half", Money::from_cents(249), 12)
            .unwrap();

        let item = inventory.get("A1").unwrap();
        assert_eq!(item, &added);
        assert_eq!(item.code, "A1");
        assert_eq!(item.name, "Half & Half");
        assert_eq!(item.price_cents, 249);
        assert_eq!(item.quantity, 12);
    }

    #[test]
    fn test_add_allows_zero_price_and_quantity() {
        let mut inventory = Inventory::new();
        assert!(inventory.add_item("1", "Sample", Money::zero(), 0).is_ok());
    }

    #[test]
    fn test_duplicate_code_fails_regardless_of_other_fields() {
        let mut inventory = stocked();
        let err = inventory
            .add_item("101", "Sparkling Water", Money::from_cents(150), 5)
            .unwrap_err();
        assert_eq!(err, CoreError::DuplicateCode("101".to_string()));
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_duplicate_name_is_case_insensitive() {
        let mut inventory = stocked();
        let err = inventory
            .add_item("103", "RED BULL", Money::from_cents(300), 1)
            .unwrap_err();
        assert_eq!(err, CoreError::DuplicateName("Red Bull".to_string()));
        assert!(!inventory.contains_code("103"));
    }

    #[test]
    fn test_duplicate_code_wins_over_bad_fields() {
        let mut inventory = stocked();

        let err = inventory
            .add_item("101", "R2-D2!", Money::from_cents(-5), 1)
            .unwrap_err();
        assert_eq!(err, CoreError::DuplicateCode("101".to_string()));
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = inventory
            .add_item("101", "Juice", Money::from_cents(-5), -1)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_duplicate_name_wins_over_bad_price_and_quantity() {
        let mut inventory = stocked();

        let err = inventory
            .add_item("102b", "Water", Money::from_cents(-1), 1)
            .unwrap_err();
        assert_eq!(err, CoreError::DuplicateName("Water".to_string()));
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = inventory
            .add_item("103", "water", Money::from_cents(100), -3)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut inventory = Inventory::new();

        let err = inventory
            .add_item("1", "R2-D2!", Money::from_cents(100), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidName { .. })
        ));

        let err = inventory
            .add_item("1", "Water", Money::from_cents(-1), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidPrice { .. })
        ));

        let err = inventory
            .add_item("1", "Water", Money::from_cents(100), -1)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidQuantity { .. })
        ));

        let err = inventory
            .add_item("", "Water", Money::from_cents(100), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidCode { .. })
        ));

        assert!(inventory.is_empty());
    }

    #[test]
    fn test_adjust_quantity() {
        let mut inventory = stocked();
        assert_eq!(inventory.adjust_quantity("101", 5).unwrap(), 15);
        assert_eq!(inventory.adjust_quantity("101", -15).unwrap(), 0);
        assert_eq!(
            inventory.adjust_quantity("999", 1),
            Err(CoreError::ItemNotFound("999".to_string()))
        );
    }

    #[test]
    fn test_adjust_quantity_overdraw_leaves_stock_unchanged() {
        let mut inventory = stocked();
        let err = inventory.adjust_quantity("101", -20).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                code: "101".to_string(),
                name: "Water".to_string(),
                available: 10,
                requested: 20,
            }
        );
        assert_eq!(err.kind(), ErrorKind::Stock);
        assert_eq!(inventory.get("101").unwrap().quantity, 10);
    }

    #[test]
    fn test_adjust_quantity_overflow_is_rejected() {
        let mut inventory = stocked();
        assert!(inventory.adjust_quantity("101", i64::MAX).is_err());
        assert_eq!(inventory.get("101").unwrap().quantity, 10);
    }

    #[test]
    fn test_upper_bounds_keep_stock_value_in_range() {
        let mut inventory = Inventory::new();
        let top_price = Money::from_cents(MAX_PRICE_CENTS);
        inventory
            .add_item("1", "Gold Bar", top_price, MAX_ITEM_QUANTITY)
            .unwrap();
        assert_eq!(
            inventory.compute_total_stock_value(),
            Money::from_cents(MAX_PRICE_CENTS * MAX_ITEM_QUANTITY)
        );

        let huge: Money = "100000000000".parse().unwrap();
        let err = inventory
            .add_item("2", "Platinum", huge, 1_000_000)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidPrice { .. })
        ));

        let too_many = MAX_ITEM_QUANTITY + 1;
        let err = inventory
            .add_item("2", "Platinum", Money::from_cents(100), too_many)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidQuantity { .. })
        ));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_mutations_respect_upper_bounds() {
        let mut inventory = stocked();

        let err = inventory
            .adjust_quantity("101", MAX_ITEM_QUANTITY)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidQuantity { .. })
        ));
        let to_cap = MAX_ITEM_QUANTITY - 10;
        let quantity = inventory.adjust_quantity("101", to_cap).unwrap();
        assert_eq!(quantity, MAX_ITEM_QUANTITY);

        let too_many = MAX_ITEM_QUANTITY + 1;
        assert!(inventory.set_quantity("102", too_many).is_err());
        assert_eq!(inventory.get("102").unwrap().quantity, 4);

        let too_dear = Money::from_cents(MAX_PRICE_CENTS + 1);
        assert!(inventory.update_price("102", too_dear).is_err());
        assert_eq!(inventory.get("102").unwrap().price_cents, 325);
    }

    #[test]
    fn test_from_items_rejects_out_of_range_records() {
        let oversized = Item {
            code: "1".to_string(),
            name: "Gold Bar".to_string(),
            price_cents: 10_000_000_000_000,
            quantity: 1_000_000,
        };
        assert!(Inventory::from_items([oversized]).is_err());
    }

    #[test]
    fn test_set_quantity() {
        let mut inventory = stocked();
        assert_eq!(inventory.set_quantity("101", 3).unwrap(), 3);
        assert!(inventory.set_quantity("101", -1).is_err());
        assert_eq!(inventory.get("101").unwrap().quantity, 3);
        assert!(inventory.set_quantity("nope", 1).is_err());
    }

    #[test]
    fn test_update_price() {
        let mut inventory = stocked();
        let item = inventory
            .update_price("101", Money::from_cents(250))
            .unwrap();
        assert_eq!(item.price_cents, 250);

        assert!(inventory
            .update_price("101", Money::from_cents(-350))
            .is_err());
        assert_eq!(inventory.get("101").unwrap().price_cents, 250);

        assert_eq!(
            inventory.update_price("2", Money::from_cents(150)),
            Err(CoreError::ItemNotFound("2".to_string()))
        );
    }

    #[test]
    fn test_remove_item() {
        let mut inventory = stocked();
        let removed = inventory.remove_item("101").unwrap();
        assert_eq!(removed.name, "Water");
        assert!(!inventory.contains_code("101"));
        assert_eq!(
            inventory.remove_item("101"),
            Err(CoreError::ItemNotFound("101".to_string()))
        );

        // The name is free again once the item is gone.
        assert!(inventory
            .add_item("105", "water", Money::from_cents(90), 1)
            .is_ok());
    }

    #[test]
    fn test_total_stock_value() {
        assert_eq!(Inventory::new().compute_total_stock_value(), Money::zero());
        // 10 × $1.00 + 4 × $3.25
        assert_eq!(
            stocked().compute_total_stock_value(),
            Money::from_cents(2300)
        );
    }

    #[test]
    fn test_items_iterate_in_code_order() {
        let mut inventory = Inventory::new();
        inventory.add_item("B", "Beta", Money::zero(), 1).unwrap();
        inventory.add_item("A", "Alpha", Money::zero(), 1).unwrap();
        let codes: Vec<&str> = inventory.items().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, ["A", "B"]);
    }

    #[test]
    fn test_from_items_rechecks_invariants() {
        let items = stocked().items().cloned().collect::<Vec<_>>();
        assert_eq!(Inventory::from_items(items).unwrap(), stocked());

        let twins = vec![
            Item {
                code: "1".into(),
                name: "Cola".into(),
                price_cents: 100,
                quantity: 1,
            },
            Item {
                code: "2".into(),
                name: "cola".into(),
                price_cents: 100,
                quantity: 1,
            },
        ];
        assert!(matches!(
            Inventory::from_items(twins),
            Err(CoreError::DuplicateName(_))
        ));
    }
}
