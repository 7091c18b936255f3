//! # Checkout
//!
//! Bill computation and purchase confirmation.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Purchase Flow                                     │
//! │                                                                         │
//! │  Cart ──► compute_bill() ──► Bill (live prices, cart order)            │
//! │                                                                         │
//! │  Cart ──► confirm_purchase()                                           │
//! │             │                                                           │
//! │             ├── 1. Empty cart?            → EmptyCart                  │
//! │             ├── 2. Every entry in stock?  → InsufficientStock          │
//! │             │      (nothing touched yet)                               │
//! │             ├── 3. Decrement every item                                │
//! │             ├── 4. Drop items that hit 0 (PurchaseOptions)             │
//! │             ├── 5. Transaction ID + timestamp                          │
//! │             └── 6. Clear cart ──► Receipt                              │
//! │                                                                         │
//! │  Steps 3-6 cannot fail once step 2 passes: all-or-nothing.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::TRANSACTION_ID_LEN;

/// Display format for receipt timestamps.
pub const RECEIPT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Bill
// =============================================================================

/// One priced line of a bill or receipt.
///
/// Name and price are snapshots taken from the inventory at the time the
/// line was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLine {
    pub code: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    /// unit_price × quantity
    pub line_total_cents: i64,
}

impl BillLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

/// The priced view of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub total_cents: i64,
}

impl Bill {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The record of a confirmed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Short random identifier, 8 lowercase hex characters.
    pub transaction_id: String,
    pub timestamp: DateTime<Utc>,
    pub lines: Vec<BillLine>,
    pub total_cents: i64,
    /// Codes whose stock reached zero in this purchase.
    pub sold_out: Vec<String>,
}

impl Receipt {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Timestamp in local time, `YYYY-MM-DD HH:MM:SS`.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format(RECEIPT_TIME_FORMAT)
            .to_string()
    }
}

/// Knobs for [`confirm_purchase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseOptions {
    /// Delete items from the inventory when a purchase takes their stock to 0.
    pub remove_sold_out: bool,
}

impl Default for PurchaseOptions {
    fn default() -> Self {
        PurchaseOptions {
            remove_sold_out: true,
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Prices every cart entry against the live inventory.
///
/// Lines follow cart order. Fails with `EmptyCart` on an empty cart and
/// `ItemNotFound` if an entry's item has left the inventory.
pub fn compute_bill(cart: &Cart, inventory: &Inventory) -> CoreResult<Bill> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let lines = cart
        .entries()
        .iter()
        .map(|entry| {
            let item = inventory.require(&entry.code)?;
            let line_total = item.price().multiply_quantity(entry.quantity);
            Ok(BillLine {
                code: item.code.clone(),
                name: item.name.clone(),
                unit_price_cents: item.price_cents,
                quantity: entry.quantity,
                line_total_cents: line_total.cents(),
            })
        })
        .collect::<CoreResult<Vec<_>>>()?;

    let total: Money = lines.iter().map(BillLine::line_total).sum();

    Ok(Bill {
        lines,
        total_cents: total.cents(),
    })
}

/// Sells everything in the cart.
///
/// Every entry is checked against current stock before anything changes. On
/// error the cart and inventory are exactly as they were and no transaction
/// ID is generated.
///
/// ## Example
/// ```rust
/// use vend_core::{Cart, Inventory, Money, PurchaseOptions};
/// use vend_core::cart::add_to_cart;
/// use vend_core::checkout::confirm_purchase;
///
/// let mut inventory = Inventory::new();
/// inventory.add_item("7", "Gum", Money::from_cents(50), 2).unwrap();
///
/// let mut cart = Cart::new();
/// add_to_cart(&mut cart, "7", 2, &inventory).unwrap();
///
/// let receipt = confirm_purchase(&mut cart, &mut inventory, &PurchaseOptions::default()).unwrap();
/// assert_eq!(receipt.sold_out, vec!["7".to_string()]);
/// assert!(inventory.get("7").is_none());
/// assert!(cart.is_empty());
/// ```
pub fn confirm_purchase(
    cart: &mut Cart,
    inventory: &mut Inventory,
    options: &PurchaseOptions,
) -> CoreResult<Receipt> {
    let bill = compute_bill(cart, inventory)?;

    for line in &bill.lines {
        let item = inventory.require(&line.code)?;
        if !item.can_sell(line.quantity) {
            return Err(CoreError::InsufficientStock {
                code: item.code.clone(),
                name: item.name.clone(),
                available: item.quantity,
                requested: line.quantity,
            });
        }
    }

    let mut sold_out = Vec::new();
    for line in &bill.lines {
        if inventory.take_sold(&line.code, line.quantity)?.is_sold_out() {
            sold_out.push(line.code.clone());
        }
    }

    if options.remove_sold_out {
        for code in &sold_out {
            inventory.remove_item(code)?;
        }
    }

    cart.clear();

    Ok(Receipt {
        transaction_id: generate_transaction_id(),
        timestamp: Utc::now(),
        lines: bill.lines,
        total_cents: bill.total_cents,
        sold_out,
    })
}

/// First 8 hex characters of a random UUID.
pub fn generate_transaction_id() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(TRANSACTION_ID_LEN)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::add_to_cart;

    fn inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add_item("101", "Water", Money::from_cents(100), 10)
            .unwrap();
        inventory
            .add_item("102", "Chips", Money::from_cents(175), 3)
            .unwrap();
        inventory
    }

    fn purchase(cart: &mut Cart, inventory: &mut Inventory) -> CoreResult<Receipt> {
        confirm_purchase(cart, inventory, &PurchaseOptions::default())
    }

    #[test]
    fn test_water_scenario() {
        let mut inventory = Inventory::new();
        inventory
            .add_item("101", "Water", Money::from_cents(100), 10)
            .unwrap();
        assert_eq!(
            inventory.add_item("102", "Water", Money::from_cents(200), 5),
            Err(CoreError::DuplicateName("Water".to_string()))
        );

        let mut cart = Cart::new();
        add_to_cart(&mut cart, "101", 3, &inventory).unwrap();
        assert_eq!(
            compute_bill(&cart, &inventory).unwrap().total(),
            Money::from_cents(300)
        );

        let receipt = purchase(&mut cart, &mut inventory).unwrap();
        assert_eq!(inventory.get("101").unwrap().quantity, 7);
        assert_eq!(receipt.total(), Money::from_cents(300));
        assert!(receipt.sold_out.is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_compute_bill_lines_follow_cart_order() {
        let inventory = inventory();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "102", 2, &inventory).unwrap();
        add_to_cart(&mut cart, "101", 1, &inventory).unwrap();

        let bill = compute_bill(&cart, &inventory).unwrap();
        let codes: Vec<&str> = bill.lines.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["102", "101"]);
        assert_eq!(bill.lines[0].line_total(), Money::from_cents(350));
        assert_eq!(bill.lines[0].name, "Chips");
        assert_eq!(bill.total(), Money::from_cents(450));
    }

    #[test]
    fn test_compute_bill_uses_live_price() {
        let mut inventory = inventory();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "101", 2, &inventory).unwrap();

        inventory
            .update_price("101", Money::from_cents(125))
            .unwrap();
        assert_eq!(
            compute_bill(&cart, &inventory).unwrap().total(),
            Money::from_cents(250)
        );
    }

    #[test]
    fn test_empty_cart() {
        let mut inventory = inventory();
        let mut cart = Cart::new();
        assert_eq!(compute_bill(&cart, &inventory), Err(CoreError::EmptyCart));
        assert_eq!(
            purchase(&mut cart, &mut inventory),
            Err(CoreError::EmptyCart)
        );
    }

    #[test]
    fn test_confirm_is_all_or_nothing() {
        let mut inventory = inventory();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "101", 4, &inventory).unwrap();
        add_to_cart(&mut cart, "102", 3, &inventory).unwrap();

        // Stock drops after the item went into the cart
        inventory.set_quantity("102", 1).unwrap();

        let inventory_before = inventory.clone();
        let cart_before = cart.clone();

        let err = purchase(&mut cart, &mut inventory).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                code: "102".to_string(),
                name: "Chips".to_string(),
                available: 1,
                requested: 3,
            }
        );
        assert_eq!(inventory, inventory_before);
        assert_eq!(cart, cart_before);
    }

    #[test]
    fn test_confirm_fails_when_item_was_removed() {
        let mut inventory = inventory();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "101", 1, &inventory).unwrap();
        add_to_cart(&mut cart, "102", 1, &inventory).unwrap();
        inventory.remove_item("102").unwrap();

        let before = inventory.clone();
        assert_eq!(
            purchase(&mut cart, &mut inventory),
            Err(CoreError::ItemNotFound("102".to_string()))
        );
        assert_eq!(inventory, before);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_sold_out_items_are_removed_by_default() {
        let mut inventory = inventory();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "102", 3, &inventory).unwrap();

        let receipt = purchase(&mut cart, &mut inventory).unwrap();
        assert_eq!(receipt.sold_out, vec!["102".to_string()]);
        assert!(!inventory.contains_code("102"));
        assert!(inventory.contains_code("101"));
    }

    #[test]
    fn test_sold_out_items_can_be_kept() {
        let mut inventory = inventory();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "102", 3, &inventory).unwrap();

        let options = PurchaseOptions {
            remove_sold_out: false,
        };
        let receipt = confirm_purchase(&mut cart, &mut inventory, &options).unwrap();
        assert_eq!(receipt.sold_out, vec!["102".to_string()]);
        assert!(inventory.get("102").unwrap().is_sold_out());
    }

    #[test]
    fn test_transaction_ids() {
        let id = generate_transaction_id();
        assert_eq!(id.len(), TRANSACTION_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

        let mut inventory = inventory();
        let mut first_cart = Cart::new();
        add_to_cart(&mut first_cart, "101", 1, &inventory).unwrap();
        let first = purchase(&mut first_cart, &mut inventory).unwrap();

        let mut second_cart = Cart::new();
        add_to_cart(&mut second_cart, "101", 1, &inventory).unwrap();
        let second = purchase(&mut second_cart, &mut inventory).unwrap();

        assert_ne!(first.transaction_id, second.transaction_id);
    }

    #[test]
    fn test_formatted_timestamp_shape() {
        let mut inventory = inventory();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "101", 1, &inventory).unwrap();
        let receipt = purchase(&mut cart, &mut inventory).unwrap();

        let stamp = receipt.formatted_timestamp();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
    }
}
