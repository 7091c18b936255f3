//! # Validation Module
//!
//! Input validation rules for the vending machine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompts                                             │
//! │  ├── Text → number parsing (parse_quantity, Money::from_str)           │
//! │  └── Re-prompt on failure                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called by Inventory / Cart operations)          │
//! │  ├── Code, name, price and quantity rules                              │
//! │  └── Runs before any state is touched                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory invariants                                         │
//! │  └── Unique code, unique name (inventory.rs)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::validation::{validate_item_name, parse_quantity};
//!
//! assert!(validate_item_name("Red Bull").is_ok());
//! assert!(validate_item_name("R2-D2!").is_err());
//! assert_eq!(parse_quantity("12").unwrap(), 12);
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_CODE_LEN, MAX_ITEM_NAME_LEN, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item code.
///
/// ## Rules
/// - Must not be empty or surrounded by whitespace
/// - At most 32 characters
/// - Only ASCII letters, digits, hyphens, underscores
///
/// ## Example
/// ```rust
/// use vend_core::validation::validate_item_code;
///
/// assert!(validate_item_code("101").is_ok());
/// assert!(validate_item_code("COKE-330").is_ok());
/// assert!(validate_item_code("").is_err());
/// assert!(validate_item_code("a b").is_err());
/// ```
pub fn validate_item_code(code: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidCode {
        code: code.to_string(),
        reason: reason.to_string(),
    };

    if code.is_empty() {
        return Err(invalid("code is required"));
    }

    if code.len() > MAX_ITEM_CODE_LEN {
        return Err(invalid("code is too long"));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid(
            "must contain only letters, numbers, hyphens, and underscores",
        ));
    }

    Ok(())
}

/// Characters allowed in an item name besides ASCII letters and digits.
const NAME_PUNCTUATION: [char; 4] = [' ', '-', '\'', '&'];

/// Validates an item name.
///
/// ## Rules
/// - Must contain at least one ASCII letter
/// - Only ASCII letters, digits, spaces, hyphens (-), apostrophes (') and
///   ampersands (&)
/// - At most 64 characters
///
/// ## Example
/// ```rust
/// use vend_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Red Bull").is_ok());
/// assert!(validate_item_name("M&M's").is_ok());
/// assert!(validate_item_name("R2-D2!").is_err()); // '!' not allowed
/// assert!(validate_item_name("7-11").is_err());   // no letter
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let invalid = |reason: String| ValidationError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(invalid(format!(
            "must be at most {} characters",
            MAX_ITEM_NAME_LEN
        )));
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || NAME_PUNCTUATION.contains(c)))
    {
        return Err(invalid(format!(
            "'{}' is not allowed; use letters, numbers, spaces, hyphens (-), apostrophes (') and ampersands (&)",
            bad
        )));
    }

    if !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("must contain at least one letter".to_string()));
    }

    Ok(())
}

/// Capitalizes the first letter of every word, lowercasing the rest.
///
/// A "word" starts after any non-letter, so `"r2-d2"` becomes `"R2-D2"` and
/// `"o'neil's"` becomes `"O'Neil'S"`. The terminal applies this to names the
/// owner types before they reach [`validate_item_name`].
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for c in name.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    out
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (free sample slot)
/// - At most [`MAX_PRICE_CENTS`]
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::price("price must not be negative"));
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::price(format!(
            "price cannot exceed {}",
            crate::Money::from_cents(MAX_PRICE_CENTS)
        )));
    }

    Ok(())
}

/// Validates a stock level (units on hand).
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - At most [`MAX_ITEM_QUANTITY`]
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::quantity("quantity must not be negative"));
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(too_many());
    }

    Ok(())
}

/// Validates a quantity requested for the cart.
///
/// ## Rules
/// - Must be positive (> 0)
/// - At most [`MAX_ITEM_QUANTITY`]
///
/// ## User Workflow
/// ```text
/// User enters quantity: 0
///      │
///      ▼
/// validate_cart_quantity(0) ← THIS FUNCTION
///      │
///      ├── qty <= 0? → Error: "quantity must be positive"
///      │
///      └── qty > 9999? → Error: "quantity cannot exceed 9999"
/// ```
pub fn validate_cart_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::quantity("quantity must be positive"));
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(too_many());
    }

    Ok(())
}

fn too_many() -> ValidationError {
    ValidationError::quantity(format!("quantity cannot exceed {}", MAX_ITEM_QUANTITY))
}

/// Parses a positive whole number typed at a prompt.
///
/// ## Example
/// ```rust
/// use vend_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("42").unwrap(), 42);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("-5").is_err());
/// assert!(parse_quantity("3.14").is_err());
/// assert!(parse_quantity("abc").is_err());
/// ```
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let qty = parse_whole_number(text)?;
    validate_cart_quantity(qty)?;
    Ok(qty)
}

/// Parses a signed whole number (stock adjustments such as `-3` or `+12`).
pub fn parse_whole_number(text: &str) -> ValidationResult<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| ValidationError::quantity(format!("'{}' is not a whole number", text)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_code() {
        assert!(validate_item_code("101").is_ok());
        assert!(validate_item_code("COKE-330").is_ok());
        assert!(validate_item_code("slot_7").is_ok());

        assert!(validate_item_code("").is_err());
        assert!(validate_item_code(" 101").is_err());
        assert!(validate_item_code("has space").is_err());
        assert!(validate_item_code(&"A".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Red Bull").is_ok());
        assert!(validate_item_name("Water").is_ok());
        assert!(validate_item_name("Half & Half").is_ok());
        assert!(validate_item_name("Reese's Pieces").is_ok());
        assert!(validate_item_name("7-Up").is_ok());

        assert!(validate_item_name("R2-D2!").is_err());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name("123").is_err());
        assert!(validate_item_name("Café").is_err());
        let long_name = "A".repeat(MAX_ITEM_NAME_LEN + 1);
        assert!(validate_item_name(&long_name).is_err());
    }

    #[test]
    fn test_invalid_name_names_the_character() {
        let err = validate_item_name("R2-D2!").unwrap_err();
        match err {
            ValidationError::InvalidName { name, reason } => {
                assert_eq!(name, "R2-D2!");
                assert!(reason.starts_with("'!'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("red bull"), "Red Bull");
        assert_eq!(title_case("COCA-COLA"), "Coca-Cola");
        assert_eq!(title_case("r2-d2"), "R2-D2");
        assert_eq!(title_case("half & half"), "Half & Half");
    }

    #[test]
    fn test_numeric_validators() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-1).is_err());

        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(-1).is_err());

        assert!(validate_cart_quantity(1).is_ok());
        assert!(validate_cart_quantity(0).is_err());
        assert!(validate_cart_quantity(-1).is_err());
    }

    #[test]
    fn test_numeric_upper_bounds() {
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS + 1).is_err());

        assert!(validate_stock_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert!(validate_stock_quantity(MAX_ITEM_QUANTITY + 1).is_err());

        assert!(validate_cart_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert_eq!(
            validate_cart_quantity(MAX_ITEM_QUANTITY + 1),
            Err(ValidationError::InvalidQuantity {
                reason: "quantity cannot exceed 9999".into()
            })
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);
        assert_eq!(parse_quantity("9999").unwrap(), 9999);
        assert!(parse_quantity("10000").is_err());

        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-5").is_err());
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("3.14").is_err());
    }

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("-3").unwrap(), -3);
        assert_eq!(parse_whole_number("+12").unwrap(), 12);
        assert!(parse_whole_number("ten").is_err());
    }
}
