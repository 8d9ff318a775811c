//! # Validation Module
//!
//! Input validation for cart operations, applied before a request ever
//! reaches the cart backend.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form controls                                       │
//! │  ├── Quantity steppers clamp at the UI level                           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (session layer calls it)                         │
//! │  ├── Quantity bounds                                                   │
//! │  └── Basket id sanity                                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart backend                                                 │
//! │  └── Stock and ownership checks (authoritative)                        │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_BASKET_ID_LEN, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0) — a zero quantity means "remove the line" and
///   must be routed to removal, never sent as an update
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## Example
/// ```rust
/// use keyshop_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(1000).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "piece".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "piece".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a basket line identifier.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most MAX_BASKET_ID_LEN characters
/// - Must not contain control characters
///
/// Basket ids are opaque to the client, so this only rejects values that
/// can't possibly be real ids.
pub fn validate_basket_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "basketId".to_string(),
        });
    }

    if id.len() > MAX_BASKET_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "basketId".to_string(),
            max: MAX_BASKET_ID_LEN,
        });
    }

    if id.chars().any(|c| c.is_control()) {
        return Err(ValidationError::InvalidFormat {
            field: "basketId".to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_basket_id() {
        assert!(validate_basket_id("bk-42").is_ok());
        assert!(validate_basket_id("  bk-42  ").is_ok());

        assert!(validate_basket_id("").is_err());
        assert!(validate_basket_id("   ").is_err());
        assert!(validate_basket_id(&"x".repeat(100)).is_err());
        assert!(validate_basket_id("bk\n42").is_err());
    }
}
