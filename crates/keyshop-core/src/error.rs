//! # Error Types
//!
//! Domain-specific error types for keyshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  keyshop-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  │   └── Service      - cart backend failures, surfaced by the         │
//! │  │                      session layer's CartService seam               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → session → Frontend toast          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (basket id, quantity, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! ## Deliberate Non-Error
//! Price PARSING is not represented here. A malformed price string degrades
//! to `0.0` by contract (rendering must never be blocked by bad upstream
//! text); see [`crate::price::parse_price`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core client logic errors.
///
/// These errors represent rule violations in cart operations. They should be
/// caught by the session layer and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart line cannot be found.
    ///
    /// ## When This Occurs
    /// - Basket id doesn't exist in the current cart
    /// - Line was already removed by another tab/session
    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// The cart backend rejected or failed an operation.
    ///
    /// ## When This Occurs
    /// - Network failure between storefront and cart service
    /// - Backend-side validation rejection (expired key stock, etc.)
    #[error("Cart service error: {0}")]
    Service(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before a request reaches the cart backend.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., control characters in an id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
