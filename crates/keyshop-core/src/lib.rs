//! # keyshop-core: Pure Client Logic for the Keyshop Storefront
//!
//! This crate is the **heart** of the Keyshop storefront client. It contains
//! every piece of client-side logic that is worth specifying — price string
//! normalization, cart display math, and the hero carousel rotation state
//! machine — as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Keyshop Client Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront Frontend (web)                    │   │
//! │  │    Hero UI ──► Category UI ──► Cart UI ──► Checkout UI          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                keyshop-session (state layer)                    │   │
//! │  │    CartState, HeroDriver, CartService seam                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ keyshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │   cart    │  │   hero    │  │   │
//! │  │   │ CartLine  │  │  parse    │  │ totals    │  │ rotation  │  │   │
//! │  │   │ HeroSlide │  │  format   │  │ summary   │  │ progress  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartLine, HeroSlide, CartSummary, etc.)
//! - [`price`] - Localized price parsing, unit-price resolution, formatting
//! - [`cart`] - Cart-wide display aggregation
//! - [`hero`] - Hero carousel rotation state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access are FORBIDDEN here
//!    (the hero machine takes "now" as a parameter)
//! 3. **Display vs. Authority**: client-side price math is for DISPLAY ONLY;
//!    the checkout total always comes pre-formatted from the server
//! 4. **Never Block Rendering**: malformed upstream data degrades to a safe
//!    default instead of erroring mid-render
//!
//! ## Example Usage
//!
//! ```rust
//! use keyshop_core::price;
//!
//! // Parse a Turkish-locale price string
//! let value = price::parse_price("₺1.325,00");
//! assert_eq!(value, 1325.0);
//!
//! // Resolve the unit price for a 2-piece line
//! let unit = price::unit_price("₺1700,00", 2);
//! assert_eq!(unit, 850.0);
//!
//! // Format for display
//! assert_eq!(price::format_price(850.5), "₺850,50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod hero;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use keyshop_core::CartLine` instead of
// `use keyshop_core::types::CartLine`

pub use error::{CoreError, CoreResult, ValidationError};
pub use hero::HeroRotation;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol for all displayed prices.
///
/// ## Why a constant?
/// The storefront sells in a single currency (Turkish lira). The upstream
/// API sends prices as pre-formatted `₺`-prefixed strings and the UI renders
/// the same glyph back. Multi-currency would replace this with per-tenant
/// configuration.
pub const CURRENCY_SYMBOL: &str = "₺";

/// Hero carousel auto-advance period in milliseconds.
pub const AUTO_ADVANCE_MS: u64 = 8000;

/// Lower bound of the plausible unit-price range used by the
/// unit-vs-total heuristic (see [`price::unit_price`]).
pub const UNIT_PRICE_HEURISTIC_MIN: f64 = 50.0;

/// Upper bound of the plausible unit-price range used by the
/// unit-vs-total heuristic (see [`price::unit_price`]).
pub const UNIT_PRICE_HEURISTIC_MAX: f64 = 5000.0;

/// Maximum quantity of a single line in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering of digital keys (e.g., typing 1000
/// instead of 10). The backend enforces its own limit as well.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum accepted length for a basket line identifier.
///
/// Basket ids are opaque strings minted by the cart backend; anything
/// longer than this is a malformed request, not a real id.
pub const MAX_BASKET_ID_LEN: usize = 64;
