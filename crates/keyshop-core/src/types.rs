//! # Domain Types
//!
//! Core domain types used throughout the Keyshop storefront client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartLine     │   │   HeroSlide     │   │  CartSummary    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  basket_id      │   │  slogan         │   │  item_count     │       │
//! │  │  product_name   │   │  short1..3      │   │  total_quantity │       │
//! │  │  price (string) │   │  url            │   │  display_subtot │       │
//! │  │  piece (qty)    │   └─────────────────┘   │  server_total   │       │
//! │  │  price_kind     │                         └─────────────────┘       │
//! │  └─────────────────┘   ┌─────────────────┐                             │
//! │                        │   PriceKind     │                             │
//! │                        │  ─────────────  │                             │
//! │                        │  Unit           │                             │
//! │                        │  Total          │                             │
//! │                        │  Unknown        │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Prices Are Strings Here
//! The cart backend sends prices as pre-formatted Turkish-locale text
//! (`"₺1.325,00"`). This crate never owns a canonical numeric price; it
//! normalizes the text for display (see [`crate::price`]) and treats the
//! server-computed total as the single source of truth for money.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Price Kind
// =============================================================================

/// Declares how a cart line's `price` field should be read.
///
/// ## Why This Exists
/// Historically the backend sent `price` sometimes as a per-unit value and
/// sometimes as a pre-multiplied line total, with no flag to tell them
/// apart. The client guessed with a numeric-range heuristic (see
/// [`crate::price::unit_price`]). Newer backend payloads set this field
/// explicitly; `Unknown` keeps the legacy guess for old payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum PriceKind {
    /// `price` is the per-unit price.
    Unit,
    /// `price` is the pre-multiplied line total (unit × piece).
    Total,
    /// Legacy payload: disambiguate with the range heuristic.
    #[default]
    Unknown,
}

// =============================================================================
// Cart Line
// =============================================================================

/// A single line in the shopping cart, as sent by the cart backend.
///
/// ## Ownership
/// Lines are owned by the external cart service and are READ-ONLY to this
/// crate. Updates and removals go through the service by `basket_id`; the
/// client never edits a line in place.
///
/// ## Invariants
/// - `piece >= 1` always. A zero-piece line must not exist — the backend
///   removes the line instead.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Opaque line identifier minted by the cart backend.
    /// Used for update/remove operations.
    pub basket_id: String,

    /// Display name of the product (game key / e-pin) on this line.
    pub product_name: String,

    /// Localized price text, e.g. `"₺1.325,00"`.
    ///
    /// Ambiguous as to unit vs. total unless `price_kind` says otherwise.
    pub price: String,

    /// Quantity. Always >= 1.
    pub piece: i64,

    /// How to read `price`. Missing in legacy payloads.
    #[serde(default)]
    pub price_kind: PriceKind,
}

// =============================================================================
// Hero Slide
// =============================================================================

/// One slide of the homepage hero carousel.
///
/// The slide list is supplied by the homepage API and treated as immutable
/// for the duration of a mount; the rotation machine only ever holds an
/// index into it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeroSlide {
    /// Main slogan line.
    pub slogan: String,

    /// Supporting text lines.
    pub short1: String,
    pub short2: String,
    pub short3: String,

    /// Background image reference.
    pub url: String,
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Display aggregate over the whole cart.
///
/// ## Display vs. Authority
/// `display_subtotal` is computed client-side from per-line math and exists
/// ONLY to render the cart page. `server_total` is the authoritative,
/// pre-formatted total from the cart service — it is what checkout uses and
/// the client must never override it with its own arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    /// Number of distinct lines.
    pub item_count: usize,

    /// Sum of `piece` across all lines.
    pub total_quantity: i64,

    /// Client-computed subtotal string, display only.
    pub display_subtotal: String,

    /// Authoritative pre-formatted total from the cart service.
    pub server_total: String,
}
