//! # Cart Aggregation
//!
//! Display math over the cart lines fetched from the cart backend.
//!
//! ## Cart Display Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart Page Render                                    │
//! │                                                                         │
//! │  Cart service ──► Vec<CartLine>                                        │
//! │                        │                                                │
//! │          per line      ▼                                                │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │ line.display_unit_price()  → "₺850,00"       │                      │
//! │  │ line.display_line_total()  → "₺1700,00"      │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! │          cart-wide     ▼                                                │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │ total_quantity(&lines)     → 5               │                      │
//! │  │ display_subtotal(&lines)   → "₺2.450,00"-ish │  (display only!)     │
//! │  │ server total from backend  → authoritative   │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Per-line and subtotal math is DISPLAY ONLY; checkout always submits
//!   the server-computed total, never a client-side sum.
//! - `piece >= 1` on every line (the backend removes zero-piece lines).

use crate::price;
use crate::types::{CartLine, CartSummary};

// =============================================================================
// Per-Line Accessors
// =============================================================================

impl CartLine {
    /// Resolved per-unit price of this line.
    ///
    /// Honors an explicit `price_kind` when the backend sent one; legacy
    /// lines fall back to the range heuristic in [`price::unit_price`].
    #[inline]
    pub fn unit_price(&self) -> f64 {
        price::unit_price_with_kind(&self.price, self.piece, self.price_kind)
    }

    /// Numeric line total (unit price × piece).
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.unit_price() * self.piece as f64
    }

    /// Unit price formatted for display, e.g. `"₺850,00"`.
    pub fn display_unit_price(&self) -> String {
        price::format_price(self.unit_price())
    }

    /// Line total formatted for display, e.g. `"₺1700,00"`.
    pub fn display_line_total(&self) -> String {
        price::format_price(self.line_total())
    }
}

// =============================================================================
// Cart-Wide Aggregation
// =============================================================================

/// Sum of `piece` across all lines.
///
/// ## Example
/// ```rust
/// use keyshop_core::cart::total_quantity;
/// use keyshop_core::types::{CartLine, PriceKind};
///
/// let lines = vec![
///     CartLine {
///         basket_id: "a".into(),
///         product_name: "Key A".into(),
///         price: "₺100,00".into(),
///         piece: 2,
///         price_kind: PriceKind::Unknown,
///     },
///     CartLine {
///         basket_id: "b".into(),
///         product_name: "Key B".into(),
///         price: "₺200,00".into(),
///         piece: 3,
///         price_kind: PriceKind::Unknown,
///     },
/// ];
/// assert_eq!(total_quantity(&lines), 5);
/// ```
pub fn total_quantity(lines: &[CartLine]) -> i64 {
    lines.iter().map(|l| l.piece).sum()
}

/// Client-side subtotal across all lines, formatted for display.
///
/// This exists so the cart page can paint a running total while the
/// authoritative server total is in flight. It must never be submitted
/// at checkout.
pub fn display_subtotal(lines: &[CartLine]) -> String {
    let subtotal: f64 = lines.iter().map(|l| l.line_total()).sum();
    price::format_price(subtotal)
}

impl CartSummary {
    /// Builds the display summary from the current lines and the
    /// authoritative server total string.
    pub fn compute(lines: &[CartLine], server_total: &str) -> Self {
        CartSummary {
            item_count: lines.len(),
            total_quantity: total_quantity(lines),
            display_subtotal: display_subtotal(lines),
            server_total: server_total.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriceKind;

    fn line(id: &str, price: &str, piece: i64) -> CartLine {
        CartLine {
            basket_id: id.to_string(),
            product_name: format!("Product {id}"),
            price: price.to_string(),
            piece,
            price_kind: PriceKind::Unknown,
        }
    }

    #[test]
    fn test_total_quantity() {
        let lines = vec![line("1", "₺100,00", 2), line("2", "₺200,00", 3)];
        assert_eq!(total_quantity(&lines), 5);
        assert_eq!(total_quantity(&[]), 0);
    }

    #[test]
    fn test_line_display_values() {
        // 1700 / 2 = 850 inside the window → the field held a total
        let l = line("1", "₺1700,00", 2);
        assert_eq!(l.display_unit_price(), "₺850,00");
        assert_eq!(l.display_line_total(), "₺1700,00");

        // 30 / 2 = 15 below the window → the field held the unit price
        let l = line("2", "₺30,00", 2);
        assert_eq!(l.display_unit_price(), "₺30,00");
        assert_eq!(l.display_line_total(), "₺60,00");
    }

    #[test]
    fn test_explicit_kind_flows_through_line_accessors() {
        let mut l = line("1", "₺30,00", 2);
        l.price_kind = PriceKind::Total;
        assert_eq!(l.display_unit_price(), "₺15,00");
        assert_eq!(l.display_line_total(), "₺30,00");
    }

    #[test]
    fn test_display_subtotal() {
        let lines = vec![line("1", "₺1700,00", 2), line("2", "₺30,00", 2)];
        // 1700 (total-detected) + 60
        assert_eq!(display_subtotal(&lines), "₺1760,00");
    }

    #[test]
    fn test_malformed_price_renders_zero_not_panic() {
        let lines = vec![line("1", "not-a-price", 3)];
        assert_eq!(lines[0].display_unit_price(), "₺0,00");
        assert_eq!(display_subtotal(&lines), "₺0,00");
    }

    #[test]
    fn test_summary_keeps_server_total_verbatim() {
        let lines = vec![line("1", "₺1700,00", 2)];
        let summary = CartSummary::compute(&lines, "₺1.699,99");

        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.total_quantity, 2);
        assert_eq!(summary.display_subtotal, "₺1700,00");
        // The server string is passed through untouched, even when the
        // client-side math disagrees
        assert_eq!(summary.server_total, "₺1.699,99");
    }
}
