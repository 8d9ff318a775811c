//! # Price Module
//!
//! Normalizes the localized price strings sent by the cart backend.
//!
//! ## The Upstream Price Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHAT THE BACKEND SENDS                                                 │
//! │                                                                         │
//! │  price: "₺1.325,00"   Turkish locale text:                             │
//! │                         '.' is the THOUSANDS separator                 │
//! │                         ',' is the DECIMAL separator                   │
//! │                                                                         │
//! │  ...and, for multi-piece lines, the value is SOMETIMES the unit        │
//! │  price and SOMETIMES the pre-multiplied line total, with no flag.      │
//! │                                                                         │
//! │  OUR JOB: parse the text, resolve unit vs. total, and format the       │
//! │  result back into "₺x.xx" display strings — without ever blocking     │
//! │  a render on malformed input.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Only
//! Everything in this module exists to paint the cart page. The checkout
//! total is computed by the server and shipped pre-formatted; nothing here
//! may ever be used to decide what to charge.
//!
//! ## Usage
//! ```rust
//! use keyshop_core::price;
//!
//! assert_eq!(price::parse_price("₺1.325,00"), 1325.0);
//! assert_eq!(price::unit_price("₺1700,00", 2), 850.0);
//! assert_eq!(price::format_line_total("₺30,00", 2), "₺60,00");
//! ```

use tracing::warn;

use crate::types::PriceKind;
use crate::{CURRENCY_SYMBOL, UNIT_PRICE_HEURISTIC_MAX, UNIT_PRICE_HEURISTIC_MIN};

// =============================================================================
// Parsing
// =============================================================================

/// Parses a Turkish-locale price string into a float.
///
/// ## Algorithm
/// 1. Strip the currency glyph and all whitespace
/// 2. Remove every `.` (thousands grouping)
/// 3. Replace `,` with `.` (decimal separator)
/// 4. Parse as `f64`
///
/// ## Failure Policy
/// Malformed input (empty string, stray text) returns `0.0` — parsing NEVER
/// errors and never blocks rendering. A malformed non-empty string is logged
/// via `tracing::warn!` so bad upstream data stays observable. Checkout is
/// unaffected: the server total is authoritative.
///
/// ## Example
/// ```rust
/// use keyshop_core::price::parse_price;
///
/// assert_eq!(parse_price("₺1.325,00"), 1325.0);
/// assert_eq!(parse_price("₺850,50"), 850.5);
/// assert_eq!(parse_price(""), 0.0);
/// assert_eq!(parse_price("abc"), 0.0);
/// ```
pub fn parse_price(raw: &str) -> f64 {
    let cleaned = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace(CURRENCY_SYMBOL, "")
        .replace('.', "")
        .replace(',', ".");

    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(raw, "unparseable price string, degrading to 0");
            0.0
        }
    }
}

// =============================================================================
// Unit-Price Resolution
// =============================================================================

/// Resolves the per-unit price of a line whose `price` field may be either
/// a unit price or a pre-multiplied total.
///
/// ## The Heuristic
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  quantity == 1 ──► no ambiguity, parsed value IS the unit price        │
/// │                                                                         │
/// │  quantity > 1  ──► candidate = parsed / quantity                       │
/// │                    candidate in [50, 5000]? ──► price was a TOTAL,     │
/// │                                                 return candidate        │
/// │                    otherwise              ──► price was already UNIT,  │
/// │                                               return parsed             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The `[50, 5000]` window is the observed range of real unit prices in the
/// catalog, not a guarantee from the API. It misfires for genuinely cheap
/// or expensive keys; lines that carry an explicit [`PriceKind`] should be
/// resolved with [`unit_price_with_kind`] instead, which skips the guess.
///
/// ## Example
/// ```rust
/// use keyshop_core::price::unit_price;
///
/// // ₺1700 for 2 pieces: 850 is a plausible unit price → it was a total
/// assert_eq!(unit_price("₺1700,00", 2), 850.0);
///
/// // ₺30 for 2 pieces: 15 is below the window → ₺30 is already the unit
/// assert_eq!(unit_price("₺30,00", 2), 30.0);
/// ```
pub fn unit_price(raw: &str, quantity: i64) -> f64 {
    let parsed = parse_price(raw);

    if quantity > 1 {
        let candidate = parsed / quantity as f64;
        if (UNIT_PRICE_HEURISTIC_MIN..=UNIT_PRICE_HEURISTIC_MAX).contains(&candidate) {
            return candidate;
        }
    }

    parsed
}

/// Resolves the per-unit price honoring an explicit [`PriceKind`].
///
/// `Unit` and `Total` bypass the numeric-range heuristic entirely;
/// `Unknown` (legacy payloads) falls back to [`unit_price`].
pub fn unit_price_with_kind(raw: &str, quantity: i64, kind: PriceKind) -> f64 {
    match kind {
        PriceKind::Unit => parse_price(raw),
        PriceKind::Total => {
            let parsed = parse_price(raw);
            if quantity > 1 {
                parsed / quantity as f64
            } else {
                parsed
            }
        }
        PriceKind::Unknown => unit_price(raw, quantity),
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a numeric price as Turkish display text: `"₺"` + two decimals
/// with `,` as the decimal separator.
///
/// ## Implementation
/// The value is converted to integer kurus (`round(value * 100)`) before
/// splitting into major/minor parts, so float dust can never leak into the
/// display (`849.9999…` prints `"₺850,00"`, not `"₺849,100"`).
///
/// ## Example
/// ```rust
/// use keyshop_core::price::format_price;
///
/// assert_eq!(format_price(850.5), "₺850,50");
/// assert_eq!(format_price(0.0), "₺0,00");
/// assert_eq!(format_price(1325.0), "₺1325,00");
/// ```
pub fn format_price(value: f64) -> String {
    let kurus = (value * 100.0).round() as i64;
    let sign = if kurus < 0 { "-" } else { "" };
    format!(
        "{}{}{},{:02}",
        sign,
        CURRENCY_SYMBOL,
        (kurus / 100).abs(),
        (kurus % 100).abs()
    )
}

/// Formats the resolved unit price of a line for display.
///
/// ## Example
/// ```rust
/// use keyshop_core::price::format_unit_price;
///
/// assert_eq!(format_unit_price("₺850,00", 1), "₺850,00");
/// assert_eq!(format_unit_price("₺1700,00", 2), "₺850,00");
/// ```
pub fn format_unit_price(raw: &str, quantity: i64) -> String {
    format_price(unit_price(raw, quantity))
}

/// Formats the line total (resolved unit price × quantity) for display.
///
/// ## Example
/// ```rust
/// use keyshop_core::price::format_line_total;
///
/// // ₺1700 for 2 pieces is total-detected, so the line total round-trips
/// assert_eq!(format_line_total("₺1700,00", 2), "₺1700,00");
/// // ₺30 is below the unit-price window, so it multiplies as a unit price
/// assert_eq!(format_line_total("₺30,00", 2), "₺60,00");
/// ```
pub fn format_line_total(raw: &str, quantity: i64) -> String {
    format_price(unit_price(raw, quantity) * quantity as f64)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_turkish_locale() {
        assert_eq!(parse_price("₺1.325,00"), 1325.0);
        assert_eq!(parse_price("₺850,50"), 850.5);
        assert_eq!(parse_price("1.000.000,99"), 1_000_000.99);
        // Whitespace anywhere is ignored
        assert_eq!(parse_price(" ₺ 1.325,00 "), 1325.0);
    }

    #[test]
    fn test_parse_malformed_degrades_to_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price("₺"), 0.0);
        assert_eq!(parse_price("₺12,34,56"), 0.0);
    }

    #[test]
    fn test_unit_price_total_detected() {
        // 1700 / 2 = 850, inside [50, 5000] → price was a total
        assert_eq!(unit_price("₺1700,00", 2), 850.0);
    }

    #[test]
    fn test_unit_price_below_window_kept_as_unit() {
        // 30 / 2 = 15, below 50 → price is already the unit price
        assert_eq!(unit_price("₺30,00", 2), 30.0);
    }

    #[test]
    fn test_unit_price_above_window_kept_as_unit() {
        // 15000 / 2 = 7500, above 5000 → treated as already-unit
        assert_eq!(unit_price("₺15.000,00", 2), 15000.0);
    }

    #[test]
    fn test_unit_price_window_boundaries_inclusive() {
        // Exactly 50 and exactly 5000 both count as plausible unit prices
        assert_eq!(unit_price("₺100,00", 2), 50.0);
        assert_eq!(unit_price("₺10.000,00", 2), 5000.0);
    }

    #[test]
    fn test_quantity_one_is_never_ambiguous() {
        for raw in ["₺1.325,00", "₺30,00", "₺5.000,00", "", "abc"] {
            assert_eq!(unit_price(raw, 1), parse_price(raw));
        }
    }

    #[test]
    fn test_explicit_kind_bypasses_heuristic() {
        // ₺30 total for 2 pieces: the heuristic would call this a unit
        // price, the explicit flag says otherwise
        assert_eq!(unit_price_with_kind("₺30,00", 2, PriceKind::Total), 15.0);

        // ₺1700 unit price for 2 pieces: the heuristic would halve it
        assert_eq!(
            unit_price_with_kind("₺1700,00", 2, PriceKind::Unit),
            1700.0
        );

        // Unknown falls back to the legacy guess
        assert_eq!(
            unit_price_with_kind("₺1700,00", 2, PriceKind::Unknown),
            850.0
        );
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(850.5), "₺850,50");
        assert_eq!(format_price(1325.0), "₺1325,00");
        assert_eq!(format_price(0.0), "₺0,00");
        assert_eq!(format_price(0.005), "₺0,01");
    }

    #[test]
    fn test_format_unit_price() {
        assert_eq!(format_unit_price("₺850,00", 1), "₺850,00");
        assert_eq!(format_unit_price("₺1700,00", 2), "₺850,00");
    }

    #[test]
    fn test_format_line_total() {
        // Total-detected: the line total round-trips the raw value
        assert_eq!(format_line_total("₺1700,00", 2), "₺1700,00");
        // Unit below the window: 30 × 2
        assert_eq!(format_line_total("₺30,00", 2), "₺60,00");
    }

    /// Documents the heuristic's known misfire: a GENUINE ₺850 unit price
    /// on a 2-piece line divides into the plausible window (425), so the
    /// raw value is mistaken for a total and the displayed line total
    /// collapses to ₺850 instead of ₺1700. An explicit `PriceKind::Unit`
    /// is the escape hatch.
    #[test]
    fn test_heuristic_misfire_inside_window_is_deliberate() {
        assert_eq!(unit_price("₺850,00", 2), 425.0);
        assert_eq!(format_line_total("₺850,00", 2), "₺850,00");

        // The explicit flag restores the true reading
        assert_eq!(unit_price_with_kind("₺850,00", 2, PriceKind::Unit), 850.0);
        assert_eq!(
            format_price(unit_price_with_kind("₺850,00", 2, PriceKind::Unit) * 2.0),
            "₺1700,00"
        );
    }

    /// Round trip: parsing the formatted line total recovers the numeric
    /// value within float tolerance.
    #[test]
    fn test_format_parse_round_trip() {
        for (raw, qty) in [("₺850,50", 1), ("₺1700,00", 2), ("₺30,00", 3)] {
            let total = unit_price(raw, qty) * qty as f64;
            let reparsed = parse_price(&format_line_total(raw, qty));
            assert!((total - reparsed).abs() < 0.005, "{raw} x{qty}");
        }
    }
}
