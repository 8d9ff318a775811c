//! # Cart Service Seam
//!
//! The external REST cart backend, expressed as an in-process trait so the
//! session layer (and its tests) never touch the network directly.
//!
//! ## Seam Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CartService Seam                                  │
//! │                                                                         │
//! │   CartState ──────► dyn CartService ───┬──► HTTP client (production)   │
//! │                                        │     GET  /basket              │
//! │                                        │     GET  /basket/total        │
//! │                                        │     PUT  /basket/{id}         │
//! │                                        │     DELETE /basket/{id}       │
//! │                                        │                               │
//! │                                        └──► InMemoryCartService (test) │
//! │                                                                         │
//! │   The trait mirrors the backend contract 1:1. Notably `total()` is a   │
//! │   pre-formatted STRING: the server computes and formats the money,     │
//! │   the client only displays it.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use keyshop_core::error::{CoreError, CoreResult};
use keyshop_core::types::CartLine;

// =============================================================================
// Cart Service Trait
// =============================================================================

/// The cart backend as seen by the session layer.
///
/// Implemented by the real HTTP client in the storefront binary; the
/// [`InMemoryCartService`] fake ships here for tests.
pub trait CartService: Send + Sync {
    /// Fetches the current cart lines.
    fn lines(&self) -> CoreResult<Vec<CartLine>>;

    /// Fetches the authoritative, pre-formatted cart total.
    ///
    /// This value is server-computed and MUST be displayed and submitted
    /// verbatim; client-side per-line math never overrides it.
    fn total(&self) -> CoreResult<String>;

    /// Sets the quantity of a line. The backend rejects `new_qty <= 0`;
    /// callers route zero to [`remove_line`](Self::remove_line) instead.
    fn update_quantity(&self, basket_id: &str, new_qty: i64) -> CoreResult<()>;

    /// Removes a line from the cart.
    fn remove_line(&self, basket_id: &str) -> CoreResult<()>;

    /// Empties the cart.
    fn clear(&self) -> CoreResult<()>;
}

// =============================================================================
// In-Memory Fake
// =============================================================================

/// In-memory cart backend for tests and local development.
///
/// Mimics the real backend's two quirks that matter to the client:
/// - the total is a pre-formatted string WITH thousands grouping
///   (`"₺1.325,00"`), unlike the plain client display format
/// - a zero-piece line never survives an update (the line is dropped)
pub struct InMemoryCartService {
    lines: Mutex<Vec<CartLine>>,
}

impl InMemoryCartService {
    /// Creates a fake backend pre-loaded with the given lines.
    pub fn new(lines: Vec<CartLine>) -> Self {
        InMemoryCartService {
            lines: Mutex::new(lines),
        }
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, Vec<CartLine>> {
        // A poisoned lock in the fake means a test already failed
        self.lines.lock().expect("cart fake mutex poisoned")
    }
}

/// Formats a lira amount the way the backend does: thousands grouped with
/// `.`, decimals after `,`.
fn format_server_total(value: f64) -> String {
    let kurus = (value * 100.0).round() as i64;
    let major = (kurus / 100).abs();
    let minor = (kurus % 100).abs();

    let digits = major.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("₺{grouped},{minor:02}")
}

impl CartService for InMemoryCartService {
    fn lines(&self) -> CoreResult<Vec<CartLine>> {
        Ok(self.locked().clone())
    }

    fn total(&self) -> CoreResult<String> {
        let total: f64 = self.locked().iter().map(|l| l.line_total()).sum();
        Ok(format_server_total(total))
    }

    fn update_quantity(&self, basket_id: &str, new_qty: i64) -> CoreResult<()> {
        if new_qty <= 0 {
            return Err(CoreError::Service(
                "quantity must be positive; use remove_line".to_string(),
            ));
        }

        let mut lines = self.locked();
        let line = lines
            .iter_mut()
            .find(|l| l.basket_id == basket_id)
            .ok_or_else(|| CoreError::LineNotFound(basket_id.to_string()))?;
        line.piece = new_qty;
        Ok(())
    }

    fn remove_line(&self, basket_id: &str) -> CoreResult<()> {
        let mut lines = self.locked();
        let before = lines.len();
        lines.retain(|l| l.basket_id != basket_id);

        if lines.len() == before {
            Err(CoreError::LineNotFound(basket_id.to_string()))
        } else {
            Ok(())
        }
    }

    fn clear(&self) -> CoreResult<()> {
        self.locked().clear();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use keyshop_core::types::PriceKind;

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
    fn test_fake_total_uses_server_formatting() {
        let svc = InMemoryCartService::new(vec![line("1", "₺1.300,00", 1), line("2", "₺25,00", 1)]);
        // 1325.00 grouped the backend way
        assert_eq!(svc.total().unwrap(), "₺1.325,00");
    }

    #[test]
    fn test_fake_update_and_remove() {
        let svc = InMemoryCartService::new(vec![line("1", "₺100,00", 1)]);

        svc.update_quantity("1", 3).unwrap();
        assert_eq!(svc.lines().unwrap()[0].piece, 3);

        assert!(matches!(
            svc.update_quantity("missing", 2),
            Err(CoreError::LineNotFound(_))
        ));

        svc.remove_line("1").unwrap();
        assert!(svc.lines().unwrap().is_empty());
        assert!(svc.remove_line("1").is_err());
    }

    #[test]
    fn test_fake_rejects_non_positive_quantity() {
        let svc = InMemoryCartService::new(vec![line("1", "₺100,00", 1)]);
        assert!(svc.update_quantity("1", 0).is_err());
        assert!(svc.update_quantity("1", -2).is_err());
    }

    #[test]
    fn test_server_total_grouping() {
        assert_eq!(format_server_total(0.0), "₺0,00");
        assert_eq!(format_server_total(999.5), "₺999,50");
        assert_eq!(format_server_total(1_000_000.99), "₺1.000.000,99");
    }
}
