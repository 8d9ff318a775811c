//! # Cart Session State
//!
//! Manages the client-side view of the shopping cart.
//!
//! ## Thread Safety
//! The view is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple UI handlers may read/refresh the cart
//! 2. Only one mutation should be in flight at a time
//! 3. Frontend event handlers can run concurrently
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                              │
//! │                                                                         │
//! │  Frontend Action           Session Call            Backend + View       │
//! │  ───────────────           ────────────            ──────────────       │
//! │                                                                         │
//! │  Open cart page ─────────► refresh() ────────────► fetch lines+total   │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ────► validate, PUT,      │
//! │                                                    then refresh         │
//! │                                                                         │
//! │  Quantity set to 0 ──────► update_quantity(0) ───► routed to removal   │
//! │                                                    (piece >= 1 must     │
//! │                                                     hold on every line) │
//! │                                                                         │
//! │  Click remove ───────────► remove_line() ────────► DELETE, refresh     │
//! │                                                                         │
//! │  Checkout done ──────────► clear() ──────────────► empty cart, refresh │
//! │                                                                         │
//! │  NOTE: Every mutation refreshes from the backend afterwards so the      │
//! │        cached view (and the authoritative server total) never drifts.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use keyshop_core::error::CoreResult;
use keyshop_core::types::{CartLine, CartSummary};
use keyshop_core::validation::{validate_basket_id, validate_quantity};

use crate::service::CartService;

// =============================================================================
// Cart View
// =============================================================================

/// The last-known state of the cart, as fetched from the backend.
#[derive(Debug, Clone, Default)]
pub struct CartView {
    /// Cart lines from the last refresh.
    pub lines: Vec<CartLine>,

    /// Authoritative pre-formatted total from the last refresh.
    pub server_total: String,

    /// When the view was last refreshed.
    pub refreshed_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Cart State
// =============================================================================

/// Session-owned cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<CartView>>` because:
/// - `Arc`: Allows shared ownership across handlers
/// - `Mutex`: Ensures only one handler mutates the view at a time
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them mutate the view after a
/// backend round trip. A RwLock would add complexity with minimal benefit.
pub struct CartState {
    view: Arc<Mutex<CartView>>,
    service: Arc<dyn CartService>,
}

impl CartState {
    /// Creates an empty cart state over the given backend seam.
    ///
    /// The view starts empty; call [`refresh`](Self::refresh) to populate
    /// it before first render.
    pub fn new(service: Arc<dyn CartService>) -> Self {
        CartState {
            view: Arc::new(Mutex::new(CartView::default())),
            service,
        }
    }

    /// Re-fetches lines and the authoritative total from the backend.
    pub fn refresh(&self) -> CoreResult<()> {
        let lines = self.service.lines()?;
        let server_total = self.service.total()?;

        debug!(
            line_count = lines.len(),
            %server_total,
            "cart view refreshed"
        );

        let mut view = self.view.lock().expect("cart view mutex poisoned");
        view.lines = lines;
        view.server_total = server_total;
        view.refreshed_at = Some(Utc::now());
        Ok(())
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - Quantity 0 routes to [`remove_line`](Self::remove_line) — a
    ///   zero-piece line must never exist
    /// - Otherwise validates bounds, forwards to the backend, refreshes
    pub fn update_quantity(&self, basket_id: &str, quantity: i64) -> CoreResult<()> {
        validate_basket_id(basket_id)?;

        if quantity == 0 {
            return self.remove_line(basket_id);
        }
        validate_quantity(quantity)?;

        self.service.update_quantity(basket_id, quantity)?;
        info!(basket_id, quantity, "cart line quantity updated");
        self.refresh()
    }

    /// Removes a line from the cart.
    pub fn remove_line(&self, basket_id: &str) -> CoreResult<()> {
        validate_basket_id(basket_id)?;

        self.service.remove_line(basket_id)?;
        info!(basket_id, "cart line removed");
        self.refresh()
    }

    /// Empties the cart (e.g. after a completed checkout).
    pub fn clear(&self) -> CoreResult<()> {
        self.service.clear()?;
        info!("cart cleared");
        self.refresh()
    }

    /// Builds the display summary from the cached view.
    ///
    /// `server_total` inside the summary is the backend's string verbatim;
    /// `display_subtotal` is client math for rendering while a refresh is
    /// in flight.
    pub fn summary(&self) -> CartSummary {
        let view = self.view.lock().expect("cart view mutex poisoned");
        CartSummary::compute(&view.lines, &view.server_total)
    }

    /// Executes a function with read access to the cached view.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let names: Vec<String> = cart_state.with_view(|v| {
    ///     v.lines.iter().map(|l| l.product_name.clone()).collect()
    /// });
    /// ```
    pub fn with_view<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartView) -> R,
    {
        let view = self.view.lock().expect("cart view mutex poisoned");
        f(&view)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
