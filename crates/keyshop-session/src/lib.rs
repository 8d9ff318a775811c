//! # keyshop-session: Stateful Session Layer
//!
//! Sits between the storefront frontend and `keyshop-core`. Where the core
//! crate is pure functions over injected data and time, this crate owns the
//! mutable pieces: the cached cart view, the external cart-service seam,
//! and the frame-driven hero carousel task.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Frontend (web)                            │
//! │        Cart page ──────────────► Hero carousel                          │
//! └──────────┬──────────────────────────────┬───────────────────────────────┘
//!            │                              │
//!    ┌───────▼───────────┐        ┌─────────▼──────────┐
//!    │    CartState      │        │    HeroDriver      │
//!    │  Arc<Mutex<view>> │        │  tokio frame task  │
//!    │  refresh after    │        │  ~60fps ticks,     │
//!    │  every mutation   │        │  cancelled on drop │
//!    └───────┬───────────┘        └─────────┬──────────┘
//!            │                              │
//!    ┌───────▼───────────┐        ┌─────────▼──────────┐
//!    │ dyn CartService   │        │   HeroRotation     │
//!    │ (REST backend)    │        │  (keyshop-core)    │
//!    └───────────────────┘        └────────────────────┘
//! ```
//!
//! ## Cancellation Contract
//! Every background task this crate spawns is owned by a handle; dropping
//! the handle (or calling `stop()`) cancels the task on every exit path.
//! No tick or callback may fire after its owner is gone.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod hero;
pub mod service;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartState, CartView};
pub use hero::{HeroDriver, HeroEvents, NoOpEvents};
pub use service::CartService;
