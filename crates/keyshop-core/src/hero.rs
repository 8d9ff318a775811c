//! # Hero Rotation State Machine
//!
//! Drives the homepage hero carousel: auto-advance every 8 seconds while
//! playing, manual navigation with wraparound, and a continuously updating
//! progress fraction for the slide indicator.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      HeroRotation States                                │
//! │                                                                         │
//! │            set_playing(true, now)                                       │
//! │   ┌─────────┐ ──────────────────────► ┌─────────┐                      │
//! │   │ Stopped │                         │ Running │ ──┐ tick(now)        │
//! │   └─────────┘ ◄────────────────────── └─────────┘ ◄─┘                  │
//! │            set_playing(false, _)                                        │
//! │                                                                         │
//! │   tick(now):  t = min(1, elapsed / 8000ms)                             │
//! │               t <  1 → publish t as progress                           │
//! │               t >= 1 → index = (index + 1) mod len                     │
//! │                        origin = now, progress = 0                      │
//! │                                                                         │
//! │   next/prev/go_to: index set directly (signed modulo wrap), and the    │
//! │   elapsed-time origin restarts so the next auto-advance gets a full    │
//! │   8 seconds.                                                            │
//! │                                                                         │
//! │   len <= 1: the machine never runs. should_animate() is false, ticks   │
//! │   are no-ops, navigation wraps to the same index.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Clock In Here
//! This is a pure state machine: "now" is an injected [`Duration`] measured
//! from any monotonic origin the caller likes. The frame-cadence scheduling,
//! cancellation on teardown, and event fan-out live in the session crate's
//! driver, which owns the real clock.

use std::time::Duration;

use crate::AUTO_ADVANCE_MS;

/// Auto-advance period as a [`Duration`].
pub const AUTO_ADVANCE: Duration = Duration::from_millis(AUTO_ADVANCE_MS);

// =============================================================================
// Tick Outcome
// =============================================================================

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Progress fraction in `[0, 1)` toward the next auto-advance.
    /// Resets to 0 the instant the machine advances.
    pub progress: f64,

    /// The new slide index, if this tick crossed the period boundary.
    pub advanced_to: Option<usize>,
}

impl TickOutcome {
    const IDLE: TickOutcome = TickOutcome {
        progress: 0.0,
        advanced_to: None,
    };
}

// =============================================================================
// Hero Rotation
// =============================================================================

/// The hero carousel rotation machine.
///
/// ## Lifecycle
/// Created on mount with the slide count, fed `tick(now)` once per frame by
/// the driver while playing, destroyed on unmount (the driver cancels its
/// frame callback — no tick may arrive after teardown).
///
/// ## Invariants
/// - `current_index` is always in `[0, len)` (or 0 when the list is empty)
/// - progress is always in `[0, 1)` between ticks
/// - a machine with `len <= 1` never advances and never reports progress
#[derive(Debug, Clone)]
pub struct HeroRotation {
    /// Number of slides in the mounted hero list (immutable per mount).
    slide_count: usize,

    /// Index of the slide currently shown.
    current_index: usize,

    /// Whether auto-advance is active.
    playing: bool,

    /// Monotonic timestamp of the last index change or resume.
    origin: Duration,

    /// Last published progress fraction.
    progress: f64,
}

impl HeroRotation {
    /// Creates a stopped machine at index 0.
    pub fn new(slide_count: usize) -> Self {
        HeroRotation {
            slide_count,
            current_index: 0,
            playing: false,
            origin: Duration::ZERO,
            progress: 0.0,
        }
    }

    /// Number of slides.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the currently shown slide.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether auto-advance is requested.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Last published progress fraction.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether a frame callback should be scheduled at all.
    ///
    /// False when stopped, and ALWAYS false for lists of 0 or 1 slides:
    /// there is nothing to rotate to, so scheduling frames would only burn
    /// battery on pointless re-renders.
    #[inline]
    pub fn should_animate(&self) -> bool {
        self.playing && self.slide_count > 1
    }

    /// Starts or stops auto-advance.
    ///
    /// Resuming resets the elapsed-time origin to `now`, so the current
    /// slide gets a full period rather than inheriting stale elapsed time
    /// from before the pause.
    pub fn set_playing(&mut self, playing: bool, now: Duration) {
        if playing && !self.playing {
            self.origin = now;
            self.progress = 0.0;
        }
        self.playing = playing;
    }

    /// Advances the machine by one frame.
    ///
    /// Computes `t = min(1, elapsed / 8000ms)`; below 1 the fraction is
    /// published as progress, at 1 the index advances (wrapping) and the
    /// origin restarts at `now`.
    ///
    /// No-op unless [`should_animate`](Self::should_animate) holds.
    pub fn tick(&mut self, now: Duration) -> TickOutcome {
        if !self.should_animate() {
            return TickOutcome::IDLE;
        }

        let elapsed = now.saturating_sub(self.origin);
        let t = (elapsed.as_secs_f64() / AUTO_ADVANCE.as_secs_f64()).min(1.0);

        if t >= 1.0 {
            self.current_index = (self.current_index + 1) % self.slide_count;
            self.origin = now;
            self.progress = 0.0;
            TickOutcome {
                progress: 0.0,
                advanced_to: Some(self.current_index),
            }
        } else {
            self.progress = t;
            TickOutcome {
                progress: t,
                advanced_to: None,
            }
        }
    }

    /// Jumps to a slide by signed index, wrapping in both directions:
    /// `go_to(-1)` on a 3-slide list lands on index 2.
    ///
    /// Manual navigation restarts the elapsed-time origin so the next
    /// auto-advance happens a full period after the jump.
    pub fn go_to(&mut self, index: isize, now: Duration) -> usize {
        if self.slide_count == 0 {
            return 0;
        }

        let len = self.slide_count as isize;
        self.current_index = (((index % len) + len) % len) as usize;
        self.origin = now;
        self.progress = 0.0;
        self.current_index
    }

    /// Advances to the next slide (manual).
    pub fn next(&mut self, now: Duration) -> usize {
        self.go_to(self.current_index as isize + 1, now)
    }

    /// Goes back to the previous slide (manual).
    pub fn prev(&mut self, now: Duration) -> usize {
        self.go_to(self.current_index as isize - 1, now)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
