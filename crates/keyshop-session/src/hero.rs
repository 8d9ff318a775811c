//! # Hero Frame Driver
//!
//! Owns the background task that feeds frame ticks to the pure
//! [`HeroRotation`] machine and fans the results out to the UI.
//!
//! ## Driver Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        HeroDriver Architecture                          │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         HeroDriver                               │  │
//! │  │                                                                  │  │
//! │  │  • Spawns ONE frame task per mount (len > 1 only)                │  │
//! │  │  • Frame cadence ~60fps, skipped ticks collapse (no bursts)      │  │
//! │  │  • stop() and Drop both cancel the task — every exit path        │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │ per frame                               │
//! │                               ▼                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │  HeroRotation  │  │   HeroEvents   │  │  Manual navigation     │    │
//! │  │  (keyshop-core)│  │   (trait)      │  │  next/prev/go_to via   │    │
//! │  │                │  │                │  │  the driver handle,    │    │
//! │  │ tick(now) →    │  │ progress(t)    │  │  restarts the period   │    │
//! │  │ progress/index │  │ slide_changed  │  │                        │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Frame Cadence, Not An 8-Second Timer
//! The progress indicator animates continuously, so the driver ticks at
//! frame rate and derives progress from ELAPSED TIME, never from tick
//! counts. Cadence jitter (missed frames, throttling) therefore cannot
//! skew when the carousel advances, and `MissedTickBehavior::Skip` makes
//! a stalled task collapse its backlog instead of bursting.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, Instant, MissedTickBehavior};
use tracing::debug;

use keyshop_core::hero::HeroRotation;

/// Frame cadence for the driver task (~60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

// =============================================================================
// Event Fan-Out Trait
// =============================================================================

/// Trait for publishing hero carousel events to the UI.
pub trait HeroEvents: Send + Sync {
    /// The progress fraction in `[0, 1)` changed (fires once per frame
    /// while the carousel is animating).
    fn progress(&self, fraction: f64);

    /// The carousel auto-advanced to a new slide.
    fn slide_changed(&self, index: usize);
}

/// No-op event sink for testing.
pub struct NoOpEvents;

impl HeroEvents for NoOpEvents {
    fn progress(&self, _fraction: f64) {}
    fn slide_changed(&self, _index: usize) {}
}

// =============================================================================
// Hero Driver
// =============================================================================

/// Handle that exclusively owns the hero carousel's frame task.
///
/// ## Lifecycle
/// Created on mount via [`spawn`](Self::spawn); the task runs until
/// [`stop`](Self::stop) or Drop, whichever comes first. After either, no
/// event is delivered and no state changes — the "tick after unmount"
/// class of defect cannot occur.
///
/// For slide lists of length 0 or 1 no task is spawned at all: there is
/// nothing to rotate to, so no frame fires and no progress event is ever
/// published.
pub struct HeroDriver {
    rotation: Arc<Mutex<HeroRotation>>,
    epoch: Instant,
    task: Option<JoinHandle<()>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
}

impl HeroDriver {
    /// Spawns the frame task for a hero list of `slide_count` slides,
    /// playing immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(slide_count: usize, events: Arc<dyn HeroEvents>) -> Self {
        let epoch = Instant::now();

        let mut machine = HeroRotation::new(slide_count);
        machine.set_playing(true, Duration::ZERO);
        let animate = machine.should_animate();
        let rotation = Arc::new(Mutex::new(machine));

        if !animate {
            debug!(slide_count, "hero list too short, no frame task spawned");
            return HeroDriver {
                rotation,
                epoch,
                task: None,
                shutdown_tx: None,
            };
        }

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let task_rotation = Arc::clone(&rotation);

        let task = tokio::spawn(async move {
            let mut frames = interval(FRAME_INTERVAL);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        debug!("hero frame task shut down");
                        break;
                    }
                    _ = frames.tick() => {
                        let now = epoch.elapsed();
                        let outcome = {
                            let mut machine = task_rotation
                                .lock()
                                .expect("hero rotation mutex poisoned");
                            if !machine.should_animate() {
                                // Paused: frame wakeups collapse to no-ops,
                                // no event reaches the UI
                                continue;
                            }
                            machine.tick(now)
                        };

                        events.progress(outcome.progress);
                        if let Some(index) = outcome.advanced_to {
                            debug!(index, "hero auto-advanced");
                            events.slide_changed(index);
                        }
                    }
                }
            }
        });

        HeroDriver {
            rotation,
            epoch,
            task: Some(task),
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Index of the slide currently shown.
    pub fn current_index(&self) -> usize {
        self.locked().current_index()
    }

    /// Last computed progress fraction.
    pub fn progress(&self) -> f64 {
        self.locked().progress()
    }

    /// Pauses or resumes auto-advance. Resuming grants the current slide
    /// a full fresh period.
    pub fn set_playing(&self, playing: bool) {
        self.locked().set_playing(playing, self.epoch.elapsed());
    }

    /// Jumps to a slide by signed index (wraps both directions) and
    /// restarts the auto-advance period.
    pub fn go_to(&self, index: isize) -> usize {
        self.locked().go_to(index, self.epoch.elapsed())
    }

    /// Manually advances to the next slide.
    pub fn next(&self) -> usize {
        self.locked().next(self.epoch.elapsed())
    }

    /// Manually goes back to the previous slide.
    pub fn prev(&self) -> usize {
        self.locked().prev(self.epoch.elapsed())
    }

    /// Cancels the frame task. Idempotent; also runs on Drop.
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.try_send(());
        }
        if let Some(task) = self.task.take() {
            // Abort as a backstop so cancellation holds on every exit
            // path even if the shutdown message was never polled
            task.abort();
        }
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, HeroRotation> {
        self.rotation.lock().expect("hero rotation mutex poisoned")
    }
}

impl Drop for HeroDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Progress(f64),
        Slide(usize),
    }

    /// Event sink that records everything it sees.
    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<Event>>,
    }

    impl Recorder {
        fn slides(&self) -> Vec<usize> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter_map(|e| match e {
                    Event::Slide(i) => Some(*i),
                    _ => None,
                })
                .collect()
        }

        fn event_count(&self) -> usize {
            self.events.lock().unwrap().len()
        }
    }

    impl HeroEvents for Recorder {
        fn progress(&self, fraction: f64) {
            self.events.lock().unwrap().push(Event::Progress(fraction));
        }
        fn slide_changed(&self, index: usize) {
            self.events.lock().unwrap().push(Event::Slide(index));
        }
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_advances_after_eight_seconds() {
        let recorder = Arc::new(Recorder::default());
        let driver = HeroDriver::spawn(3, recorder.clone());

        sleep_ms(8_100).await;

        assert_eq!(driver.current_index(), 1);
        assert_eq!(recorder.slides(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wraps_modulo_slide_count() {
        let recorder = Arc::new(Recorder::default());
        let driver = HeroDriver::spawn(3, recorder.clone());

        // Four full periods: 1, 2, 0, 1
        sleep_ms(4 * 8_000 + 200).await;

        assert_eq!(recorder.slides(), vec![1, 2, 0, 1]);
        assert_eq!(driver.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_resets_after_advance() {
        let recorder = Arc::new(Recorder::default());
        let driver = HeroDriver::spawn(3, recorder.clone());

        sleep_ms(8_050).await;
        // Just advanced: progress restarted near zero
        assert!(driver.progress() < 0.05, "progress = {}", driver.progress());

        sleep_ms(4_000).await;
        let p = driver.progress();
        assert!((0.45..0.55).contains(&p), "progress = {p}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_advancement_indefinitely() {
        let recorder = Arc::new(Recorder::default());
        let driver = HeroDriver::spawn(3, recorder.clone());

        driver.set_playing(false);
        let quiesced = recorder.event_count();

        // 30 simulated seconds: no events, no movement
        sleep_ms(30_000).await;

        assert_eq!(driver.current_index(), 0);
        assert_eq!(recorder.event_count(), quiesced);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_grants_a_full_period() {
        let recorder = Arc::new(Recorder::default());
        let driver = HeroDriver::spawn(3, recorder.clone());

        sleep_ms(6_000).await;
        driver.set_playing(false);
        sleep_ms(60_000).await;
        driver.set_playing(true);

        // 6s of pre-pause elapsed time was discarded on resume
        sleep_ms(4_000).await;
        assert_eq!(driver.current_index(), 0);

        sleep_ms(4_100).await;
        assert_eq!(driver.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_lists_never_schedule_frames() {
        for slide_count in [0, 1] {
            let recorder = Arc::new(Recorder::default());
            let driver = HeroDriver::spawn(slide_count, recorder.clone());

            sleep_ms(30_000).await;

            assert_eq!(driver.current_index(), 0);
            assert_eq!(recorder.event_count(), 0, "slide_count = {slide_count}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_wraps_and_restarts_period() {
        let recorder = Arc::new(Recorder::default());
        let driver = HeroDriver::spawn(3, recorder.clone());

        assert_eq!(driver.go_to(-1), 2);

        // Almost a full period after the jump: still on slide 2
        sleep_ms(7_900).await;
        assert_eq!(driver.current_index(), 2);

        sleep_ms(300).await;
        assert_eq!(driver.current_index(), 0);

        assert_eq!(driver.next(), 1);
        assert_eq!(driver.prev(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_all_future_ticks() {
        let recorder = Arc::new(Recorder::default());
        let mut driver = HeroDriver::spawn(3, recorder.clone());

        sleep_ms(1_000).await;
        driver.stop();
        let quiesced = recorder.event_count();

        sleep_ms(30_000).await;
        assert_eq!(recorder.event_count(), quiesced);
        assert_eq!(driver.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_the_task() {
        let recorder = Arc::new(Recorder::default());
        let driver = HeroDriver::spawn(3, recorder.clone());

        sleep_ms(1_000).await;
        drop(driver);
        let quiesced = recorder.event_count();

        sleep_ms(30_000).await;
        assert_eq!(recorder.event_count(), quiesced);
    }
}
