#![forbid(unsafe_code)]

//! Release-velocity estimation for scrub gestures.
//!
//! A [`VelocityTracker`] keeps a short window of timestamped progress samples
//! and reports the gesture's rate in progress-units per second at release —
//! the value [`scrub_end`](crate::controller::TransitionController::scrub_end)
//! expects. Hosts whose gesture recognizer already reports a release velocity
//! can skip this entirely.
//!
//! Velocity is measured over the whole retained window rather than the last
//! two samples; single-frame jitter would otherwise dominate.
//!
//! # Failure Modes
//!
//! - Fewer than two samples in the window: velocity is 0.0 (an ambiguous
//!   release settles at full duration, which is the safe default).
//! - Samples sharing one timestamp: treated as zero elapsed, velocity 0.0.

use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

/// Samples older than this no longer describe the finger's current motion.
const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

/// Sliding-window velocity estimator for gesture progress.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<(Instant, f32)>,
    window: Duration,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    /// Create a tracker with the default 100ms window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// Create a tracker with a custom retention window.
    #[must_use]
    pub fn with_window(window: Duration) -> Self {
        Self {
            samples: VecDeque::with_capacity(8),
            window,
        }
    }

    /// Record one progress sample at `now`.
    pub fn push(&mut self, now: Instant, fraction: f32) {
        self.samples.push_back((now, fraction));
        self.expire(now);
    }

    /// Velocity in progress-units per second over the retained window.
    #[must_use]
    pub fn velocity(&mut self, now: Instant) -> f32 {
        self.expire(now);
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        let elapsed = t1.saturating_duration_since(t0);
        if elapsed.is_zero() {
            return 0.0;
        }
        (p1 - p0) / elapsed.as_secs_f32()
    }

    /// Drop all samples (call when a new gesture begins).
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the tracker holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn expire(&mut self, now: Instant) {
        while let Some(&(t, _)) = self.samples.front() {
            if now.saturating_duration_since(t) > self.window {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
