#![forbid(unsafe_code)]

//! Motion: tick-driven timeline engine for a panel transition.
//!
//! A [`Motion`] owns a flat set of [`Tween`] children and a single playback
//! position in [0.0, 1.0], where 0.0 is the closed arrangement and 1.0 the
//! open one. The timeline is authored for the opening direction; closing is
//! expressed by the `reversed` flag, never by rewriting endpoints.
//!
//! Two drivers move the position:
//!
//! - **Timed segments** ([`play`](Motion::play), [`play_sync`](Motion::play_sync),
//!   [`seek_end`](Motion::seek_end)): the position travels from its current
//!   value toward a directional endpoint, shaped by an easing curve, advanced
//!   by [`tick`](Motion::tick) from the host event loop.
//! - **Manual seeking** ([`seek_start`](Motion::seek_start) /
//!   [`seek_step`](Motion::seek_step)): the latest gesture sample is applied
//!   immediately with a linear mapping. No easing — eased motion under a
//!   live pointer feels disconnected from it.
//!
//! # Invariants
//!
//! 1. The completion callback fires at most once per play/seek-completion
//!    cycle, with `cancelled = true` iff the cycle was superseded mid-flight.
//! 2. Starting a new cycle cancels the previous one first ("cancel-before-
//!    start"): no orphaned callback, no stale segment.
//! 3. `seek_step` input is in gesture space; the `reversed` flag maps it to
//!    timeline space (`reversed` ⇒ position = 1 − fraction).
//! 4. Children sample the raw position; easing is applied to segment travel
//!    before sampling, so manual seeking is exactly linear.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns so a segment completes on the next tick
//!   instead of dividing by zero.
//! - Out-of-range fractions: clamped to [0.0, 1.0].
//! - `tick` while idle: no-op.

use std::time::Duration;

use crate::easing::{self, EasingFn};
use crate::tween::{LayerId, Property, Tween};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Timing and easing for timed playback.
///
/// The two curves are intentionally asymmetric so opening feels fast-in and
/// closing slow-out.
#[derive(Debug, Clone, Copy)]
pub struct MotionConfig {
    /// Base duration of a full open/close transition (default: 300ms).
    pub duration: Duration,
    /// Easing for travel toward the open endpoint.
    pub open_easing: EasingFn,
    /// Easing for travel toward the closed endpoint.
    pub close_easing: EasingFn,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            open_easing: easing::ease_out_cubic,
            close_easing: easing::ease_in_cubic,
        }
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Playback state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// At rest; position holds the last settled value.
    Idle,
    /// Timed playback toward a directional endpoint ([`Motion::play`]).
    Playing,
    /// Manual-seek mode; gesture samples drive the position directly.
    Seeking,
    /// Timed completion after a released gesture ([`Motion::seek_end`]).
    Completing,
}

/// One-shot completion callback. The flag is `true` iff the cycle was
/// cancelled by a superseding call rather than finishing naturally.
type CompletionFn = Box<dyn FnOnce(bool)>;

/// An in-flight timed segment: position travels `from` → `to` over
/// `duration`, shaped by `easing`.
#[derive(Clone, Copy)]
struct Segment {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

/// Tick-driven timeline engine. See the module docs for the model.
pub struct Motion {
    children: Vec<Tween>,
    duration: Duration,
    easing: EasingFn,
    reverse_easing: EasingFn,
    reversed: bool,
    position: f32,
    state: EngineState,
    segment: Option<Segment>,
    on_complete: Option<CompletionFn>,
}

impl std::fmt::Debug for Motion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Motion")
            .field("child_count", &self.children.len())
            .field("duration", &self.duration)
            .field("reversed", &self.reversed)
            .field("position", &self.position)
            .field("state", &self.state)
            .field("callback_pending", &self.on_complete.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Motion {
    /// Create an empty engine with the given timing configuration.
    #[must_use]
    pub fn new(config: MotionConfig) -> Self {
        Self {
            children: Vec::new(),
            duration: clamp_duration(config.duration),
            easing: config.open_easing,
            reverse_easing: config.close_easing,
            reversed: false,
            position: 0.0,
            state: EngineState::Idle,
            segment: None,
            on_complete: None,
        }
    }

    /// Add a child tween. Children added mid-cycle pick up the current
    /// position on the next sample.
    pub fn add_child(&mut self, tween: Tween) {
        self.children.push(tween);
    }

    /// Set the easing for travel toward the open endpoint.
    pub fn set_easing(&mut self, curve: EasingFn) {
        self.easing = curve;
    }

    /// Set the easing for travel toward the closed endpoint.
    pub fn set_reverse_easing(&mut self, curve: EasingFn) {
        self.reverse_easing = curve;
    }

    /// Set the base playback duration. Zero is clamped to 1ns.
    pub fn set_duration(&mut self, d: Duration) {
        self.duration = clamp_duration(d);
    }

    /// Set the playback direction. Affects the endpoint [`play`](Self::play)
    /// targets and the gesture-space mapping of [`seek_step`](Self::seek_step).
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Register the one-shot completion callback for the next cycle.
    ///
    /// If a timed cycle is in flight, it is cancelled first and its pending
    /// callback fires with `cancelled = true` — at-most-once delivery, no
    /// coalescing. Registering during manual seek installs the callback for
    /// the upcoming [`seek_end`](Self::seek_end) without disturbing the seek.
    pub fn set_on_complete<F>(&mut self, cb: F)
    where
        F: FnOnce(bool) + 'static,
    {
        if matches!(self.state, EngineState::Playing | EngineState::Completing) {
            self.cancel_active();
        }
        self.on_complete = Some(Box::new(cb));
    }
}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

impl Motion {
    /// Start timed playback from the current position toward the directional
    /// endpoint (1.0 forward, 0.0 reversed) over the configured duration.
    pub fn play(&mut self) {
        self.cancel_active();
        let to = if self.reversed { 0.0 } else { 1.0 };
        let easing = if self.reversed {
            self.reverse_easing
        } else {
            self.easing
        };
        self.segment = Some(Segment {
            from: self.position,
            to,
            duration: self.duration,
            elapsed: Duration::ZERO,
            easing,
        });
        self.state = EngineState::Playing;
        #[cfg(feature = "tracing")]
        tracing::debug!(reversed = self.reversed, "timed playback started");
    }

    /// Complete the transition synchronously to its end state, no animation.
    /// The completion callback fires immediately with `cancelled = false`.
    pub fn play_sync(&mut self) {
        self.cancel_active();
        self.position = if self.reversed { 0.0 } else { 1.0 };
        self.state = EngineState::Idle;
        #[cfg(feature = "tracing")]
        tracing::debug!(reversed = self.reversed, "synchronous completion");
        self.fire(false);
    }

    /// Enter manual-seek mode. Any in-flight timed cycle is cancelled.
    pub fn seek_start(&mut self) {
        self.cancel_active();
        self.state = EngineState::Seeking;
        #[cfg(feature = "tracing")]
        tracing::trace!(reversed = self.reversed, "manual seek started");
    }

    /// Apply one gesture sample immediately. Monotonicity is not required;
    /// the latest sample wins. Linear mapping, no easing.
    pub fn seek_step(&mut self, fraction: f32) {
        self.position = map_fraction(self.reversed, fraction.clamp(0.0, 1.0));
    }

    /// Leave manual-seek mode: animate from `from_fraction` (gesture space)
    /// toward the resolved endpoint over `duration`, then fire the completion
    /// callback. `should_complete = false` travels back to the gesture's
    /// starting endpoint.
    pub fn seek_end(&mut self, should_complete: bool, from_fraction: f32, duration: Duration) {
        let from = map_fraction(self.reversed, from_fraction.clamp(0.0, 1.0));
        let to = map_fraction(self.reversed, if should_complete { 1.0 } else { 0.0 });
        // Travel toward the open endpoint gets the forward curve.
        let easing = if to > from {
            self.easing
        } else {
            self.reverse_easing
        };
        self.position = from;
        self.segment = Some(Segment {
            from,
            to,
            duration: clamp_duration(duration),
            elapsed: Duration::ZERO,
            easing,
        });
        self.state = EngineState::Completing;
        #[cfg(feature = "tracing")]
        tracing::debug!(should_complete, from_fraction, "seek released");
    }

    /// Advance any in-flight timed segment. No-op while idle or seeking.
    ///
    /// Completion callbacks fire from inside this call, exactly once per
    /// cycle, when the segment reaches its target.
    pub fn tick(&mut self, dt: Duration) {
        let Some(seg) = self.segment.as_mut() else {
            return;
        };
        seg.elapsed = seg.elapsed.saturating_add(dt);
        if seg.elapsed >= seg.duration {
            self.position = seg.to;
            self.segment = None;
            self.state = EngineState::Idle;
            self.fire(false);
        } else {
            let t = (seg.elapsed.as_secs_f64() / seg.duration.as_secs_f64()) as f32;
            let eased = (seg.easing)(t.clamp(0.0, 1.0));
            self.position = seg.from + (seg.to - seg.from) * eased;
        }
    }

    /// Cancel an in-flight cycle: drop the segment, return to idle, and fire
    /// the pending callback with `cancelled = true`.
    fn cancel_active(&mut self) {
        if self.state == EngineState::Idle {
            return;
        }
        self.segment = None;
        self.state = EngineState::Idle;
        #[cfg(feature = "tracing")]
        tracing::trace!("in-flight cycle cancelled");
        self.fire(true);
    }

    fn fire(&mut self, cancelled: bool) {
        if let Some(cb) = self.on_complete.take() {
            cb(cancelled);
        }
    }
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

impl Motion {
    /// Current timeline position in [0.0, 1.0] (0 = closed, 1 = open).
    #[inline]
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Current playback state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Configured base duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of child tweens.
    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether the direction is currently reversed.
    #[inline]
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Current value of one layer property, if a tween targets it.
    #[must_use]
    pub fn value_of(&self, layer: LayerId, property: Property) -> Option<f32> {
        self.children
            .iter()
            .find(|c| c.layer() == layer && c.property() == property)
            .map(|c| c.value_at(self.position))
    }

    /// Sample every child at the current position, for painting.
    pub fn sample(&self) -> impl Iterator<Item = (LayerId, Property, f32)> + '_ {
        self.children
            .iter()
            .map(|c| (c.layer(), c.property(), c.value_at(self.position)))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Gesture fraction → timeline position under the direction flag.
#[inline]
fn map_fraction(reversed: bool, fraction: f32) -> f32 {
    if reversed { 1.0 - fraction } else { fraction }
}

#[inline]
fn clamp_duration(d: Duration) -> Duration {
    if d.is_zero() { Duration::from_nanos(1) } else { d }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
