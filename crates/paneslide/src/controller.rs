#![forbid(unsafe_code)]

//! Transition controller: one uniform API over two drivers of the same
//! animation state.
//!
//! A [`TransitionController`] wraps exactly one owned [`Motion`] engine and
//! translates gesture semantics into engine calls: discrete timed play,
//! scrub-start, scrub-step, and scrub-end. The single piece of derived state
//! it tracks is whether the active gesture is heading toward open, held in an
//! explicit [`GesturePhase`] so out-of-order calls surface as typed errors
//! instead of silent misbehavior.
//!
//! The controller is deliberately single-threaded (`Rc`, no locks): all
//! operations arrive serialized from one UI event loop, and at most one
//! gesture or play cycle is active at a time. The discipline for interrupts
//! is cancel-before-start — a new `play` or `scrub_start` cleanly cancels an
//! in-flight timed cycle, firing its pending callback as cancelled.
//!
//! # Invariants
//!
//! 1. Scrub intent is only written by `scrub_start` and cleared by the
//!    `scrub_end` completion callback; `play` never touches it.
//! 2. Every `play`/`scrub_end` invokes its `on_done` at most once, whether
//!    the cycle completes naturally or is superseded.
//! 3. After `destroy()` every operation returns
//!    [`TransitionError::Destroyed`]; `destroy` itself stays idempotent.
//!
//! # Failure Modes
//!
//! - `play` or `scrub_start` during an active scrub: `GestureInProgress`.
//! - `scrub_step`/`scrub_end` outside a scrub: `NotScrubbing`.
//! - Scrub fractions out of [0, 1]: clamped by the engine.
//! - `destroy` mid-cycle drops the pending callback without firing; the
//!   panel is being torn down, nobody is listening.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::error::{Result, TransitionError};
use crate::motion::{Motion, MotionConfig};
use crate::variant::TransitionPlan;

// ---------------------------------------------------------------------------
// Settle timing
// ---------------------------------------------------------------------------

/// Release velocity (gesture units/sec) at which the settle duration stops
/// shrinking.
const SNAP_VELOCITY_DIVISOR: f32 = 4.0;

/// Largest fraction of the base duration a fast flick can shave off,
/// leaving a floor of 30%.
const MAX_SNAP_CUT: f32 = 0.7;

/// Settle duration for a released gesture.
///
/// A fast flick snaps to its resting state quickly; a slow or ambiguous
/// release completes at the full base duration:
/// `base × (1 − min(|velocity| / 4, 0.7))`.
#[must_use]
pub fn settle_duration(base: Duration, velocity: f32) -> Duration {
    let factor = 1.0 - (velocity.abs() / SNAP_VELOCITY_DIVISOR).min(MAX_SNAP_CUT);
    base.mul_f32(factor)
}

// ---------------------------------------------------------------------------
// Gesture phase
// ---------------------------------------------------------------------------

/// Where the controller is in the gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture active. Timed `play` cycles run in this phase.
    Idle,
    /// Mid-gesture; `opening` records the gesture's directional intent
    /// (the opposite of the state it started from).
    Scrubbing {
        /// Whether the gesture is heading toward open.
        opening: bool,
    },
    /// Released; the settle animation is in flight.
    Completing,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Drives a panel's open/close transition as timed playback or a live scrub.
///
/// Owns its [`Motion`] exclusively: created in the constructor, released
/// exactly once by [`destroy`](Self::destroy).
pub struct TransitionController {
    motion: Option<Motion>,
    phase: Rc<Cell<GesturePhase>>,
}

impl std::fmt::Debug for TransitionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("destroyed", &self.motion.is_none())
            .field("phase", &self.phase.get())
            .finish()
    }
}

impl TransitionController {
    /// Build a controller from a variant's plan and timing configuration.
    #[must_use]
    pub fn new(plan: TransitionPlan, config: MotionConfig) -> Self {
        let mut motion = Motion::new(config);
        for tween in plan.tweens() {
            motion.add_child(*tween);
        }
        Self {
            motion: Some(motion),
            phase: Rc::new(Cell::new(GesturePhase::Idle)),
        }
    }

    /// Play the transition toward open (`should_open`) or closed.
    ///
    /// `on_done(final_open_state)` fires exactly once for this call — on
    /// natural completion, on synchronous completion (`animated = false`),
    /// or when a later call supersedes this one mid-flight. Starting a new
    /// play while a prior one is in flight cancels the prior cycle cleanly.
    pub fn play<F>(&mut self, should_open: bool, animated: bool, on_done: F) -> Result<()>
    where
        F: FnOnce(bool) + 'static,
    {
        let motion = self.motion.as_mut().ok_or(TransitionError::Destroyed)?;
        if self.phase.get() != GesturePhase::Idle {
            return Err(TransitionError::GestureInProgress);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(should_open, animated, "play");
        motion.set_reversed(!should_open);
        motion.set_on_complete(move |_cancelled| on_done(should_open));
        if animated {
            motion.play();
        } else {
            motion.play_sync();
        }
        Ok(())
    }

    /// Begin a scrub gesture. The intent is the opposite of the current
    /// state: grabbing an open panel starts a closing gesture.
    ///
    /// Cancels any in-flight timed cycle (including a settle from a previous
    /// release) before entering manual-seek mode. Subsequent samples map
    /// linearly to visual state — no easing under a live pointer.
    pub fn scrub_start(&mut self, is_currently_open: bool) -> Result<()> {
        let motion = self.motion.as_mut().ok_or(TransitionError::Destroyed)?;
        if matches!(self.phase.get(), GesturePhase::Scrubbing { .. }) {
            return Err(TransitionError::GestureInProgress);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(is_currently_open, "scrub start");
        motion.set_reversed(is_currently_open);
        // Cancel first: a superseded settle callback resets the phase, so the
        // new phase is written only after the engine has switched modes.
        motion.seek_start();
        self.phase.set(GesturePhase::Scrubbing {
            opening: !is_currently_open,
        });
        Ok(())
    }

    /// Apply one scrub sample in [0.0, 1.0] (clamped). The gesture may move
    /// the value up and down arbitrarily; the latest sample wins, with no
    /// animation lag.
    pub fn scrub_step(&mut self, fraction: f32) -> Result<()> {
        let motion = self.motion.as_mut().ok_or(TransitionError::Destroyed)?;
        let GesturePhase::Scrubbing { .. } = self.phase.get() else {
            return Err(TransitionError::NotScrubbing);
        };
        motion.seek_step(fraction);
        Ok(())
    }

    /// Release the gesture and settle to a resting state.
    ///
    /// A gesture that fails to complete reverts to the state it started
    /// from: an abandoned opening snaps back closed, an abandoned closing
    /// snaps back open. The settle runs from `fraction` over
    /// [`settle_duration`] of the base duration, then the completion
    /// callback clears the gesture phase and calls `on_done(will_open)`
    /// exactly once.
    pub fn scrub_end<F>(
        &mut self,
        should_complete: bool,
        fraction: f32,
        velocity: f32,
        on_done: F,
    ) -> Result<()>
    where
        F: FnOnce(bool) + 'static,
    {
        let motion = self.motion.as_mut().ok_or(TransitionError::Destroyed)?;
        let GesturePhase::Scrubbing { opening } = self.phase.get() else {
            return Err(TransitionError::NotScrubbing);
        };
        let will_open = if opening {
            should_complete
        } else {
            !should_complete
        };
        let settle = settle_duration(motion.duration(), velocity);
        #[cfg(feature = "tracing")]
        tracing::debug!(should_complete, velocity, will_open, "scrub end");
        self.phase.set(GesturePhase::Completing);
        let phase = Rc::clone(&self.phase);
        motion.set_on_complete(move |_cancelled| {
            phase.set(GesturePhase::Idle);
            on_done(will_open);
        });
        motion.seek_end(should_complete, fraction, settle);
        Ok(())
    }

    /// Advance any in-flight timed segment from the host frame loop.
    pub fn tick(&mut self, dt: Duration) -> Result<()> {
        let motion = self.motion.as_mut().ok_or(TransitionError::Destroyed)?;
        motion.tick(dt);
        Ok(())
    }

    /// Release the owned engine. Idempotent: a second call is a no-op.
    ///
    /// A pending completion callback is dropped without firing. Afterward
    /// every other operation returns [`TransitionError::Destroyed`].
    pub fn destroy(&mut self) {
        if self.motion.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!("transition controller destroyed");
            self.phase.set(GesturePhase::Idle);
        }
    }

    /// The owned engine, for painting and inspection. `None` after destroy.
    #[inline]
    #[must_use]
    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    /// Current gesture phase.
    #[inline]
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.phase.get()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
