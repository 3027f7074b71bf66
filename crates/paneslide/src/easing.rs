#![forbid(unsafe_code)]

//! Easing curves for timed playback.
//!
//! An easing function maps normalized time `t` in [0.0, 1.0] to eased
//! progress in [0.0, 1.0], with `f(0) = 0` and `f(1) = 1`. Manual seeking
//! never goes through an easing curve; these apply only to timed segments.

/// An easing function: normalized time in, eased progress out.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-in: slow start, fast finish.
#[inline]
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out: fast start, slow finish.
#[inline]
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out: slow at both ends.
#[inline]
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-in: sharper version of [`ease_in`].
#[inline]
#[must_use]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-out: sharper version of [`ease_out`].
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
