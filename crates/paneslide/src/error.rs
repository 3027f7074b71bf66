#![forbid(unsafe_code)]

//! Error types.
//!
//! All operations are local, synchronous-or-callback state transitions; there
//! is no I/O and nothing transient to retry. Errors exist to surface gesture
//! and lifecycle sequencing bugs early instead of silently misbehaving.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TransitionError>;

/// Sequencing and construction errors for panel transitions.
#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    /// The controller was used after `destroy()`.
    #[error("transition controller used after destroy")]
    Destroyed,

    /// A scrub operation arrived outside an active scrub gesture.
    #[error("scrub operation outside an active gesture")]
    NotScrubbing,

    /// `play` or `scrub_start` arrived while a gesture was in progress.
    #[error("gesture already in progress")]
    GestureInProgress,

    /// No variant registered under this name.
    #[error("unknown transition variant: {name}")]
    UnknownVariant { name: String },

    /// Panel width must be a positive, finite length.
    #[error("invalid panel width: {width}")]
    InvalidWidth { width: f32 },
}
