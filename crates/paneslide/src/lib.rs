#![forbid(unsafe_code)]

//! Drag-interruptible, reversible open/close transitions for slide-in panels.
//!
//! # Role
//! `paneslide` is the transition-driving state machine between a gesture
//! recognizer and a host UI's layers. One [`TransitionController`] unifies
//! two very different drivers of the same animation state — discrete timed
//! playback and continuous manual scrubbing — with direction reversal
//! mid-transition, partial completion, and a velocity-aware snap to
//! completion at release.
//!
//! # Primary pieces
//! - **[`Motion`]**: tick-driven timeline engine over [`Tween`] children,
//!   with timed segments, manual seek, and one-shot completion callbacks.
//! - **[`TransitionController`]**: the four-operation gesture API — `play`,
//!   `scrub_start`, `scrub_step`, `scrub_end` — plus idempotent `destroy`.
//! - **Variants**: `reveal`, `push`, and `overlay` geometry as pure
//!   functions from panel width/side to a [`TransitionPlan`].
//! - **[`VariantRegistry`]**: explicit name → factory mapping, injected at
//!   startup; no global registration side effects.
//! - **[`VelocityTracker`]**: sliding-window release-velocity estimation for
//!   hosts whose recognizer doesn't provide one.
//!
//! # How it fits
//! The host owns layout, painting, and the event loop. It hands this crate a
//! [`PanelLayout`] (width, side, opaque layer handles), drives frames via
//! `tick`, and reads back per-layer offsets and opacities with
//! [`Motion::sample`] each frame. Everything is single-threaded and
//! event-loop serialized; there are no locks and no I/O.
//!
//! ```
//! use std::time::Duration;
//! use paneslide::motion::MotionConfig;
//! use paneslide::panel::{PanelFrame, Side};
//! use paneslide::registry::VariantRegistry;
//! use paneslide::tween::LayerId;
//!
//! let registry = VariantRegistry::with_builtins();
//! let frame = PanelFrame {
//!     width: 250.0,
//!     side: Side::Leading,
//!     panel: LayerId(0),
//!     content: LayerId(1),
//!     backdrop: LayerId(2),
//! };
//! let mut panel = registry.create("push", &frame, MotionConfig::default()).unwrap();
//!
//! // A toggle command: animate open, then paint each frame from `sample()`.
//! panel.play(true, true, |open| assert!(open)).unwrap();
//! panel.tick(Duration::from_millis(400)).unwrap();
//! assert_eq!(panel.motion().unwrap().position(), 1.0);
//! ```

pub mod controller;
pub mod easing;
pub mod error;
pub mod motion;
pub mod panel;
pub mod registry;
pub mod tween;
pub mod variant;
pub mod velocity;

pub use controller::{GesturePhase, TransitionController, settle_duration};
pub use error::{Result, TransitionError};
pub use motion::{EngineState, Motion, MotionConfig};
pub use panel::{PanelFrame, PanelLayout, Side};
pub use registry::{VariantFactory, VariantRegistry};
pub use tween::{LayerId, Property, Tween};
pub use variant::{TransitionPlan, overlay_plan, push_plan, reveal_plan};
pub use velocity::VelocityTracker;
