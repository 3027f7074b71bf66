#![forbid(unsafe_code)]

//! Tween: one property interpolation between two literal endpoints.
//!
//! A [`Tween`] is the leaf unit composed into a [`Motion`](crate::motion::Motion)
//! timeline. It targets exactly one visual layer and one interpolated
//! property, and is immutable after construction. The timeline owns the
//! clock; a tween only answers "what is my value at position `t`".
//!
//! # Invariants
//!
//! 1. Endpoints are fixed at construction; no runtime mutation.
//! 2. `value_at(0.0)` returns `from`, `value_at(1.0)` returns `to`.
//! 3. `value_at` is linear in `t`; easing is applied by the timeline before
//!    sampling, never here.

/// Opaque handle for a visual layer (moving panel, moving content, backdrop).
///
/// Produced by the panel layout provider and passed straight through; this
/// crate never interprets the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u32);

/// The interpolated property of a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Horizontal position offset, in layout units.
    OffsetX,
    /// Layer opacity in [0.0, 1.0].
    Opacity,
}

/// One property interpolation for one layer, between two endpoint values.
///
/// Endpoints are (closed-position, open-position): `from` is the value at
/// timeline position 0.0 (panel closed), `to` at 1.0 (panel open).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    layer: LayerId,
    property: Property,
    from: f32,
    to: f32,
}

impl Tween {
    /// Create a tween for `layer`/`property` running `from` → `to`.
    #[must_use]
    pub const fn new(layer: LayerId, property: Property, from: f32, to: f32) -> Self {
        Self {
            layer,
            property,
            from,
            to,
        }
    }

    /// The target layer.
    #[inline]
    #[must_use]
    pub const fn layer(&self) -> LayerId {
        self.layer
    }

    /// The interpolated property.
    #[inline]
    #[must_use]
    pub const fn property(&self) -> Property {
        self.property
    }

    /// Value at timeline position 0.0 (closed).
    #[inline]
    #[must_use]
    pub const fn from(&self) -> f32 {
        self.from
    }

    /// Value at timeline position 1.0 (open).
    #[inline]
    #[must_use]
    pub const fn to(&self) -> f32 {
        self.to
    }

    /// Linear interpolation at timeline position `t` (clamped to [0, 1]).
    #[inline]
    #[must_use]
    pub fn value_at(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }
}
