#![forbid(unsafe_code)]

//! The three geometric transition variants: reveal, push, overlay.
//!
//! Behavioral differences between variants are entirely data — which layers
//! move, between which endpoints — so each variant is a pure function from
//! panel geometry to a [`TransitionPlan`], not a type with virtual dispatch.
//! All endpoints are computed once here; nothing in a plan mutates afterward.
//!
//! Sign convention: positive offsets point toward the trailing edge. A
//! leading-side panel therefore pushes content in the positive direction and
//! parks its panel layer at a negative offset while closed, and a
//! trailing-side panel mirrors both signs.
//!
//! # Invariants
//!
//! 1. Reveal moves only the content layer; the panel sits beneath, unmoved.
//! 2. Push moves panel and content with opposite-signed endpoints so both
//!    travel in the same screen direction.
//! 3. Overlay's panel starts `OVERLAY_MARGIN` beyond its width off-screen,
//!    and its backdrop fades `BACKDROP_HIDDEN` → `BACKDROP_SHOWN`.
//! 4. Non-positive or non-finite widths are rejected at plan construction.

use crate::error::{Result, TransitionError};
use crate::panel::{PanelLayout, Side};
use crate::tween::{LayerId, Property, Tween};

/// Extra off-screen travel for the overlay panel, so its shadow never peeks
/// in while closed.
pub const OVERLAY_MARGIN: f32 = 8.0;

/// Backdrop opacity while the panel is closed. Kept slightly above zero:
/// some renderers flash a backdrop that goes through exactly 0.0 while
/// present in the layer tree.
pub const BACKDROP_HIDDEN: f32 = 0.01;

/// Backdrop opacity while the panel is fully open.
pub const BACKDROP_SHOWN: f32 = 0.35;

/// The immutable set of tweens one variant composes into the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    tweens: Vec<Tween>,
}

impl TransitionPlan {
    fn new(tweens: Vec<Tween>) -> Self {
        Self { tweens }
    }

    /// The tweens, in composition order.
    #[inline]
    #[must_use]
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    /// Number of tweens in the plan.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether the plan is empty (never true for the built-in variants).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Find the tween targeting a layer/property pair, if any.
    #[must_use]
    pub fn tween_for(&self, layer: LayerId, property: Property) -> Option<&Tween> {
        self.tweens
            .iter()
            .find(|t| t.layer() == layer && t.property() == property)
    }
}

/// Direction sign for offsets that push content toward the panel's far edge.
fn push_sign(side: Side) -> f32 {
    match side {
        Side::Leading => 1.0,
        Side::Trailing => -1.0,
    }
}

fn checked_width(panel: &dyn PanelLayout) -> Result<f32> {
    let width = panel.width();
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(TransitionError::InvalidWidth { width })
    }
}

/// Reveal: content slides off by the panel width; the panel layer sits
/// stationary beneath it and gets no tween at all.
pub fn reveal_plan(panel: &dyn PanelLayout) -> Result<TransitionPlan> {
    let width = checked_width(panel)?;
    let shift = push_sign(panel.side()) * width;
    Ok(TransitionPlan::new(vec![Tween::new(
        panel.content_layer(),
        Property::OffsetX,
        0.0,
        shift,
    )]))
}

/// Push: the panel slides in from just off-screen while the content gives
/// way, both moving in the same screen direction.
///
/// | side     | content opened | panel closed | panel opened |
/// |----------|----------------|--------------|--------------|
/// | trailing | −width         | width        | 0            |
/// | leading  | width          | −width       | 0            |
pub fn push_plan(panel: &dyn PanelLayout) -> Result<TransitionPlan> {
    let width = checked_width(panel)?;
    let sign = push_sign(panel.side());
    Ok(TransitionPlan::new(vec![
        Tween::new(panel.panel_layer(), Property::OffsetX, -sign * width, 0.0),
        Tween::new(panel.content_layer(), Property::OffsetX, 0.0, sign * width),
    ]))
}

/// Overlay: the panel slides in over stationary content from
/// `±(OVERLAY_MARGIN + width)` while a backdrop fades up behind it.
pub fn overlay_plan(panel: &dyn PanelLayout) -> Result<TransitionPlan> {
    let width = checked_width(panel)?;
    let sign = push_sign(panel.side());
    Ok(TransitionPlan::new(vec![
        Tween::new(
            panel.panel_layer(),
            Property::OffsetX,
            -sign * (OVERLAY_MARGIN + width),
            0.0,
        ),
        Tween::new(
            panel.backdrop_layer(),
            Property::Opacity,
            BACKDROP_HIDDEN,
            BACKDROP_SHOWN,
        ),
    ]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
