#![forbid(unsafe_code)]

//! Panel geometry provider seam.
//!
//! The host UI owns layout; this crate only needs the panel's width, which
//! screen edge it is anchored to, and opaque handles for the three visual
//! layers a transition may move. [`PanelFrame`] is a plain value-type
//! implementation for hosts that already know their geometry (and for tests).

use crate::tween::LayerId;

/// The screen edge a panel is anchored to.
///
/// Maps to left/right depending on writing direction; this crate only cares
/// about the sign conventions that follow from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The start edge (left in left-to-right layouts).
    Leading,
    /// The end edge (right in left-to-right layouts).
    Trailing,
}

/// Geometry and layer handles for one panel.
pub trait PanelLayout {
    /// Panel width, a positive length in layout units.
    fn width(&self) -> f32;

    /// Which edge the panel is anchored to.
    fn side(&self) -> Side;

    /// The sliding panel layer.
    fn panel_layer(&self) -> LayerId;

    /// The primary content layer that may be pushed aside.
    fn content_layer(&self) -> LayerId;

    /// The dimming backdrop layer (used by the overlay variant only).
    fn backdrop_layer(&self) -> LayerId;
}

/// Plain-value [`PanelLayout`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Panel width in layout units.
    pub width: f32,
    /// Anchored edge.
    pub side: Side,
    /// Sliding panel layer handle.
    pub panel: LayerId,
    /// Content layer handle.
    pub content: LayerId,
    /// Backdrop layer handle.
    pub backdrop: LayerId,
}

impl PanelLayout for PanelFrame {
    fn width(&self) -> f32 {
        self.width
    }

    fn side(&self) -> Side {
        self.side
    }

    fn panel_layer(&self) -> LayerId {
        self.panel
    }

    fn content_layer(&self) -> LayerId {
        self.content
    }

    fn backdrop_layer(&self) -> LayerId {
        self.backdrop
    }
}
