#![forbid(unsafe_code)]

//! Named registry of transition variants.
//!
//! A panel owner selects a variant by name at panel-creation time. The
//! registry is an explicit value constructed at startup and injected where
//! needed — registration is never a module-load side effect, so there is no
//! process-wide implicit state to reason about.
//!
//! # Invariants
//!
//! 1. Each name maps to at most one factory; re-registering replaces.
//! 2. Factories are pure with respect to the registry: creating a controller
//!    never mutates registration state.
//!
//! # Example
//!
//! ```
//! use paneslide::registry::VariantRegistry;
//! use paneslide::motion::MotionConfig;
//! use paneslide::panel::{PanelFrame, Side};
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
//!
//! let controller = registry
//!     .create("overlay", &frame, MotionConfig::default())
//!     .unwrap();
//! assert!(controller.motion().is_some());
//! ```

use ahash::AHashMap;

use crate::controller::TransitionController;
use crate::error::{Result, TransitionError};
use crate::motion::MotionConfig;
use crate::panel::PanelLayout;
use crate::variant::{overlay_plan, push_plan, reveal_plan};

/// Builds a ready-to-drive controller for one panel.
pub type VariantFactory =
    Box<dyn Fn(&dyn PanelLayout, MotionConfig) -> Result<TransitionController>>;

/// Name → factory mapping for transition variants.
pub struct VariantRegistry {
    factories: AHashMap<String, VariantFactory>,
}

impl std::fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("variants", &self.factories.len())
            .finish()
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl VariantRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: AHashMap::new(),
        }
    }

    /// Create a registry with the three built-in variants registered:
    /// `"reveal"`, `"push"`, and `"overlay"`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register("reveal", |panel, config| {
            Ok(TransitionController::new(reveal_plan(panel)?, config))
        });
        reg.register("push", |panel, config| {
            Ok(TransitionController::new(push_plan(panel)?, config))
        });
        reg.register("overlay", |panel, config| {
            Ok(TransitionController::new(overlay_plan(panel)?, config))
        });
        reg
    }

    /// Register a variant factory under `name`.
    ///
    /// Replaces any previous factory for the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&dyn PanelLayout, MotionConfig) -> Result<TransitionController> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Remove a variant. Returns `true` if it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.factories.remove(name).is_some()
    }

    /// Whether a variant is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered variant names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Construct a controller for `panel` using the named variant.
    pub fn create(
        &self,
        name: &str,
        panel: &dyn PanelLayout,
        config: MotionConfig,
    ) -> Result<TransitionController> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| TransitionError::UnknownVariant {
                name: name.to_string(),
            })?;
        factory(panel, config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{PanelFrame, Side};
    use crate::tween::LayerId;

    fn frame() -> PanelFrame {
        PanelFrame {
            width: 250.0,
            side: Side::Leading,
            panel: LayerId(0),
            content: LayerId(1),
            backdrop: LayerId(2),
        }
    }

    #[test]
    fn builtins_are_registered() {
        let reg = VariantRegistry::with_builtins();
        for name in ["reveal", "push", "overlay"] {
            assert!(reg.contains(name), "{name} should be built in");
            assert!(reg.create(name, &frame(), MotionConfig::default()).is_ok());
        }
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let reg = VariantRegistry::with_builtins();
        let err = reg
            .create("slide-fade", &frame(), MotionConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError::UnknownVariant {
                name: "slide-fade".into()
            }
        );
    }

    #[test]
    fn custom_variant_registration() {
        let mut reg = VariantRegistry::new();
        assert!(!reg.contains("mirror"));
        reg.register("mirror", |panel, config| {
            Ok(TransitionController::new(
                crate::variant::reveal_plan(panel)?,
                config,
            ))
        });
        assert!(reg.contains("mirror"));
        assert!(reg.create("mirror", &frame(), MotionConfig::default()).is_ok());
    }

    #[test]
    fn invalid_geometry_propagates_from_factory() {
        let reg = VariantRegistry::with_builtins();
        let bad = PanelFrame {
            width: -1.0,
            ..frame()
        };
        let err = reg.create("push", &bad, MotionConfig::default()).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidWidth { .. }));
    }

    #[test]
    fn unregister_removes_variant() {
        let mut reg = VariantRegistry::with_builtins();
        assert!(reg.unregister("push"));
        assert!(!reg.unregister("push"));
        assert!(!reg.contains("push"));
        assert_eq!(reg.names().count(), 2);
    }
}
