//! Viewport-triggered reveal
//!
//! A `RevealController` owns one element's entrance: the variant it plays,
//! the transition timing, and the latch deciding whether a viewport entry
//! may play it.
//!
//! ```rust
//! use folio_animation::*;
//!
//! let mut reveal = RevealController::new(
//!     MotionTarget::new(1),
//!     MotionVariant::fade(),
//!     Transition::tween(0.5, Easing::EaseOut),
//!     ViewportOptions::once(),
//! );
//! let mut scheduler = MotionScheduler::new();
//! reveal.prepare(&mut scheduler);
//!
//! assert!(reveal.on_intersection(true, &mut scheduler));
//! assert!(!reveal.on_intersection(false, &mut scheduler));
//! assert_eq!(reveal.phase(), RevealPhase::Visible);
//! ```

use folio_core::Rect;

use crate::driver::{MotionDriver, MotionTarget};
use crate::transition::Transition;
use crate::viewport::{ObserverId, ViewportLatch, ViewportObserver, ViewportOptions};
use crate::visual::MotionVariant;

/// Which end of its variant an element is at (or heading to)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Visible,
}

/// Entrance controller for a single element
#[derive(Clone, Debug)]
pub struct RevealController {
    target: MotionTarget,
    variant: MotionVariant,
    transition: Transition,
    latch: ViewportLatch,
    phase: RevealPhase,
    observer: Option<ObserverId>,
}

impl RevealController {
    pub fn new(
        target: MotionTarget,
        variant: MotionVariant,
        transition: Transition,
        options: ViewportOptions,
    ) -> Self {
        Self {
            target,
            variant,
            transition,
            latch: ViewportLatch::new(options),
            phase: RevealPhase::Hidden,
            observer: None,
        }
    }

    pub fn target(&self) -> MotionTarget {
        self.target
    }

    pub fn variant(&self) -> &MotionVariant {
        &self.variant
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn latch(&self) -> &ViewportLatch {
        &self.latch
    }

    pub fn observer_id(&self) -> Option<ObserverId> {
        self.observer
    }

    /// Put the element in its hidden state before the first frame
    pub fn prepare(&self, driver: &mut impl MotionDriver) {
        driver.set(self.target, self.variant.hidden);
    }

    /// Register the element with the viewport observer
    ///
    /// Mounting twice replaces the previous registration.
    pub fn mount(&mut self, bounds: Rect, observer: &mut impl ViewportObserver) -> ObserverId {
        if let Some(previous) = self.observer.take() {
            observer.unobserve(previous);
        }
        let id = observer.observe(bounds);
        self.observer = Some(id);
        id
    }

    /// Release the viewport registration (component teardown)
    pub fn unmount(&mut self, observer: &mut impl ViewportObserver) {
        if let Some(id) = self.observer.take() {
            observer.unobserve(id);
            tracing::debug!(motion_target = ?self.target, "reveal unmounted");
        }
    }

    /// Handle a viewport crossing; returns whether an animation started
    pub fn on_intersection(&mut self, in_view: bool, driver: &mut impl MotionDriver) -> bool {
        match (in_view, self.phase) {
            (true, RevealPhase::Hidden) => {
                if !self.latch.trigger() {
                    return false;
                }
                tracing::debug!(
                    motion_target = ?self.target,
                    once = self.latch.is_spent(),
                    "reveal entering"
                );
                self.phase = RevealPhase::Visible;
                driver.animate(
                    self.target,
                    self.variant.hidden,
                    self.variant.visible,
                    self.transition,
                );
                true
            }
            (false, RevealPhase::Visible) if self.latch.allows_reset() => {
                tracing::debug!(motion_target = ?self.target, "reveal resetting");
                self.phase = RevealPhase::Hidden;
                driver.animate(
                    self.target,
                    self.variant.visible,
                    self.variant.hidden,
                    self.transition.with_delay(0.0),
                );
                true
            }
            _ => false,
        }
    }
}
