//! Motion driver seam
//!
//! Components decide *what* to animate; a `MotionDriver` performs the
//! per-frame interpolation. On the web host this is the browser's animation
//! engine; [`MotionScheduler`](crate::scheduler::MotionScheduler) is the
//! in-process implementation.

use crate::transition::Transition;
use crate::visual::VisualState;

/// Host-assigned identity of an animated element
///
/// `element` is allocated by the host; `part` addresses sub-elements a
/// component animates on its own (text units, for instance). Part 0 is the
/// element itself, so parts of one element never alias another element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MotionTarget {
    element: u64,
    part: u64,
}

impl MotionTarget {
    pub const fn new(element: u64) -> Self {
        Self { element, part: 0 }
    }

    /// Sub-target `part` of the same element
    pub const fn part(self, part: u64) -> Self {
        Self {
            element: self.element,
            part,
        }
    }

    pub fn element(&self) -> u64 {
        self.element
    }

    pub fn part_index(&self) -> u64 {
        self.part
    }

    /// Whether this addresses the element itself rather than a part
    pub fn is_root(&self) -> bool {
        self.part == 0
    }
}

/// Accepts `{from, to, transition}` requests and produces frame updates
pub trait MotionDriver {
    /// Start animating `target` from `from` to `to`
    ///
    /// A new request for a target that is already animating replaces the
    /// running animation.
    fn animate(
        &mut self,
        target: MotionTarget,
        from: VisualState,
        to: VisualState,
        transition: Transition,
    );

    /// Jump `target` to `state` without animating
    fn set(&mut self, target: MotionTarget, state: VisualState);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_never_alias_neighbouring_elements() {
        let text = MotionTarget::new(1);
        let bar = MotionTarget::new(2);

        for part in 1..=64 {
            assert_ne!(text.part(part), bar);
            assert_eq!(text.part(part).element(), 1);
        }
        assert!(text.is_root());
        assert!(!text.part(3).is_root());
        assert_eq!(text.part(0), text);
    }

    #[test]
    fn test_extreme_element_ids() {
        let last = MotionTarget::new(u64::MAX);
        let unit = last.part(u64::MAX);
        assert_eq!(unit.element(), u64::MAX);
        assert_eq!(unit.part_index(), u64::MAX);
        assert_ne!(unit, MotionTarget::new(0));
    }
}
