//! Viewport triggers
//!
//! - [`ViewportLatch`]: the fire-once / fire-every-time decision, kept
//!   separate from intersection detection so it can be tested on its own
//! - [`ViewportObserver`]: the host seam that reports when an element's
//!   bounds enter or leave the visible area
//! - [`ViewportRegistry`]: an in-process observer that intersects registered
//!   bounds with a scrolling viewport rect

use folio_core::Rect;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an observed element
    pub struct ObserverId;
}

/// Viewport trigger options attached to an element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportOptions {
    /// Play only on the first entry
    pub once: bool,
}

impl ViewportOptions {
    pub fn once() -> Self {
        Self { once: true }
    }

    pub fn repeat() -> Self {
        Self { once: false }
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self::once()
    }
}

/// Latch consulted before each entrance transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportLatch {
    once: bool,
    fired: bool,
}

impl ViewportLatch {
    pub fn new(options: ViewportOptions) -> Self {
        Self {
            once: options.once,
            fired: false,
        }
    }

    /// Record an entry; returns whether the entrance should play
    pub fn trigger(&mut self) -> bool {
        if self.is_spent() {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the element may return to its hidden state on exit
    pub fn allows_reset(&self) -> bool {
        !self.once
    }

    /// A once-latch that has already fired ignores everything after
    pub fn is_spent(&self) -> bool {
        self.once && self.fired
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Host service reporting viewport entry/exit of element bounds
pub trait ViewportObserver {
    /// Start observing an element with the given bounds
    fn observe(&mut self, bounds: Rect) -> ObserverId;

    /// Stop observing; returns false if the id was unknown
    fn unobserve(&mut self, id: ObserverId) -> bool;
}

/// One element crossing the viewport boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectionChange {
    pub id: ObserverId,
    pub in_view: bool,
}

struct Observed {
    bounds: Rect,
    in_view: bool,
}

/// Bounding-box intersection tracker
///
/// Elements start out of view; [`refresh`](Self::refresh) or
/// [`set_viewport`](Self::set_viewport) reports the ones that crossed.
pub struct ViewportRegistry {
    viewport: Rect,
    entries: SlotMap<ObserverId, Observed>,
}

impl ViewportRegistry {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            entries: SlotMap::with_key(),
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Move or resize the visible area and report crossings
    pub fn set_viewport(&mut self, viewport: Rect) -> Vec<IntersectionChange> {
        self.viewport = viewport;
        self.refresh()
    }

    /// Scroll the viewport vertically by `dy`
    pub fn scroll_by(&mut self, dy: f32) -> Vec<IntersectionChange> {
        let viewport = self.viewport.offset(0.0, dy);
        self.set_viewport(viewport)
    }

    /// Update an element's bounds after layout; no-op for unknown ids
    pub fn set_bounds(&mut self, id: ObserverId, bounds: Rect) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.bounds = bounds;
        }
    }

    pub fn is_in_view(&self, id: ObserverId) -> Option<bool> {
        self.entries.get(id).map(|e| e.in_view)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recompute intersections and report the elements whose state changed
    pub fn refresh(&mut self) -> Vec<IntersectionChange> {
        let viewport = self.viewport;
        let mut changes = Vec::new();

        for (id, entry) in self.entries.iter_mut() {
            let in_view = !entry.bounds.is_empty() && entry.bounds.intersects(&viewport);
            if in_view != entry.in_view {
                entry.in_view = in_view;
                changes.push(IntersectionChange { id, in_view });
            }
        }

        if !changes.is_empty() {
            tracing::trace!(count = changes.len(), "viewport intersections changed");
        }
        changes
    }
}

impl ViewportObserver for ViewportRegistry {
    fn observe(&mut self, bounds: Rect) -> ObserverId {
        if bounds.is_empty() {
            tracing::warn!(?bounds, "observing element with empty bounds; it never intersects");
        }
        let id = self.entries.insert(Observed {
            bounds,
            in_view: false,
        });
        tracing::debug!(?id, ?bounds, "viewport observe");
        id
    }

    fn unobserve(&mut self, id: ObserverId) -> bool {
        let removed = self.entries.remove(id).is_some();
        tracing::debug!(?id, removed, "viewport unobserve");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_latch_fires_once() {
        let mut latch = ViewportLatch::new(ViewportOptions::once());
        assert!(latch.trigger());
        assert!(latch.is_spent());
        assert!(!latch.trigger());
        assert!(!latch.allows_reset());
    }

    #[test]
    fn test_repeat_latch_fires_every_time() {
        let mut latch = ViewportLatch::new(ViewportOptions::repeat());
        for _ in 0..3 {
            assert!(latch.trigger());
        }
        assert!(latch.has_fired());
        assert!(!latch.is_spent());
        assert!(latch.allows_reset());
    }

    #[test]
    fn test_default_options_are_once() {
        assert!(ViewportOptions::default().once);
    }

    #[test]
    fn test_registry_reports_crossings() {
        let mut registry = ViewportRegistry::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let above = registry.observe(Rect::new(0.0, 100.0, 800.0, 200.0));
        let below = registry.observe(Rect::new(0.0, 900.0, 800.0, 200.0));

        let changes = registry.refresh();
        assert_eq!(
            changes,
            vec![IntersectionChange {
                id: above,
                in_view: true
            }]
        );

        // Nothing moved
        assert!(registry.refresh().is_empty());

        let changes = registry.scroll_by(500.0);
        assert_eq!(changes.len(), 2);
        assert!(changes.contains(&IntersectionChange {
            id: above,
            in_view: false
        }));
        assert!(changes.contains(&IntersectionChange {
            id: below,
            in_view: true
        }));
    }

    #[test]
    fn test_unobserve_stops_reports() {
        let mut registry = ViewportRegistry::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let id = registry.observe(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert!(registry.unobserve(id));
        assert!(!registry.unobserve(id));
        assert!(registry.refresh().is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_bounds_never_in_view() {
        let mut registry = ViewportRegistry::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let id = registry.observe(Rect::new(10.0, 10.0, 0.0, 0.0));
        assert!(registry.refresh().is_empty());
        assert_eq!(registry.is_in_view(id), Some(false));
    }
}
