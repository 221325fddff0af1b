//! Pointer events and interaction state machines
//!
//! Components that react to the pointer keep a small state enum and feed
//! it events through [`StateTransitions`]:
//!
//! ```rust
//! use folio_core::{InteractionState, PointerEvent, StateTransitions};
//!
//! let state = InteractionState::Idle;
//! let state = state.apply(&PointerEvent::Enter);
//! assert_eq!(state, InteractionState::Hovered);
//! ```

use crate::geometry::Point;

/// Pointer event delivered by the host runtime
///
/// Positions are in the same coordinate space as the element bounds the
/// host reports alongside the event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter,
    Move(Point),
    Down,
    Up,
    Leave,
}

/// Trait for state enums driven by pointer events
pub trait StateTransitions: Clone + PartialEq + std::fmt::Debug {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: &PointerEvent) -> Option<Self>;

    /// Apply an event, staying in the current state when it does not transition
    fn apply(&self, event: &PointerEvent) -> Self {
        match self.on_event(event) {
            Some(next) => {
                tracing::trace!(from = ?self, to = ?next, ?event, "state transition");
                next
            }
            None => self.clone(),
        }
    }
}

/// Hover/press state for a single interactive element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

impl InteractionState {
    pub fn is_hovered(&self) -> bool {
        matches!(self, InteractionState::Hovered | InteractionState::Pressed)
    }
}

impl StateTransitions for InteractionState {
    fn on_event(&self, event: &PointerEvent) -> Option<Self> {
        use InteractionState::*;
        match (self, event) {
            (Idle, PointerEvent::Enter) => Some(Hovered),
            (Hovered, PointerEvent::Leave) => Some(Idle),

            (Hovered, PointerEvent::Down) => Some(Pressed),
            // Touch: no hover first
            (Idle, PointerEvent::Down) => Some(Pressed),

            (Pressed, PointerEvent::Up) => Some(Hovered),
            (Pressed, PointerEvent::Leave) => Some(Idle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_cycle() {
        let state = InteractionState::Idle
            .apply(&PointerEvent::Enter)
            .apply(&PointerEvent::Move(Point::new(3.0, 4.0)));
        assert_eq!(state, InteractionState::Hovered);

        let state = state.apply(&PointerEvent::Leave);
        assert_eq!(state, InteractionState::Idle);
    }

    #[test]
    fn test_press_and_release() {
        let state = InteractionState::Hovered.apply(&PointerEvent::Down);
        assert_eq!(state, InteractionState::Pressed);
        assert!(state.is_hovered());

        assert_eq!(state.apply(&PointerEvent::Up), InteractionState::Hovered);
        assert_eq!(state.apply(&PointerEvent::Leave), InteractionState::Idle);
    }

    #[test]
    fn test_ignored_events_keep_state() {
        assert_eq!(InteractionState::Idle.on_event(&PointerEvent::Up), None);
        assert_eq!(
            InteractionState::Idle.apply(&PointerEvent::Leave),
            InteractionState::Idle
        );
    }
}
