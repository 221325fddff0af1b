//! Transition timing
//!
//! All times are in seconds.

use crate::easing::Easing;
use crate::spring::SpringConfig;

/// How an element moves from one visual state to the next
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Physics-driven; finishes when the spring settles
    Spring { config: SpringConfig, delay: f32 },
    /// Fixed-duration curve
    Tween {
        duration: f32,
        delay: f32,
        easing: Easing,
    },
}

impl Transition {
    pub fn spring(config: SpringConfig) -> Self {
        Transition::Spring { config, delay: 0.0 }
    }

    pub fn tween(duration: f32, easing: Easing) -> Self {
        Transition::Tween {
            duration,
            delay: 0.0,
            easing,
        }
    }

    /// Same transition starting `delay` seconds later
    pub fn with_delay(self, delay: f32) -> Self {
        match self {
            Transition::Spring { config, .. } => Transition::Spring { config, delay },
            Transition::Tween {
                duration, easing, ..
            } => Transition::Tween {
                duration,
                delay,
                easing,
            },
        }
    }

    pub fn delay(&self) -> f32 {
        match self {
            Transition::Spring { delay, .. } | Transition::Tween { delay, .. } => *delay,
        }
    }

    pub fn spring_config(&self) -> Option<SpringConfig> {
        match self {
            Transition::Spring { config, .. } => Some(*config),
            Transition::Tween { .. } => None,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Transition::tween(0.3, Easing::EaseInOut)
    }
}

/// Timing a container applies to its animated children
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orchestration {
    /// Interval between consecutive children
    pub stagger_children: f32,
    /// Delay before the first child
    pub delay_children: f32,
}

impl Orchestration {
    pub fn new(stagger_children: f32, delay_children: f32) -> Self {
        Self {
            stagger_children,
            delay_children,
        }
    }

    /// Start time of the child at `index`
    ///
    /// Only applies to children whose transition leaves the delay to the
    /// container; a child with its own delay starts at that delay.
    pub fn start_time(&self, index: usize) -> f32 {
        self.delay_children + index as f32 * self.stagger_children
    }
}
