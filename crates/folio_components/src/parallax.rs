//! Parallax tilt
//!
//! Tilts its child in 3D toward the pointer. The pointer offset from the
//! element's center is normalized to `[-0.5, 0.5]` on each axis, trailed by
//! a soft spring, and mapped to rotations of at most `intensity` degrees.
//! When the pointer leaves, the tilt springs back to flat.
//!
//! ```text
//! Idle --enter--> Tracking(offset) --move--> Tracking(offset')
//!   ^                                              |
//!   +--------------------leave---------------------+
//! ```
//!
//! Pointer down/up events are ignored.

use folio_animation::{interpolate_range, Spring, SpringConfig, VisualState};
use folio_core::{Point, PointerEvent, Rect};

use crate::element::{Element, MotionProps};

/// Default maximum rotation (degrees)
pub const DEFAULT_INTENSITY: f32 = 10.0;

const PERSPECTIVE: f32 = 1000.0;
const POINTER_RANGE: [f32; 2] = [-0.5, 0.5];

/// Pointer offset from the element center, as a fraction of its size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const CENTER: PointerSample = PointerSample { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rotation around the horizontal (`rotate_x`) and vertical (`rotate_y`) axes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn visual_state(&self) -> VisualState {
        VisualState::IDENTITY.tilt(self.rotate_x, self.rotate_y)
    }
}

/// Normalize a pointer position against an element's bounds
///
/// Degenerate bounds yield the center sample.
pub fn normalize(pointer: Point, bounds: Rect) -> PointerSample {
    if bounds.is_empty() {
        tracing::warn!(?bounds, "parallax bounds have no area; treating pointer as centered");
        return PointerSample::CENTER;
    }
    let center = bounds.center();
    PointerSample::new(
        (pointer.x - center.x) / bounds.width(),
        (pointer.y - center.y) / bounds.height(),
    )
}

/// Target rotation for a pointer sample
///
/// Pointer below center tilts the top edge away (negative `rotate_x`);
/// pointer right of center turns the element right (positive `rotate_y`).
pub fn tilt_for(sample: PointerSample, intensity: f32) -> Tilt {
    Tilt {
        rotate_x: interpolate_range(sample.y, POINTER_RANGE, [intensity, -intensity]),
        rotate_y: interpolate_range(sample.x, POINTER_RANGE, [-intensity, intensity]),
    }
}

/// Pointer sample that `tilt_for` maps to `tilt`; center for zero intensity
fn sample_for(tilt: Tilt, intensity: f32) -> PointerSample {
    if intensity == 0.0 {
        return PointerSample::CENTER;
    }
    let span = 2.0 * intensity;
    PointerSample::new(tilt.rotate_y / span, -tilt.rotate_x / span)
}

/// One smoothing step: previous spring state moved `dt` toward `target`
pub fn smooth(previous: Spring, target: f32, dt: f32) -> Spring {
    previous.stepped_toward(target, dt)
}

/// Hover state of the wrapper
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ParallaxState {
    #[default]
    Idle,
    Tracking(PointerSample),
}

impl ParallaxState {
    /// Next state for a pointer event; `last` is the most recent sample
    /// (used on enter, before the first move arrives)
    pub fn on_event(
        &self,
        event: &PointerEvent,
        bounds: Rect,
        last: PointerSample,
    ) -> Option<ParallaxState> {
        match (self, event) {
            (ParallaxState::Idle, PointerEvent::Enter) => Some(ParallaxState::Tracking(last)),
            (_, PointerEvent::Move(point)) => {
                Some(ParallaxState::Tracking(normalize(*point, bounds)))
            }
            (ParallaxState::Tracking(_), PointerEvent::Leave) => Some(ParallaxState::Idle),
            _ => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, ParallaxState::Tracking(_))
    }
}

/// Pointer-driven 3D tilt wrapper
///
/// Owns its hover state and smoothing springs; nothing is shared between
/// instances.
#[derive(Clone, Debug)]
pub struct ParallaxWrapper {
    intensity: f32,
    child: Option<Element>,
    state: ParallaxState,
    /// Latest pointer sample; kept across leave/enter like a motion value
    pointer: PointerSample,
    follow_x: Spring,
    follow_y: Spring,
    reset_x: Spring,
    reset_y: Spring,
    tilt: Tilt,
}

impl Default for ParallaxWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallaxWrapper {
    pub fn new() -> Self {
        let follow = Spring::new(SpringConfig::follow(), 0.0).with_rest_thresholds(0.0005, 0.001);
        let reset = Spring::new(SpringConfig::stiff(), 0.0).with_rest_thresholds(0.01, 0.01);
        Self {
            intensity: DEFAULT_INTENSITY,
            child: None,
            state: ParallaxState::Idle,
            pointer: PointerSample::CENTER,
            follow_x: follow,
            follow_y: follow,
            reset_x: reset,
            reset_y: reset,
            tilt: Tilt::FLAT,
        }
    }

    /// Maximum rotation in degrees (not clamped)
    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.child = Some(child);
        self
    }

    pub fn state(&self) -> ParallaxState {
        self.state
    }

    pub fn current_intensity(&self) -> f32 {
        self.intensity
    }

    /// Smoothed tilt as of the last tick
    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    /// Unsmoothed tilt the wrapper is heading toward
    pub fn target_tilt(&self) -> Tilt {
        match self.state {
            ParallaxState::Tracking(sample) => tilt_for(sample, self.intensity),
            ParallaxState::Idle => Tilt::FLAT,
        }
    }

    /// Feed a pointer event with the element's current bounds
    pub fn handle_pointer(&mut self, event: &PointerEvent, bounds: Rect) {
        let Some(next) = self.state.on_event(event, bounds, self.pointer) else {
            return;
        };

        match (self.state, next) {
            (ParallaxState::Tracking(_), ParallaxState::Idle) => {
                tracing::debug!(tilt = ?self.tilt, "parallax pointer left; resetting");
                self.reset_x.snap_to(self.tilt.rotate_x);
                self.reset_y.snap_to(self.tilt.rotate_y);
                self.reset_x.set_target(0.0);
                self.reset_y.set_target(0.0);
            }
            (ParallaxState::Idle, ParallaxState::Tracking(_)) => {
                tracing::debug!(tilt = ?self.tilt, "parallax tracking pointer");
                // Resume from the tilt on screen, not from the stale follow position
                let resume = sample_for(self.tilt, self.intensity);
                self.follow_x.snap_to(resume.x);
                self.follow_y.snap_to(resume.y);
            }
            _ => {}
        }

        if let ParallaxState::Tracking(sample) = next {
            self.pointer = sample;
        }
        self.state = next;
    }

    /// Advance smoothing by `dt` seconds and return the new tilt
    pub fn tick(&mut self, dt: f32) -> Tilt {
        self.follow_x = smooth(self.follow_x, self.pointer.x, dt);
        self.follow_y = smooth(self.follow_y, self.pointer.y, dt);

        self.tilt = match self.state {
            ParallaxState::Tracking(_) => tilt_for(
                PointerSample::new(self.follow_x.value(), self.follow_y.value()),
                self.intensity,
            ),
            ParallaxState::Idle => {
                self.reset_x = smooth(self.reset_x, 0.0, dt);
                self.reset_y = smooth(self.reset_y, 0.0, dt);
                Tilt {
                    rotate_x: self.reset_x.value(),
                    rotate_y: self.reset_y.value(),
                }
            }
        };
        self.tilt
    }

    /// Whether the tilt has stopped moving
    pub fn is_settled(&self) -> bool {
        match self.state {
            ParallaxState::Tracking(_) => self.follow_x.is_settled() && self.follow_y.is_settled(),
            ParallaxState::Idle => self.reset_x.is_settled() && self.reset_y.is_settled(),
        }
    }

    pub fn build(&self) -> Element {
        let inner = Element::block()
            .preserve_3d()
            .motion(MotionProps {
                initial: Some(self.tilt.visual_state()),
                ..Default::default()
            })
            .child_opt(self.child.clone());

        Element::block().perspective(PERSPECTIVE).child(inner)
    }
}
