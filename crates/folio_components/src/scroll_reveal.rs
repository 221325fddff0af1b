//! Scroll-triggered reveal wrapper
//!
//! Wraps children in an entrance chosen from a fixed preset table. Every
//! preset fades in from opacity 0 and converges on the identity state; the
//! presets differ only in the offset, scale and rotation they start from.

use std::fmt;
use std::str::FromStr;

use folio_animation::{
    Easing, MotionTarget, MotionVariant, RevealController, Transition, ViewportOptions,
    VisualState,
};
use serde::{Deserialize, Serialize};

use crate::element::{Element, MotionProps};
use crate::error::FolioError;

/// Default entrance duration (seconds)
pub const DEFAULT_DURATION: f32 = 0.5;

/// Entrance style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollAnimation {
    #[default]
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
    Rotate,
}

impl ScrollAnimation {
    pub const ALL: [ScrollAnimation; 7] = [
        ScrollAnimation::Fade,
        ScrollAnimation::SlideUp,
        ScrollAnimation::SlideDown,
        ScrollAnimation::SlideLeft,
        ScrollAnimation::SlideRight,
        ScrollAnimation::Scale,
        ScrollAnimation::Rotate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScrollAnimation::Fade => "fade",
            ScrollAnimation::SlideUp => "slide-up",
            ScrollAnimation::SlideDown => "slide-down",
            ScrollAnimation::SlideLeft => "slide-left",
            ScrollAnimation::SlideRight => "slide-right",
            ScrollAnimation::Scale => "scale",
            ScrollAnimation::Rotate => "rotate",
        }
    }

    pub fn preset(&self) -> &'static RevealPreset {
        &REVEAL_PRESETS[*self as usize]
    }
}

impl fmt::Display for ScrollAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScrollAnimation {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScrollAnimation::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| FolioError::UnknownAnimation {
                kind: "scroll",
                name: s.to_string(),
            })
    }
}

/// Hidden-state deltas of an entrance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPreset {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Degrees
    pub rotate: f32,
}

impl RevealPreset {
    const fn new(x: f32, y: f32, scale: f32, rotate: f32) -> Self {
        Self {
            x,
            y,
            scale,
            rotate,
        }
    }

    pub fn hidden_state(&self) -> VisualState {
        VisualState::IDENTITY
            .opacity(0.0)
            .x(self.x)
            .y(self.y)
            .scale(self.scale)
            .rotate(self.rotate)
    }
}

/// Indexed by `ScrollAnimation as usize`
const REVEAL_PRESETS: [RevealPreset; 7] = [
    RevealPreset::new(0.0, 0.0, 1.0, 0.0),   // fade
    RevealPreset::new(0.0, 50.0, 1.0, 0.0),  // slide-up
    RevealPreset::new(0.0, -50.0, 1.0, 0.0), // slide-down
    RevealPreset::new(50.0, 0.0, 1.0, 0.0),  // slide-left
    RevealPreset::new(-50.0, 0.0, 1.0, 0.0), // slide-right
    RevealPreset::new(0.0, 0.0, 0.9, 0.0),   // scale
    RevealPreset::new(0.0, 0.0, 1.0, -5.0),  // rotate
];

/// Scroll reveal wrapper component
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollReveal {
    animation: ScrollAnimation,
    duration: f32,
    delay: f32,
    once: bool,
    class: Option<String>,
    children: Vec<Element>,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self {
            animation: ScrollAnimation::default(),
            duration: DEFAULT_DURATION,
            delay: 0.0,
            once: true,
            class: None,
            children: Vec::new(),
        }
    }

    pub fn animation(mut self, animation: ScrollAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Play only on first entry (default) or on every entry
    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn variant(&self) -> MotionVariant {
        MotionVariant::reveal_from(self.animation.preset().hidden_state())
    }

    pub fn transition(&self) -> Transition {
        Transition::tween(self.duration, Easing::EaseOut).with_delay(self.delay)
    }

    pub fn viewport(&self) -> ViewportOptions {
        ViewportOptions { once: self.once }
    }

    pub fn controller(&self, target: MotionTarget) -> RevealController {
        RevealController::new(target, self.variant(), self.transition(), self.viewport())
    }

    pub fn build(&self) -> Element {
        let variant = self.variant();
        Element::block()
            .class_opt(self.class.clone())
            .motion(MotionProps {
                initial: Some(variant.hidden),
                in_view: Some(variant.visible),
                transition: Some(self.transition()),
                viewport: Some(self.viewport()),
                ..Default::default()
            })
            .children(self.children.iter().cloned())
    }
}
