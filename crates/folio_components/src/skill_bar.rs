//! Skill bar
//!
//! Label row (`name`, `level%`) above a track whose fill grows from 0% to
//! `level%` the first time the bar scrolls into view. Levels are not
//! clamped; a level of 120 fills to 120%.

use folio_animation::{
    Easing, MotionTarget, MotionVariant, RevealController, Transition, ViewportOptions,
};
use folio_core::{Color, ColorToken};

use crate::element::{Background, Element, MotionProps};

const TRACK_HEIGHT: f32 = 10.0;
const FILL_SECONDS: f32 = 1.0;

/// Animated skill level bar
#[derive(Clone, Debug, PartialEq)]
pub struct SkillBar {
    name: String,
    level: f32,
    color: ColorToken,
}

impl SkillBar {
    pub fn new(name: impl Into<String>, level: f32) -> Self {
        Self {
            name: name.into(),
            level,
            color: ColorToken::default(),
        }
    }

    /// Fill color (defaults to blue)
    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn fill_color(&self) -> Color {
        self.color.color()
    }

    /// Numeric label, e.g. `"85%"`
    pub fn level_label(&self) -> String {
        format!("{}%", self.level)
    }

    /// Target fill width as a percentage
    pub fn fill_target(&self) -> f32 {
        self.level
    }

    /// Target fill width as CSS, e.g. `"85%"`
    pub fn fill_width(&self) -> String {
        self.fill_variant().visible.width_css()
    }

    pub fn fill_variant(&self) -> MotionVariant {
        MotionVariant::grow_width(self.level)
    }

    pub fn fill_transition(&self) -> Transition {
        Transition::tween(FILL_SECONDS, Easing::EaseOut)
    }

    /// Viewport controller for the fill element
    pub fn controller(&self, target: MotionTarget) -> RevealController {
        RevealController::new(
            target,
            self.fill_variant(),
            self.fill_transition(),
            ViewportOptions::once(),
        )
    }

    pub fn build(&self) -> Element {
        let variant = self.fill_variant();

        let labels = Element::block()
            .child(Element::text(self.name.clone()))
            .child(Element::text(self.level_label()));

        let fill = Element::block()
            .height(TRACK_HEIGHT)
            .background(Background::Solid(self.fill_color()))
            .motion(MotionProps {
                initial: Some(variant.hidden),
                in_view: Some(variant.visible),
                transition: Some(self.fill_transition()),
                viewport: Some(ViewportOptions::once()),
                ..Default::default()
            });

        let track = Element::block()
            .height(TRACK_HEIGHT)
            .background(Background::Solid(ColorToken::Gray.color().with_alpha(0.2)))
            .clip()
            .child(fill);

        Element::block().child(labels).child(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::MotionScheduler;

    #[test]
    fn test_rust_scenario() {
        let bar = SkillBar::new("Rust", 85.0);

        assert_eq!(bar.name(), "Rust");
        assert_eq!(bar.level_label(), "85%");
        assert_eq!(bar.fill_width(), "85%");
        assert_eq!(bar.fill_color(), ColorToken::Blue.color());

        let tree = bar.build();
        assert_eq!(tree.text_content(), "Rust85%");
    }

    #[test]
    fn test_fill_target_equals_level() {
        for level in 0..=100 {
            let bar = SkillBar::new("x", level as f32);
            assert_eq!(bar.fill_target(), level as f32);
            assert_eq!(bar.fill_variant().visible.width, level as f32);
            assert_eq!(bar.fill_variant().hidden.width, 0.0);
            assert_eq!(bar.fill_width(), format!("{level}%"));
        }
    }

    #[test]
    fn test_out_of_range_level_passes_through() {
        assert_eq!(SkillBar::new("x", 130.0).fill_width(), "130%");
        assert_eq!(SkillBar::new("x", -10.0).fill_target(), -10.0);
    }

    #[test]
    fn test_fill_timing() {
        let bar = SkillBar::new("Go", 60.0).color(ColorToken::Green);
        assert_eq!(
            bar.fill_transition(),
            Transition::tween(1.0, Easing::EaseOut)
        );
        assert_eq!(bar.fill_color(), Color::from_hex(0x22C55E));

        let tree = bar.build();
        let fill = tree
            .find(|e| e.motion.is_some())
            .expect("fill element");
        let motion = fill.motion.as_ref().unwrap();
        assert_eq!(motion.viewport, Some(ViewportOptions::once()));
        assert_eq!(motion.in_view.map(|s| s.width), Some(60.0));
    }

    #[test]
    fn test_fill_plays_once() {
        let mut scheduler = MotionScheduler::new();
        let target = MotionTarget::new(3);
        let mut controller = SkillBar::new("Rust", 85.0).controller(target);
        controller.prepare(&mut scheduler);

        assert!(controller.on_intersection(true, &mut scheduler));
        for _ in 0..70 {
            scheduler.tick(1.0 / 60.0);
        }
        assert_eq!(scheduler.value(target).map(|s| s.width), Some(85.0));

        assert!(!controller.on_intersection(false, &mut scheduler));
        assert!(!controller.on_intersection(true, &mut scheduler));
        assert!(!scheduler.has_active_animations());
    }
}
