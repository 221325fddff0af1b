//! Animated text
//!
//! Splits a string into units (characters, words, or the whole string) and
//! gives each unit an entrance. The animation mode selects a preset from a
//! fixed table; the preset decides tokenization and unit timing.
//!
//! # Example
//!
//! ```rust
//! use folio_components::{TextAnimation, TextAnimator};
//!
//! let reveal = TextAnimator::new("Hi there")
//!     .animation(TextAnimation::Bounce)
//!     .delay(0.2)
//!     .derive();
//!
//! assert_eq!(reveal.units.len(), 2);
//! assert!((reveal.start_time(1).unwrap() - 0.25).abs() < 1e-6);
//! assert_eq!(reveal.start_time(2), None);
//! ```

use std::fmt;
use std::str::FromStr;

use folio_animation::{
    Easing, MotionDriver, MotionTarget, MotionVariant, Orchestration, RevealController,
    SpringConfig, Transition, ViewportOptions, VisualState,
};
use serde::{Deserialize, Serialize};

use crate::element::{Element, MotionProps};
use crate::error::FolioError;

/// Non-breaking space used in place of whitespace characters
pub const NBSP: char = '\u{00A0}';

/// Default per-unit stagger interval (seconds)
pub const DEFAULT_DURATION: f32 = 0.05;

/// Right margin between word units
const WORD_GAP: f32 = 4.0;

/// Text entrance mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAnimation {
    /// Characters rise one after another
    Wave,
    /// The whole line is uncovered left to right
    Typewriter,
    /// Words drop in on a bouncy spring
    Bounce,
    /// Words rise in on a soft spring
    #[default]
    Stagger,
}

impl TextAnimation {
    pub const ALL: [TextAnimation; 4] = [
        TextAnimation::Wave,
        TextAnimation::Typewriter,
        TextAnimation::Bounce,
        TextAnimation::Stagger,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TextAnimation::Wave => "wave",
            TextAnimation::Typewriter => "typewriter",
            TextAnimation::Bounce => "bounce",
            TextAnimation::Stagger => "stagger",
        }
    }

    /// Preset record for this mode
    pub fn preset(&self) -> &'static TextPreset {
        &TEXT_PRESETS[*self as usize]
    }
}

impl fmt::Display for TextAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextAnimation {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextAnimation::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| FolioError::UnknownAnimation {
                kind: "text",
                name: s.to_string(),
            })
    }
}

/// How the text is split into animated units
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tokenization {
    /// One unit per `char`; whitespace becomes a non-breaking space
    Characters,
    /// Split on the space character
    Words,
    /// The whole string as a single unit
    Whole,
}

/// Timing of each unit
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnitTiming {
    /// Spring entrance. With `own_delay`, unit `i` waits `i * duration`
    /// itself; otherwise the container's stagger schedule starts it.
    Spring {
        config: SpringConfig,
        own_delay: bool,
    },
    /// Width clip reveal lasting `seconds_per_char` per character
    Clip {
        seconds_per_char: f32,
        easing: Easing,
    },
}

/// Immutable bundle of parameters selected by a [`TextAnimation`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPreset {
    pub tokenization: Tokenization,
    pub timing: UnitTiming,
    /// Whether a fading container orchestrates the units
    pub orchestrated: bool,
}

/// Indexed by `TextAnimation as usize`
const TEXT_PRESETS: [TextPreset; 4] = [
    // Wave
    TextPreset {
        tokenization: Tokenization::Characters,
        timing: UnitTiming::Spring {
            config: SpringConfig::entrance(),
            own_delay: true,
        },
        orchestrated: true,
    },
    // Typewriter
    TextPreset {
        tokenization: Tokenization::Whole,
        timing: UnitTiming::Clip {
            seconds_per_char: 0.06,
            easing: Easing::Linear,
        },
        orchestrated: false,
    },
    // Bounce
    TextPreset {
        tokenization: Tokenization::Words,
        timing: UnitTiming::Spring {
            config: SpringConfig::bouncy(),
            own_delay: false,
        },
        orchestrated: true,
    },
    // Stagger
    TextPreset {
        tokenization: Tokenization::Words,
        timing: UnitTiming::Spring {
            config: SpringConfig::entrance(),
            own_delay: false,
        },
        orchestrated: true,
    },
];

/// One animated piece of text
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedUnit {
    pub index: usize,
    pub content: String,
    pub variant: MotionVariant,
    /// Unit transition as declared on the unit itself
    pub transition: Transition,
    /// Effective start time after container orchestration (seconds)
    pub start: f32,
}

/// Derived entrance for a whole text
#[derive(Clone, Debug, PartialEq)]
pub struct TextReveal {
    pub animation: TextAnimation,
    /// Container stagger schedule, absent for typewriter
    pub container: Option<Orchestration>,
    pub container_variant: MotionVariant,
    pub units: Vec<AnimatedUnit>,
}

impl TextReveal {
    /// Effective start time of unit `index`, `None` past the last unit
    pub fn start_time(&self, index: usize) -> Option<f32> {
        self.units.get(index).map(|unit| unit.start)
    }

    pub fn contents(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.content.as_str()).collect()
    }

    /// Motion target of unit `index`: a part of the container's element
    pub fn unit_target(base: MotionTarget, index: usize) -> MotionTarget {
        base.part((index as u64).saturating_add(1))
    }

    /// Start every unit's entrance with its effective start time
    pub fn play_units(&self, base: MotionTarget, driver: &mut impl MotionDriver) {
        for unit in &self.units {
            driver.animate(
                Self::unit_target(base, unit.index),
                unit.variant.hidden,
                unit.variant.visible,
                unit.transition.with_delay(unit.start),
            );
        }
    }
}

/// Animated text component
#[derive(Clone, Debug, PartialEq)]
pub struct TextAnimator {
    text: String,
    animation: TextAnimation,
    delay: f32,
    duration: f32,
    class: Option<String>,
}

impl TextAnimator {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            animation: TextAnimation::default(),
            delay: 0.0,
            duration: DEFAULT_DURATION,
            class: None,
        }
    }

    pub fn animation(mut self, animation: TextAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Delay before the first unit (seconds)
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Interval between consecutive units (seconds)
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Extra class names passed through to the container
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn tokens(&self, tokenization: Tokenization) -> Vec<String> {
        match tokenization {
            Tokenization::Characters => self
                .text
                .chars()
                .map(|c| if c.is_whitespace() { NBSP } else { c })
                .map(String::from)
                .collect(),
            Tokenization::Words => self.text.split(' ').map(str::to_string).collect(),
            Tokenization::Whole => vec![self.text.clone()],
        }
    }

    /// Derive the per-unit entrance
    pub fn derive(&self) -> TextReveal {
        let preset = self.animation.preset();
        let container = preset
            .orchestrated
            .then(|| Orchestration::new(self.duration, self.delay));

        let units = self
            .tokens(preset.tokenization)
            .into_iter()
            .enumerate()
            .map(|(index, content)| {
                let (variant, transition, start) = match preset.timing {
                    UnitTiming::Spring { config, own_delay } => {
                        let transition = if own_delay {
                            Transition::spring(config).with_delay(index as f32 * self.duration)
                        } else {
                            Transition::spring(config)
                        };
                        let start = match container {
                            Some(orchestration) if !own_delay => orchestration.start_time(index),
                            _ => transition.delay(),
                        };
                        (MotionVariant::rise(), transition, start)
                    }
                    UnitTiming::Clip {
                        seconds_per_char,
                        easing,
                    } => {
                        let duration = self.text.chars().count() as f32 * seconds_per_char;
                        let transition = Transition::Tween {
                            duration,
                            delay: self.delay,
                            easing,
                        };
                        (MotionVariant::grow_width(100.0), transition, self.delay)
                    }
                };

                AnimatedUnit {
                    index,
                    content,
                    variant,
                    transition,
                    start,
                }
            })
            .collect();

        let container_variant = if preset.orchestrated {
            MotionVariant::fade()
        } else {
            MotionVariant::new(VisualState::IDENTITY, VisualState::IDENTITY)
        };

        TextReveal {
            animation: self.animation,
            container,
            container_variant,
            units,
        }
    }

    /// Viewport controller for this text, with units targeted after `base`
    pub fn controller(&self, base: MotionTarget) -> TextRevealController {
        let reveal = self.derive();
        let container = RevealController::new(
            base,
            reveal.container_variant,
            Transition::default(),
            ViewportOptions::once(),
        );
        TextRevealController { reveal, container }
    }

    /// Build the rendered element tree
    pub fn build(&self) -> Element {
        let reveal = self.derive();
        let once = Some(ViewportOptions::once());

        if self.animation == TextAnimation::Typewriter {
            let unit = &reveal.units[0];
            let clip = Element::inline()
                .clip()
                .nowrap()
                .motion(MotionProps {
                    initial: Some(unit.variant.hidden),
                    in_view: Some(unit.variant.visible),
                    transition: Some(unit.transition),
                    viewport: once,
                    ..Default::default()
                })
                .child(Element::text(unit.content.clone()));

            return Element::inline()
                .class_opt(self.class.clone())
                .motion(MotionProps {
                    initial: Some(reveal.container_variant.hidden),
                    in_view: Some(reveal.container_variant.visible),
                    viewport: once,
                    ..Default::default()
                })
                .child(clip);
        }

        let gap = match self.animation.preset().tokenization {
            Tokenization::Words => WORD_GAP,
            _ => 0.0,
        };
        let units = reveal.units.iter().map(|unit| {
            Element::inline()
                .margin_right(gap)
                .motion(MotionProps {
                    initial: Some(unit.variant.hidden),
                    in_view: Some(unit.variant.visible),
                    transition: Some(unit.transition),
                    ..Default::default()
                })
                .child(Element::text(unit.content.clone()))
        });

        Element::inline()
            .class_opt(self.class.clone())
            .motion(MotionProps {
                initial: Some(reveal.container_variant.hidden),
                in_view: Some(reveal.container_variant.visible),
                viewport: once,
                orchestration: reveal.container,
                ..Default::default()
            })
            .children(units)
    }
}

/// Plays a [`TextReveal`] the first time the text enters the viewport
#[derive(Clone, Debug)]
pub struct TextRevealController {
    reveal: TextReveal,
    container: RevealController,
}

impl TextRevealController {
    pub fn reveal(&self) -> &TextReveal {
        &self.reveal
    }

    pub fn container(&self) -> &RevealController {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut RevealController {
        &mut self.container
    }

    /// Put the container and every unit in its hidden state
    pub fn prepare(&self, driver: &mut impl MotionDriver) {
        self.container.prepare(driver);
        let base = self.container.target();
        for unit in &self.reveal.units {
            driver.set(TextReveal::unit_target(base, unit.index), unit.variant.hidden);
        }
    }

    /// Handle a viewport crossing; units play only on the first entry
    pub fn on_intersection(&mut self, in_view: bool, driver: &mut impl MotionDriver) -> bool {
        if !self.container.on_intersection(in_view, driver) {
            return false;
        }
        tracing::debug!(
            animation = %self.reveal.animation,
            units = self.reveal.units.len(),
            "text reveal playing"
        );
        self.reveal.play_units(self.container.target(), driver);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::{MotionScheduler, RevealPhase};

    #[test]
    fn test_presets_are_indexed_by_mode() {
        assert_eq!(
            TextAnimation::Wave.preset().tokenization,
            Tokenization::Characters
        );
        assert_eq!(
            TextAnimation::Typewriter.preset().tokenization,
            Tokenization::Whole
        );
        assert_eq!(
            TextAnimation::Bounce.preset().timing,
            UnitTiming::Spring {
                config: SpringConfig::bouncy(),
                own_delay: false
            }
        );
        assert_eq!(
            TextAnimation::Stagger.preset().timing,
            UnitTiming::Spring {
                config: SpringConfig::entrance(),
                own_delay: false
            }
        );
    }

    #[test]
    fn test_stagger_scenario() {
        let reveal = TextAnimator::new("Hello World").derive();

        assert_eq!(reveal.animation, TextAnimation::Stagger);
        assert_eq!(reveal.contents(), vec!["Hello", "World"]);
        assert_eq!(reveal.container, Some(Orchestration::new(0.05, 0.0)));
        for unit in &reveal.units {
            assert_eq!(unit.transition, Transition::spring(SpringConfig::entrance()));
            assert_eq!(unit.variant, MotionVariant::rise());
        }
        assert_eq!(reveal.start_time(0), Some(0.0));
        assert!((reveal.start_time(1).unwrap() - 0.05).abs() < 1e-6);
        assert_eq!(reveal.start_time(2), None);
    }

    #[test]
    fn test_word_count_matches_space_split() {
        for text in ["one", "two words", "a  double gap", " leading", ""] {
            for mode in [TextAnimation::Bounce, TextAnimation::Stagger] {
                let reveal = TextAnimator::new(text).animation(mode).derive();
                assert_eq!(reveal.units.len(), text.split(' ').count(), "{text:?}");
            }
        }
    }

    #[test]
    fn test_wave_counts_every_char() {
        let text = "Hi you\tthere ü";
        let reveal = TextAnimator::new(text)
            .animation(TextAnimation::Wave)
            .derive();

        assert_eq!(reveal.units.len(), text.chars().count());
        assert_eq!(reveal.units[2].content, NBSP.to_string());
        assert_eq!(reveal.units[6].content, NBSP.to_string());
        assert_eq!(reveal.units.last().unwrap().content, "ü");
    }

    #[test]
    fn test_wave_units_carry_their_own_delay() {
        let reveal = TextAnimator::new("abc")
            .animation(TextAnimation::Wave)
            .duration(0.1)
            .delay(5.0)
            .derive();

        for (i, unit) in reveal.units.iter().enumerate() {
            assert!((unit.transition.delay() - i as f32 * 0.1).abs() < 1e-6);
            assert_eq!(unit.start, unit.transition.delay());
            assert_eq!(
                unit.transition.spring_config(),
                Some(SpringConfig::entrance())
            );
        }
    }

    #[test]
    fn test_typewriter_clip() {
        let reveal = TextAnimator::new("Hello World")
            .animation(TextAnimation::Typewriter)
            .delay(0.3)
            .derive();

        assert_eq!(reveal.container, None);
        assert_eq!(reveal.contents(), vec!["Hello World"]);

        let unit = &reveal.units[0];
        assert_eq!(unit.variant.hidden.width, 0.0);
        assert_eq!(unit.variant.visible.width, 100.0);
        // Hidden means clipped, not faded
        assert_eq!(unit.variant.hidden.opacity, 1.0);

        match unit.transition {
            Transition::Tween {
                duration,
                delay,
                easing,
            } => {
                assert!((duration - 11.0 * 0.06).abs() < 1e-5);
                assert_eq!(delay, 0.3);
                assert_eq!(easing, Easing::Linear);
            }
            other => panic!("expected tween, got {other:?}"),
        }
    }

    #[test]
    fn test_bounce_uses_container_schedule() {
        let reveal = TextAnimator::new("a b c")
            .animation(TextAnimation::Bounce)
            .duration(0.2)
            .delay(1.0)
            .derive();

        assert_eq!(reveal.container, Some(Orchestration::new(0.2, 1.0)));
        let starts: Vec<f32> = (0..3).filter_map(|i| reveal.start_time(i)).collect();
        assert!((starts[0] - 1.0).abs() < 1e-6);
        assert!((starts[1] - 1.2).abs() < 1e-6);
        assert!((starts[2] - 1.4).abs() < 1e-6);
        assert!(reveal.units.iter().all(|u| u.transition.delay() == 0.0));
    }

    #[test]
    fn test_reveal_order_is_left_to_right() {
        for mode in TextAnimation::ALL {
            let reveal = TextAnimator::new("the quick brown fox")
                .animation(mode)
                .derive();
            for pair in reveal.units.windows(2) {
                assert!(pair[0].start <= pair[1].start, "{mode}");
            }
        }
    }

    #[test]
    fn test_derivation_is_idempotent() {
        for mode in TextAnimation::ALL {
            let animator = TextAnimator::new("Same input, same output")
                .animation(mode)
                .delay(0.1)
                .duration(0.07);
            assert_eq!(animator.derive(), animator.derive());
        }
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in TextAnimation::ALL {
            assert_eq!(mode.name().parse::<TextAnimation>().unwrap(), mode);
        }
        let err = "shake".parse::<TextAnimation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown text animation `shake`");
    }

    #[test]
    fn test_build_word_tree() {
        let tree = TextAnimator::new("Hello World").class("hero").build();

        assert_eq!(tree.class.as_deref(), Some("hero"));
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.text_content(), "HelloWorld");

        let motion = tree.motion.as_ref().unwrap();
        assert_eq!(motion.viewport, Some(ViewportOptions::once()));
        assert_eq!(motion.orchestration, Some(Orchestration::new(0.05, 0.0)));
        assert!(tree.children.iter().all(|c| c.style.margin_right == 4.0));
    }

    #[test]
    fn test_build_typewriter_tree() {
        let tree = TextAnimator::new("abc")
            .animation(TextAnimation::Typewriter)
            .build();

        let clip = &tree.children[0];
        assert!(clip.style.clip && clip.style.nowrap);
        let motion = clip.motion.as_ref().unwrap();
        assert_eq!(motion.initial.map(|s| s.width), Some(0.0));
        assert_eq!(motion.in_view.map(|s| s.width), Some(100.0));
        assert_eq!(motion.viewport, Some(ViewportOptions::once()));
    }

    #[test]
    fn test_controller_plays_once() {
        let mut scheduler = MotionScheduler::new();
        let mut controller = TextAnimator::new("Hello World").controller(MotionTarget::new(100));
        controller.prepare(&mut scheduler);

        let first = TextReveal::unit_target(MotionTarget::new(100), 0);
        assert_eq!(scheduler.value(first), Some(MotionVariant::rise().hidden));

        assert!(controller.on_intersection(true, &mut scheduler));
        assert_eq!(scheduler.animation_count(), 3);

        for _ in 0..600 {
            scheduler.tick(1.0 / 60.0);
        }
        assert_eq!(scheduler.value(first), Some(VisualState::IDENTITY));

        assert!(!controller.on_intersection(false, &mut scheduler));
        assert!(!controller.on_intersection(true, &mut scheduler));
        assert_eq!(controller.container().phase(), RevealPhase::Visible);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_units_rise_in_every_word_and_char_mode() {
        for mode in [TextAnimation::Wave, TextAnimation::Bounce, TextAnimation::Stagger] {
            let reveal = TextAnimator::new("Hi there").animation(mode).derive();
            assert!(!reveal.units.is_empty());
            for unit in &reveal.units {
                assert_eq!(unit.variant, MotionVariant::rise(), "{mode} unit {}", unit.index);
                assert_eq!(unit.variant.hidden.opacity, 0.0);
                assert_eq!(unit.variant.hidden.y, 20.0);
            }
        }
    }

    #[test]
    fn test_wave_placeholders_rise_like_letters() {
        let reveal = TextAnimator::new("a b")
            .animation(TextAnimation::Wave)
            .derive();
        let gap = &reveal.units[1];
        assert_eq!(gap.content, NBSP.to_string());
        assert_eq!(gap.variant, reveal.units[0].variant);
        assert_eq!(gap.variant, MotionVariant::rise());
    }

    #[test]
    fn test_bounce_units_use_bouncy_spring() {
        let reveal = TextAnimator::new("one two three")
            .animation(TextAnimation::Bounce)
            .derive();
        assert_eq!(reveal.units.len(), 3);
        for unit in &reveal.units {
            assert_eq!(unit.transition.spring_config(), Some(SpringConfig::bouncy()));
        }
    }

    #[test]
    fn test_unit_targets_stay_inside_their_element() {
        let base = MotionTarget::new(1);
        let neighbour = MotionTarget::new(2);
        for index in 0..32 {
            let target = TextReveal::unit_target(base, index);
            assert_eq!(target.element(), 1);
            assert_ne!(target, base);
            assert_ne!(target, neighbour);
        }
        assert_eq!(
            TextReveal::unit_target(MotionTarget::new(u64::MAX), usize::MAX).element(),
            u64::MAX
        );
    }

    #[test]
    fn test_reveal_leaves_adjacent_targets_alone() {
        use crate::skill_bar::SkillBar;

        let mut scheduler = MotionScheduler::new();
        let mut text = TextAnimator::new("Hello World").controller(MotionTarget::new(1));
        let mut bar = SkillBar::new("Rust", 85.0).controller(MotionTarget::new(2));
        text.prepare(&mut scheduler);
        bar.prepare(&mut scheduler);

        bar.on_intersection(true, &mut scheduler);
        for _ in 0..90 {
            scheduler.tick(1.0 / 60.0);
        }
        assert_eq!(scheduler.value(MotionTarget::new(2)).map(|s| s.width), Some(85.0));

        text.on_intersection(true, &mut scheduler);
        for _ in 0..600 {
            scheduler.tick(1.0 / 60.0);
        }
        assert_eq!(scheduler.value(MotionTarget::new(2)).map(|s| s.width), Some(85.0));
        assert_eq!(
            scheduler.value(TextReveal::unit_target(MotionTarget::new(1), 0)),
            Some(VisualState::IDENTITY)
        );
    }
}
