//! Site-wide motion defaults
//!
//! Loaded from a TOML file such as `motion.toml`:
//!
//! ```toml
//! [text]
//! animation = "wave"
//! duration = 0.08
//!
//! [scroll]
//! animation = "slide-up"
//! once = false
//!
//! [parallax]
//! intensity = 6.0
//!
//! [skill_bar]
//! color = "purple"
//! ```
//!
//! Every section and field is optional; missing values fall back to the
//! component defaults.

use std::fs;
use std::path::Path;

use folio_core::ColorToken;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parallax::{ParallaxWrapper, DEFAULT_INTENSITY};
use crate::scroll_reveal::{self, ScrollAnimation, ScrollReveal};
use crate::skill_bar::SkillBar;
use crate::text_animator::{self, TextAnimation, TextAnimator};

/// Defaults applied to components built through [`MotionDefaults`]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionDefaults {
    pub text: TextDefaults,
    pub scroll: ScrollDefaults,
    pub parallax: ParallaxDefaults,
    pub skill_bar: SkillBarDefaults,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextDefaults {
    pub animation: TextAnimation,
    /// Seconds before the first unit starts
    pub delay: f32,
    /// Seconds between units
    pub duration: f32,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            animation: TextAnimation::default(),
            delay: 0.0,
            duration: text_animator::DEFAULT_DURATION,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollDefaults {
    pub animation: ScrollAnimation,
    pub duration: f32,
    pub delay: f32,
    pub once: bool,
}

impl Default for ScrollDefaults {
    fn default() -> Self {
        Self {
            animation: ScrollAnimation::default(),
            duration: scroll_reveal::DEFAULT_DURATION,
            delay: 0.0,
            once: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxDefaults {
    /// Maximum tilt in degrees
    pub intensity: f32,
}

impl Default for ParallaxDefaults {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillBarDefaults {
    pub color: ColorToken,
}

impl MotionDefaults {
    /// Parse defaults from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let defaults = toml::from_str(content)?;
        Ok(defaults)
    }

    /// Load defaults from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let defaults = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded motion defaults");
        Ok(defaults)
    }

    pub fn text_animator(&self, text: impl Into<String>) -> TextAnimator {
        TextAnimator::new(text)
            .animation(self.text.animation)
            .delay(self.text.delay)
            .duration(self.text.duration)
    }

    pub fn scroll_reveal(&self) -> ScrollReveal {
        ScrollReveal::new()
            .animation(self.scroll.animation)
            .duration(self.scroll.duration)
            .delay(self.scroll.delay)
            .once(self.scroll.once)
    }

    pub fn parallax(&self) -> ParallaxWrapper {
        ParallaxWrapper::new().intensity(self.parallax.intensity)
    }

    pub fn skill_bar(&self, name: impl Into<String>, level: f32) -> SkillBar {
        SkillBar::new(name, level).color(self.skill_bar.color)
    }
}
