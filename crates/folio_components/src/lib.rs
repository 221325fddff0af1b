//! Folio Components
//!
//! Motion-driven portfolio components. Each component turns a handful of
//! props into an [`Element`] tree annotated with motion parameters, plus the
//! controllers that play those parameters through a
//! [`MotionDriver`](folio_animation::MotionDriver):
//!
//! - [`TextAnimator`]: wave, typewriter, bounce and stagger text entrances
//! - [`SkillBar`]: labelled progress bar that fills on first view
//! - [`ProjectCard`]: card with hover lift, accent bar and press feedback
//! - [`ParallaxWrapper`]: pointer-driven 3D tilt with spring smoothing
//! - [`ScrollReveal`]: entrance transition selected from a preset table
//!
//! Defaults for all of them can be loaded from TOML through [`MotionDefaults`].
//!
//! ```rust
//! use folio_components::prelude::*;
//!
//! let reveal = TextAnimator::new("Hello World").derive();
//! assert_eq!(reveal.contents(), vec!["Hello", "World"]);
//!
//! let bar = SkillBar::new("Rust", 85.0);
//! assert_eq!(bar.fill_width(), "85%");
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod parallax;
pub mod project_card;
pub mod scroll_reveal;
pub mod skill_bar;
pub mod text_animator;

pub use config::{MotionDefaults, ParallaxDefaults, ScrollDefaults, SkillBarDefaults, TextDefaults};
pub use element::{Background, Element, ElementKind, MotionProps, Style};
pub use error::{FolioError, Result};
pub use parallax::{normalize, smooth, tilt_for, ParallaxState, ParallaxWrapper, PointerSample, Tilt};
pub use project_card::{CardInteraction, CardPart, ProjectCard, ProjectLink};
pub use scroll_reveal::{RevealPreset, ScrollAnimation, ScrollReveal};
pub use skill_bar::SkillBar;
pub use text_animator::{
    AnimatedUnit, TextAnimation, TextAnimator, TextPreset, TextReveal, TextRevealController,
    Tokenization, UnitTiming,
};

/// Common imports for building pages with Folio components
pub mod prelude {
    pub use crate::{
        CardInteraction, CardPart, Element, FolioError, MotionDefaults, ParallaxWrapper,
        ProjectCard, ProjectLink, ScrollAnimation, ScrollReveal, SkillBar, TextAnimation,
        TextAnimator,
    };
    pub use folio_animation::{
        Easing, MotionDriver, MotionScheduler, MotionTarget, MotionVariant, RevealController,
        RevealPhase, SpringConfig, Transition, ViewportOptions, ViewportRegistry, VisualState,
    };
    pub use folio_core::{ColorToken, Point, PointerEvent, Rect};
}
