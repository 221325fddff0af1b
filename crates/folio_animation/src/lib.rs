//! Folio Animation System
//!
//! Declarative motion parameters plus the small runtime pieces needed to
//! honor them.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Easing**: Cubic-bezier curves (linear, ease-in, ease-out, ease-in-out)
//! - **Visual States**: Hidden/visible keyframe pairs (`MotionVariant`)
//! - **Transitions**: Spring or tween timing with container stagger orchestration
//! - **Viewport Triggers**: Fire-once latch and bounding-box intersection registry
//! - **Scheduler**: Single-threaded frame interpolator implementing `MotionDriver`

pub mod driver;
pub mod easing;
pub mod reveal;
pub mod scheduler;
pub mod spring;
pub mod transition;
pub mod values;
pub mod viewport;
pub mod visual;

pub use driver::{MotionDriver, MotionTarget};
pub use easing::Easing;
pub use reveal::{RevealController, RevealPhase};
pub use scheduler::{AnimationId, MotionScheduler};
pub use spring::{Spring, SpringConfig};
pub use transition::{Orchestration, Transition};
pub use values::{interpolate_range, Interpolate};
pub use viewport::{
    IntersectionChange, ObserverId, ViewportLatch, ViewportObserver, ViewportOptions,
    ViewportRegistry,
};
pub use visual::{MotionVariant, Shadow, VisualState};
