//! Folio Core
//!
//! Foundational types shared by the Folio motion crates:
//!
//! - **Geometry**: points, sizes and rectangles in layout units
//! - **Colors**: linear RGBA colors and the palette tokens components default to
//! - **Events**: pointer events and the `StateTransitions` trait that drives
//!   per-element interaction state machines

pub mod color;
pub mod events;
pub mod geometry;

pub use color::{Color, ColorToken};
pub use events::{InteractionState, PointerEvent, StateTransitions};
pub use geometry::{Point, Rect, Size};
