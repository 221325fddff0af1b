//! Visual states and motion variants
//!
//! A `VisualState` is one keyframe of an element's transform/opacity. A
//! `MotionVariant` pairs the state an element starts in (`hidden`) with the
//! state it animates to (`visible`).

use folio_core::Color;

use crate::values::Interpolate;

/// Drop shadow applied to an element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }

    /// Soft elevation shadow: 0 10px 30px rgba(0, 0, 0, 0.1)
    pub fn soft() -> Self {
        Self::new(0.0, 10.0, 30.0, Color::BLACK.with_alpha(0.1))
    }

    fn transparent(self) -> Self {
        Self {
            color: self.color.with_alpha(0.0),
            ..self
        }
    }
}

impl Interpolate for Shadow {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Shadow {
            offset_x: self.offset_x.lerp(&other.offset_x, t),
            offset_y: self.offset_y.lerp(&other.offset_y, t),
            blur: self.blur.lerp(&other.blur, t),
            color: self.color.lerp(&other.color, t),
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.offset_x.approx_eq(&other.offset_x, epsilon)
            && self.offset_y.approx_eq(&other.offset_y, epsilon)
            && self.blur.approx_eq(&other.blur, epsilon)
            && Interpolate::approx_eq(&self.color, &other.color, epsilon)
    }
}

/// Transform, opacity and clip of an element at one point in time
///
/// Translations are in layout units, rotations in degrees, `width` is a
/// percentage of the parent's width (used for clip reveals and fill bars).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub width: f32,
    pub shadow: Option<Shadow>,
}

impl VisualState {
    /// Fully visible, untransformed, full width, no shadow
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        width: 100.0,
        shadow: None,
    };

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotate(mut self, degrees: f32) -> Self {
        self.rotate = degrees;
        self
    }

    /// 3D tilt around the horizontal and vertical axes (degrees)
    pub fn tilt(mut self, rotate_x: f32, rotate_y: f32) -> Self {
        self.rotate_x = rotate_x;
        self.rotate_y = rotate_y;
        self
    }

    pub fn width(mut self, percent: f32) -> Self {
        self.width = percent;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// CSS-style width value, e.g. `"85%"`
    pub fn width_css(&self) -> String {
        format!("{}%", self.width)
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolate for VisualState {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let shadow = match (self.shadow, other.shadow) {
            (Some(a), Some(b)) => Some(a.lerp(&b, t)),
            // Fade shadows in and out rather than popping them
            (None, Some(b)) => Some(b.transparent().lerp(&b, t)),
            (Some(a), None) if t < 1.0 => Some(a.lerp(&a.transparent(), t)),
            _ => None,
        };

        VisualState {
            opacity: self.opacity.lerp(&other.opacity, t),
            x: self.x.lerp(&other.x, t),
            y: self.y.lerp(&other.y, t),
            scale: self.scale.lerp(&other.scale, t),
            rotate: self.rotate.lerp(&other.rotate, t),
            rotate_x: self.rotate_x.lerp(&other.rotate_x, t),
            rotate_y: self.rotate_y.lerp(&other.rotate_y, t),
            width: self.width.lerp(&other.width, t),
            shadow,
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        let shadows = match (&self.shadow, &other.shadow) {
            (Some(a), Some(b)) => a.approx_eq(b, epsilon),
            (None, None) => true,
            _ => false,
        };

        shadows
            && self.opacity.approx_eq(&other.opacity, epsilon)
            && self.x.approx_eq(&other.x, epsilon)
            && self.y.approx_eq(&other.y, epsilon)
            && self.scale.approx_eq(&other.scale, epsilon)
            && self.rotate.approx_eq(&other.rotate, epsilon)
            && self.rotate_x.approx_eq(&other.rotate_x, epsilon)
            && self.rotate_y.approx_eq(&other.rotate_y, epsilon)
            && self.width.approx_eq(&other.width, epsilon)
    }
}

/// Named pair of keyframes an element moves between
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionVariant {
    pub hidden: VisualState,
    pub visible: VisualState,
}

impl MotionVariant {
    pub fn new(hidden: VisualState, visible: VisualState) -> Self {
        Self { hidden, visible }
    }

    /// Hidden state converging to identity
    pub fn reveal_from(hidden: VisualState) -> Self {
        Self::new(hidden, VisualState::IDENTITY)
    }

    /// Opacity 0, shifted down 20 units; the standard unit entrance
    pub fn rise() -> Self {
        Self::reveal_from(VisualState::IDENTITY.opacity(0.0).y(20.0))
    }

    /// Opacity-only fade
    pub fn fade() -> Self {
        Self::reveal_from(VisualState::IDENTITY.opacity(0.0))
    }

    /// Horizontal clip reveal from 0% to `percent` width
    pub fn grow_width(percent: f32) -> Self {
        Self::new(
            VisualState::IDENTITY.width(0.0),
            VisualState::IDENTITY.width(percent),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_defaults() {
        let s = VisualState::default();
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.scale, 1.0);
        assert_eq!(s.width, 100.0);
        assert_eq!(s.shadow, None);
    }

    #[test]
    fn test_rise_variant() {
        let v = MotionVariant::rise();
        assert_eq!(v.hidden.opacity, 0.0);
        assert_eq!(v.hidden.y, 20.0);
        assert_eq!(v.visible, VisualState::IDENTITY);
    }

    #[test]
    fn test_lerp_midpoint() {
        let v = MotionVariant::rise();
        let mid = v.hidden.lerp(&v.visible, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.y - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_shadow_fades_in() {
        let lifted = VisualState::IDENTITY.y(-5.0).shadow(Shadow::soft());
        let start = VisualState::IDENTITY.lerp(&lifted, 0.0);
        let end = VisualState::IDENTITY.lerp(&lifted, 1.0);

        assert_eq!(start.shadow.map(|s| s.color.a), Some(0.0));
        assert!(end.approx_eq(&lifted, 1e-6));
    }

    #[test]
    fn test_shadow_removed_at_end_of_fade_out() {
        let lifted = VisualState::IDENTITY.shadow(Shadow::soft());
        assert!(lifted.lerp(&VisualState::IDENTITY, 0.5).shadow.is_some());
        assert_eq!(lifted.lerp(&VisualState::IDENTITY, 1.0).shadow, None);
    }

    #[test]
    fn test_width_css() {
        assert_eq!(VisualState::IDENTITY.width(85.0).width_css(), "85%");
        assert_eq!(VisualState::IDENTITY.width(42.5).width_css(), "42.5%");
    }
}
