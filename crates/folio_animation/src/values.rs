//! Animatable value types
//!
//! Provides the interpolation trait used by the scheduler, plus range
//! mapping for values derived from other values (pointer offset to tilt).

use folio_core::Color;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t
    ///
    /// Scalar implementations do not clamp `t`, so spring progress that
    /// overshoots 1.0 carries through to the value. Colors clamp.
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

/// Map `value` from `input` range to `output` range, clamped to the output
///
/// Ranges may be descending on either side, e.g. `[-0.5, 0.5] -> [10, -10]`.
/// A degenerate input range maps everything to `output[0]`.
pub fn interpolate_range(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 {
        return output[0];
    }
    let t = ((value - input[0]) / span).clamp(0.0, 1.0);
    output[0].lerp(&output[1], t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
        // Overshoot passes through
        assert!((0.0_f32.lerp(&10.0, 1.2) - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_color_interpolation() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!(mid.approx_eq(&Color::rgb(0.5, 0.5, 0.5), 1e-6));
    }

    #[test]
    fn test_interpolate_range_descending_output() {
        let map = |v| interpolate_range(v, [-0.5, 0.5], [10.0, -10.0]);
        assert!((map(-0.5) - 10.0).abs() < 1e-6);
        assert!(map(0.0).abs() < 1e-6);
        assert!((map(0.5) + 10.0).abs() < 1e-6);
        assert!((map(0.25) + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_interpolate_range_clamps() {
        assert_eq!(interpolate_range(2.0, [-0.5, 0.5], [-10.0, 10.0]), 10.0);
        assert_eq!(interpolate_range(-2.0, [-0.5, 0.5], [-10.0, 10.0]), -10.0);
        assert_eq!(interpolate_range(1.0, [0.0, 0.0], [3.0, 4.0]), 3.0);
    }
}
