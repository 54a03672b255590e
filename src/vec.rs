//! Planar vectors.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Euclidean vector algebra shared by the solver and the geometry code.
///
/// Only [`Vec2`] implements it; the trait carries the operations that read
/// the same in any dimension.
pub trait Vec: Copy + PartialEq + Default + core::fmt::Debug + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self> {
    type Scalar: Float;

    fn zero() -> Self;
    fn dot(self, other: Self) -> Self::Scalar;
    fn scale(self, factor: Self::Scalar) -> Self;
    /// Per-axis product, e.g. unit corner directions times half extents.
    fn component_mul(self, other: Self) -> Self;

    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction. Vectors shorter than `1e-10`
    /// come back as zero instead of NaN.
    fn normalize(self) -> Self {
        let length = self.length();
        if length.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            return Self::zero();
        }
        self.scale(Self::Scalar::one() / length)
    }

    fn distance(self, other: Self) -> Self::Scalar {
        (other - self).length()
    }

    fn distance_sq(self, other: Self) -> Self::Scalar {
        (other - self).length_sq()
    }

    /// Point at `t` along the segment from `self` to `other`.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }
}

/// Position, velocity or direction in the y-up world plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Vector from components.
    pub fn new(x: F, y: F) -> Self {
        Vec2 { x, y }
    }

    /// Both components set to `value`.
    pub fn splat(value: F) -> Self {
        Vec2 { x: value, y: value }
    }

    /// `(-1, 0)`.
    pub fn left() -> Self {
        Vec2::new(-F::one(), F::zero())
    }

    /// `(1, 0)`.
    pub fn right() -> Self {
        Vec2::new(F::one(), F::zero())
    }

    /// `(0, 1)`.
    pub fn up() -> Self {
        Vec2::new(F::zero(), F::one())
    }

    /// Direction of gravity.
    pub fn down() -> Self {
        Vec2::new(F::zero(), -F::one())
    }

    /// Z component of the 3D cross product, `a.x * b.y - a.y * b.x`.
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Angular velocity `w` crossed with lever arm `r`: `(-w r.y, w r.x)`.
    pub fn cross_scalar(w: F, r: Self) -> Self {
        Vec2::new(-w * r.y, w * r.x)
    }

    /// Quarter turn counter-clockwise.
    pub fn perp(self) -> Self {
        Vec2::new(-self.y, self.x)
    }

    /// Counter-clockwise rotation by `angle` radians about the origin.
    pub fn rotate(self, angle: F) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Counter-clockwise rotation by `angle` radians about `pivot`.
    pub fn rotate_around(self, pivot: Self, angle: F) -> Self {
        (self - pivot).rotate(angle) + pivot
    }

    /// `None` for a zero divisor.
    pub fn checked_div(self, divisor: F) -> Option<Self> {
        if divisor == F::zero() {
            return None;
        }
        Some(Vec2::new(self.x / divisor, self.y / divisor))
    }

    /// Neither component is infinite or NaN.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;

    fn zero() -> Self {
        Vec2::splat(F::zero())
    }

    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    fn scale(self, factor: F) -> Self {
        Vec2::new(self.x * factor, self.y * factor)
    }

    fn component_mul(self, other: Self) -> Self {
        Vec2::new(self.x * other.x, self.y * other.y)
    }
}

macro_rules! componentwise_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl<F: Float> $op for Vec2<F> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Vec2::new(self.x $sym rhs.x, self.y $sym rhs.y)
            }
        }

        impl<F: Float> $assign for Vec2<F> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
    };
}

componentwise_op!(Add, add, AddAssign, add_assign, +);
componentwise_op!(Sub, sub, SubAssign, sub_assign, -);

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec2<f32>, expected: Vec2<f32>) {
        assert!(
            (actual.x - expected.x).abs() < 1e-5 && (actual.y - expected.y).abs() < 1e-5,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn pythagorean_length() {
        assert!((Vec2::new(-6.0f32, 8.0).length() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        assert_eq!(Vec2::<f32>::zero().normalize(), Vec2::zero());
        assert_eq!(Vec2::new(1e-12f32, 0.0).normalize(), Vec2::zero());
    }

    #[test]
    fn cross_sign_follows_winding() {
        assert_eq!(Vec2::<f32>::right().cross(Vec2::up()), 1.0);
        assert_eq!(Vec2::<f32>::up().cross(Vec2::right()), -1.0);
    }

    #[test]
    fn angular_cross_is_perpendicular_to_arm() {
        let arm = Vec2::new(2.0f32, 0.0);
        let v = Vec2::cross_scalar(3.0, arm);
        assert_close(v, Vec2::new(0.0, 6.0));
        assert_eq!(v.dot(arm), 0.0);
    }

    #[test]
    fn quarter_turns() {
        assert_close(Vec2::new(1.0f32, 0.0).rotate(core::f32::consts::FRAC_PI_2), Vec2::up());
        assert_close(Vec2::new(1.0f32, 0.0).perp(), Vec2::up());
    }

    #[test]
    fn half_turn_around_pivot() {
        let p = Vec2::new(2.0f32, 1.0).rotate_around(Vec2::new(1.0, 1.0), core::f32::consts::PI);
        assert_close(p, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn checked_division() {
        assert_eq!(Vec2::new(1.0f32, 1.0).checked_div(0.0), None);
        assert_eq!(Vec2::new(2.0f32, 4.0).checked_div(2.0), Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec2::new(1.0f32, 2.0);
        v += Vec2::new(0.5, 0.5);
        v -= Vec2::new(1.0, 0.0);
        assert_eq!(v, Vec2::new(0.5, 2.5));
    }
}
