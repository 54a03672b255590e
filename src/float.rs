//! Scalar abstraction so bodies and shapes work in `f32` or `f64`.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type of the simulation.
///
/// Everything transcendental goes through `libm`, which keeps the crate
/// usable without `std`.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    fn two() -> Self;
    fn pi() -> Self;
    /// Largest finite value, used as the seed of min searches.
    fn max_value() -> Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn abs(self) -> Self;
    /// `atan2(y, x)` with the quadrant taken from both signs.
    fn atan2(y: Self, x: Self) -> Self;
    fn is_finite(self) -> bool;

    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Constants and tuning values are written as `f32` literals.
    fn from_f32(v: f32) -> Self;
    /// Counts such as the number of contact points in a manifold.
    fn from_usize(v: usize) -> Self;

    fn clamp(self, low: Self, high: Self) -> Self {
        self.max(low).min(high)
    }

    fn sqr(self) -> Self {
        self * self
    }

    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    fn to_radians(self) -> Self {
        self * Self::pi() / Self::from_f32(180.0)
    }

    fn to_degrees(self) -> Self {
        self * Self::from_f32(180.0) / Self::pi()
    }
}

macro_rules! impl_float {
    ($t:ident, $sqrt:path, $sin:path, $cos:path, $abs:path, $atan2:path) => {
        impl Float for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn half() -> Self { 0.5 }
            fn two() -> Self { 2.0 }
            fn pi() -> Self { core::$t::consts::PI }
            fn max_value() -> Self { $t::MAX }

            fn sqrt(self) -> Self { $sqrt(self) }
            fn sin(self) -> Self { $sin(self) }
            fn cos(self) -> Self { $cos(self) }
            fn abs(self) -> Self { $abs(self) }
            fn atan2(y: Self, x: Self) -> Self { $atan2(y, x) }
            fn is_finite(self) -> bool { $t::is_finite(self) }

            fn min(self, other: Self) -> Self { if other < self { other } else { self } }
            fn max(self, other: Self) -> Self { if other > self { other } else { self } }

            fn from_f32(v: f32) -> Self { v as $t }
            fn from_usize(v: usize) -> Self { v as $t }
        }
    };
}

impl_float!(f32, libm::sqrtf, libm::sinf, libm::cosf, libm::fabsf, libm::atan2f);
impl_float!(f64, libm::sqrt, libm::sin, libm::cos, libm::fabs, libm::atan2);

#[cfg(test)]
mod tests {
    use super::Float;

    #[test]
    fn degrees_round_trip_through_radians() {
        let quarter = <f64 as Float>::to_radians(90.0);
        assert!((quarter - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((<f64 as Float>::to_degrees(quarter) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_keeps_value_in_range() {
        assert_eq!(<f32 as Float>::clamp(3.0, -1.0, 1.0), 1.0);
        assert_eq!(<f32 as Float>::clamp(-3.0, -1.0, 1.0), -1.0);
        assert_eq!(<f32 as Float>::clamp(0.25, -1.0, 1.0), 0.25);
    }
}
