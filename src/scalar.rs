//! Scalar helpers shared by the vector, matrix and quaternion types.

use crate::Float;

/// Tolerance used for near-equality checks on [`f64`] values.
///
/// Computed as `7/3 - 4/3 - 1`, which leaves behind exactly the rounding error of
/// double-precision arithmetic around 1.0 (2⁻⁵² ≈ 2.22e-16).
pub const EPSILON: f64 = 7.0 / 3.0 - 4.0 / 3.0 - 1.0;

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use mathkit::*;
/// assert_eq!(to_radians(180.0), std::f64::consts::PI);
/// ```
#[inline]
pub fn to_radians<T: Float>(degrees: T) -> T {
    degrees * T::PI / T::from_f64(180.0)
}

/// Converts an angle in radians to degrees.
///
/// # Examples
///
/// ```
/// # use mathkit::*;
/// assert_eq!(to_degrees(std::f64::consts::PI), 180.0);
/// ```
#[inline]
pub fn to_degrees<T: Float>(radians: T) -> T {
    radians * T::from_f64(180.0) / T::PI
}

/// Restricts `value` to the range `min..=max`.
///
/// Works for floats and integers alike. A `NaN` `value` is passed through unchanged.
///
/// # Examples
///
/// ```
/// # use mathkit::*;
/// assert_eq!(clamp(50, 10, 20), 20);
/// assert_eq!(clamp(5, 10, 20), 10);
/// assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns whether `a` and `b` differ by at most `epsilon`.
///
/// Identical values (including infinities of the same sign) always compare equal.
#[inline]
pub fn nearly_equal<T: Float>(a: T, b: T, epsilon: T) -> bool {
    a == b || (a - b).abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn epsilon_is_double_rounding_error() {
        assert_eq!(EPSILON, f64::EPSILON);
        assert_eq!(EPSILON, <f64 as Float>::EPSILON);
    }

    #[test]
    fn angle_conversion() {
        assert_eq!(to_radians(180.0), PI);
        assert_eq!(to_degrees(PI), 180.0);
        assert_eq!(to_radians(0.0), 0.0);
        assert!((to_radians(90.0f32) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn clamp_float() {
        assert_eq!(clamp(50.0, 10.0, 20.1), 20.1);
        assert_eq!(clamp(5.2, 10.0, 20.5), 10.0);
        assert_eq!(clamp(30.0, 10.0, 50.0), 30.0);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn clamp_int() {
        assert_eq!(clamp(50, 10, 20), 20);
        assert_eq!(clamp(5, 10, 20), 10);
        assert_eq!(clamp(30, 10, 50), 30);
    }

    #[test]
    fn nearly() {
        assert!(nearly_equal(0.0, 0.0, EPSILON));
        assert!(!nearly_equal(0.0, 0.00000001, EPSILON));
        assert!(nearly_equal(1.0, 1.0 + EPSILON, EPSILON));
        assert!(nearly_equal(f64::INFINITY, f64::INFINITY, EPSILON));
        assert!(!nearly_equal(f64::NAN, f64::NAN, 1.0));
    }
}
