//! Mathematical utilities for the sunrise equation.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
#[cfg(test)]
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes ceil(x) using the appropriate function for the compilation target.
#[inline]
pub fn ceil(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ceil();

    #[cfg(not(feature = "std"))]
    return libm::ceil(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
#[cfg_attr(not(feature = "chrono"), allow(dead_code))]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Rounds x to the nearest integer, half away from zero.
#[inline]
#[cfg_attr(not(feature = "chrono"), allow(dead_code))]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

/// Truncates x toward zero.
#[inline]
pub fn trunc(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.trunc();

    #[cfg(not(feature = "std"))]
    return libm::trunc(x);
}

/// Computes x^n for integer n.
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((degrees_to_radians(0.0)).abs() < EPSILON);

        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
        assert!((radians_to_degrees(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(90.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
    }

    #[test]
    fn test_rounding_functions() {
        assert_eq!(ceil(1.2), 2.0);
        assert_eq!(ceil(-1.2), -1.0);
        assert_eq!(floor(-1.2), -2.0);
        assert_eq!(trunc(-1.8), -1.0);
        assert_eq!(trunc(1.8), 1.0);
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.4), -2.0);
        assert_eq!(powi(60.0, 2), 3600.0);
    }

    #[test]
    fn test_trigonometric_functions() {
        assert!((sin(0.0)).abs() < EPSILON);
        assert!((cos(0.0) - 1.0).abs() < EPSILON);
        assert!((asin(1.0) - PI / 2.0).abs() < EPSILON);
        assert!((acos(-1.0) - PI).abs() < EPSILON);
        assert!(acos(1.5).is_nan());
        assert!((sqrt(16.0) - 4.0).abs() < EPSILON);
    }
}
