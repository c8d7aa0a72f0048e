//! Error types for the sunrise equation library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during sunrise/sunset calculations and coordinate handling.
///
/// Polar day and polar night are not errors; they are reported through
/// [`SunriseResult`](crate::SunriseResult).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer elevation (must be finite and not below sea level).
    InvalidElevation {
        /// The invalid elevation value provided, in meters.
        value: f64,
    },
    /// Coordinate text that could not be interpreted.
    InvalidCoordinate {
        /// Description of the problem.
        message: &'static str,
    },
    /// Date/time outside the representable range.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g. a non-finite intermediate value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(
                    f,
                    "invalid elevation {value} m (must be finite and non-negative)"
                )
            }
            Self::InvalidCoordinate { message } => {
                write!(f, "invalid coordinate: {message}")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid coordinate error.
    #[must_use]
    pub const fn invalid_coordinate(message: &'static str) -> Self {
        Self::InvalidCoordinate { message }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// The sunrise calculation itself does not call this; coordinates are the caller's
/// responsibility there. The strict coordinate parser does.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the observer elevation used by the horizon correction.
///
/// The correction takes the square root of the elevation, so anything below sea level
/// (or NaN/infinite) is rejected instead of turning into a NaN result.
///
/// # Errors
/// Returns `InvalidElevation` if elevation is negative or not finite.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() || elevation < 0.0 {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(45.5).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(122.5).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_elevation_validation() {
        assert!(check_elevation(0.0).is_ok());
        assert!(check_elevation(35.0).is_ok());
        assert!(check_elevation(8848.0).is_ok());

        assert_eq!(
            check_elevation(-100.0),
            Err(Error::invalid_elevation(-100.0))
        );
        assert!(check_elevation(-0.001).is_err());
        assert!(check_elevation(f64::NAN).is_err());
        assert!(check_elevation(f64::INFINITY).is_err());
    }

    #[test]
    fn test_coordinates_validation() {
        assert!(check_coordinates(48.8566, 2.3522).is_ok());
        assert_eq!(
            check_coordinates(95.0, 2.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, -190.0),
            Err(Error::invalid_longitude(-190.0))
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_elevation(-100.0);
        assert_eq!(
            err.to_string(),
            "invalid elevation -100 m (must be finite and non-negative)"
        );

        let err = Error::invalid_coordinate("expected latitude and longitude");
        assert_eq!(
            err.to_string(),
            "invalid coordinate: expected latitude and longitude"
        );

        let err = Error::computation_error("hour angle cosine is not finite");
        assert_eq!(
            err.to_string(),
            "computation error: hour angle cosine is not finite"
        );
    }
}
