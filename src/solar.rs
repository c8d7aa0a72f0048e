//! Sunrise equation implementation.
//!
//! Sunrise, sunset, solar transit and day length from the NOAA/USNO "sunrise equation"
//! approximation, as described at <https://en.wikipedia.org/wiki/Sunrise_equation>.
//! Accuracy is in the order of a minute for mid latitudes, which is enough for most
//! scheduling and display purposes. For high-precision work use a full ephemeris.
//!
//! The calculation is split in two stages:
//!
//! 1. [`solar_parameters`] / [`solar_parameters_from_julian`]: everything that depends
//!    only on the date and longitude (Julian day, mean anomaly, equation of center,
//!    ecliptic longitude, transit and declination).
//! 2. [`hour_angle`] / [`calc_with_parameters`]: the latitude and elevation dependent part.
//!
//! [`calc`] and [`calc_from_julian`] run both stages. Reusing the first stage is useful
//! when sweeping over latitudes along a meridian.
//!
//! Every intermediate value is logged at `debug` level through the `log` facade.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

use crate::coordinates::AngleDiagnostic;
use crate::error::check_elevation;
use crate::math::{
    acos, asin, ceil, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees,
    sin, sqrt,
};
#[cfg(feature = "chrono")]
use crate::time::timestamp_to_datetime;
use crate::time::{J2000_JDN, JulianDate, SECONDS_PER_DAY};
use crate::{Error, Result, SunriseResult};
use core::fmt;
use log::debug;

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Fractional-day correction applied around the J2000.0 epoch.
const J2000_CORRECTION_DAYS: f64 = 0.0009;

/// TT - UTC in seconds (32.184 s + 37 leap seconds).
const TT_MINUS_UTC_SECONDS: f64 = 69.184;

/// Solar mean anomaly at J2000.0 (degrees).
const MEAN_ANOMALY_AT_J2000: f64 = 357.5291;

/// Daily motion of the solar mean anomaly (degrees/day).
const MEAN_ANOMALY_RATE: f64 = 0.98560028;

/// Argument of perihelion (degrees).
const ARGUMENT_OF_PERIHELION: f64 = 102.9372;

/// Obliquity of the ecliptic (degrees).
const EARTH_AXIAL_TILT: f64 = 23.4397;

/// Apparent altitude of the sun's center at sunrise/sunset for an observer at sea level
/// (refraction plus solar disc radius, degrees).
const SUNRISE_SUNSET_ANGLE: f64 = -0.833;

/// Horizon dip per square root meter of observer elevation (arcminutes).
const ELEVATION_DIP_ARCMINUTES: f64 = 2.076;

/// Seconds per hour conversion factor.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Date and longitude dependent part of the sunrise equation.
///
/// Independent of latitude and elevation. Compute once with [`solar_parameters`] and
/// combine with any number of latitudes through [`calc_with_parameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarParameters {
    /// Julian date of the input instant
    pub(crate) julian_date: JulianDate,
    /// Julian day number counted from J2000.0
    pub(crate) julian_day: f64,
    /// Mean solar time (days since J2000.0)
    pub(crate) mean_solar_time: f64,
    /// Solar mean anomaly in [0, 360) degrees
    pub(crate) mean_anomaly: f64,
    /// Equation of the center (degrees)
    pub(crate) equation_of_center: f64,
    /// Ecliptic longitude in [0, 360) degrees
    pub(crate) ecliptic_longitude: f64,
    /// Julian date of the solar transit
    pub(crate) transit: JulianDate,
    /// Sine of the solar declination
    pub(crate) sin_declination: f64,
    /// Cosine of the solar declination
    pub(crate) cos_declination: f64,
}

impl SolarParameters {
    /// Julian date of the input instant.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.julian_date.julian_date()
    }

    /// Julian day number `n` (whole days since J2000.0, rounded up).
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Mean solar time `J*` in days since J2000.0.
    #[must_use]
    pub const fn mean_solar_time(&self) -> f64 {
        self.mean_solar_time
    }

    /// Solar mean anomaly `M` in degrees, [0, 360).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Equation of the center `C` in degrees.
    #[must_use]
    pub const fn equation_of_center(&self) -> f64 {
        self.equation_of_center
    }

    /// Ecliptic longitude `λ` in degrees, [0, 360).
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Julian date of the solar transit (local solar noon).
    #[must_use]
    pub const fn transit_julian_date(&self) -> f64 {
        self.transit.julian_date()
    }

    /// Solar transit as a Unix timestamp.
    #[must_use]
    pub fn transit_timestamp(&self) -> f64 {
        self.transit.to_timestamp()
    }

    /// Sine of the solar declination.
    #[must_use]
    pub const fn sin_declination(&self) -> f64 {
        self.sin_declination
    }

    /// Cosine of the solar declination.
    #[must_use]
    pub const fn cos_declination(&self) -> f64 {
        self.cos_declination
    }

    /// Solar declination in degrees.
    #[must_use]
    pub fn declination(&self) -> f64 {
        radians_to_degrees(asin(self.sin_declination))
    }
}

/// Sunrise hour angle `ω₀` for a given latitude and elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngle {
    /// The sun crosses the horizon; `degrees` is in [0, 180].
    Crossing {
        /// Hour angle in degrees
        degrees: f64,
    },
    /// The sun does not cross the horizon; `cosine` is the out-of-range value of cos `ω₀`.
    ///
    /// A cosine above 1 means the sun stays below the horizon, below -1 that it stays above.
    Degenerate {
        /// Value of cos `ω₀`, outside [-1, 1]
        cosine: f64,
    },
}

impl HourAngle {
    /// Hour angle in degrees if the sun crosses the horizon.
    #[must_use]
    pub const fn degrees(&self) -> Option<f64> {
        match self {
            Self::Crossing { degrees } => Some(*degrees),
            Self::Degenerate { .. } => None,
        }
    }

    /// Checks if the sun does not cross the horizon.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

/// Julian date rendered for diagnostic traces as a Unix timestamp, plus the UTC date with chrono.
struct JulianDiagnostic(JulianDate);

impl fmt::Display for JulianDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.0.to_timestamp();
        #[cfg(feature = "chrono")]
        {
            if let Ok(datetime) = self.0.to_datetime() {
                return write!(f, "{timestamp} = {datetime}");
            }
        }
        write!(f, "{timestamp}")
    }
}

/// Calculate sunrise, sunset, solar transit and day length for one day.
///
/// The day is selected by `timestamp`: the Julian day number is rounded up from the
/// instant, so the result describes the solar transit that follows it (at the observer's
/// longitude, counted from J2000.0 noon). Passing midnight UTC of a date gives that date's
/// events for most longitudes.
///
/// # Arguments
/// * `timestamp` - Unix timestamp in seconds (UTC), may be fractional
/// * `latitude` - Observer latitude in degrees (-90 to +90, not validated)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive, not validated)
/// * `elevation` - Observer elevation in meters above sea level (`0.0` for sea level)
///
/// # Returns
/// `SunriseResult::RegularDay` with Unix timestamps and the day length in seconds, or
/// `AllDay`/`AllNight` when the sun does not cross the horizon.
///
/// # Errors
/// Returns `InvalidElevation` for a negative or non-finite elevation, and
/// `ComputationError` if non-finite inputs make the hour angle undefined.
///
/// # Example
/// ```
/// use sunrise_equation::{calc, SunriseResult};
///
/// // Paris, 2023-06-21T00:00:00Z, 35 m above sea level
/// let result = calc(1_687_305_600.0, 48.8566, 2.3522, 35.0).unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, transit, sunset, day_length } = result {
///     assert!(sunrise < transit && transit < sunset);
///     println!("Sunrise {sunrise}, sunset {sunset}, {:.2} hours", day_length / 3600.0);
/// }
///
/// // The sun does not set near the pole in June
/// assert!(calc(1_687_305_600.0, 89.0, 0.0, 0.0).unwrap().is_polar_day());
/// ```
pub fn calc(
    timestamp: f64,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<SunriseResult> {
    let julian_date = JulianDate::from_timestamp(timestamp);
    calc_from_julian(julian_date, latitude, longitude, elevation)
}

/// Calculate sunrise, sunset, solar transit and day length for the day selected by a
/// Julian date.
///
/// Same as [`calc`] with the instant given as a [`JulianDate`]. Result times are still
/// Unix timestamps.
///
/// # Errors
/// Same as [`calc`].
///
/// # Example
/// ```
/// use sunrise_equation::calc_from_julian;
/// use sunrise_equation::time::JulianDate;
///
/// let noon = *calc_from_julian(JulianDate::new(2_460_116.5), 48.8566, 2.3522, 35.0)
///     .unwrap()
///     .transit()
///     .unwrap();
/// assert!((noon - 1_687_348_412.45).abs() < 0.01);
/// ```
pub fn calc_from_julian(
    julian_date: JulianDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<SunriseResult> {
    check_elevation(elevation)?;

    debug!(
        "Latitude               f       = {}",
        AngleDiagnostic(latitude)
    );
    debug!(
        "Longitude              l_w     = {}",
        AngleDiagnostic(longitude)
    );
    debug!(
        "Now                    ts      = {}",
        JulianDiagnostic(julian_date)
    );

    let parameters = solar_parameters_from_julian(julian_date, longitude);
    calc_with_parameters(&parameters, latitude, elevation)
}

/// Calculate the date and longitude dependent part of the sunrise equation.
///
/// # Example
/// ```
/// use sunrise_equation::solar::solar_parameters;
///
/// let parameters = solar_parameters(1_687_305_600.0, 2.3522);
/// assert_eq!(parameters.julian_day(), 8572.0);
/// assert!((parameters.declination() - 23.44).abs() < 0.01); // June solstice
/// ```
#[must_use]
pub fn solar_parameters(timestamp: f64, longitude: f64) -> SolarParameters {
    solar_parameters_from_julian(JulianDate::from_timestamp(timestamp), longitude)
}

/// Calculate the date and longitude dependent part of the sunrise equation for a
/// [`JulianDate`].
#[must_use]
pub fn solar_parameters_from_julian(julian_date: JulianDate, longitude: f64) -> SolarParameters {
    debug!(
        "Julian date            j_date  = {:.3} days",
        julian_date.julian_date()
    );

    // Days since J2000.0, rounded up to the next whole day
    let days = julian_date.days_since_j2000();
    let julian_day = ceil(days - J2000_CORRECTION_DAYS + TT_MINUS_UTC_SECONDS / SECONDS_PER_DAY);
    debug!("Julian day             n       = {julian_day:.3} days");

    let mean_solar_time = julian_day + J2000_CORRECTION_DAYS - longitude / 360.0;
    debug!("Mean solar time        J_      = {mean_solar_time:.9} days");

    let mean_anomaly =
        normalize_degrees_0_to_360(MEAN_ANOMALY_AT_J2000 + MEAN_ANOMALY_RATE * mean_solar_time);
    let m = degrees_to_radians(mean_anomaly);
    debug!(
        "Solar mean anomaly     M       = {}",
        AngleDiagnostic(mean_anomaly)
    );

    let equation_of_center = 1.9148 * sin(m) + 0.02 * sin(2.0 * m) + 0.0003 * sin(3.0 * m);
    debug!(
        "Equation of the center C       = {}",
        AngleDiagnostic(equation_of_center)
    );

    let ecliptic_longitude = normalize_degrees_0_to_360(
        mean_anomaly + equation_of_center + 180.0 + ARGUMENT_OF_PERIHELION,
    );
    let lambda = degrees_to_radians(ecliptic_longitude);
    debug!(
        "Ecliptic longitude     L       = {}",
        AngleDiagnostic(ecliptic_longitude)
    );

    let transit =
        JulianDate::new(J2000_JDN + mean_solar_time + 0.0053 * sin(m) - 0.0069 * sin(2.0 * lambda));
    debug!(
        "Solar transit time     J_trans = {}",
        JulianDiagnostic(transit)
    );

    let sin_declination = sin(lambda) * sin(degrees_to_radians(EARTH_AXIAL_TILT));
    let cos_declination = cos(asin(sin_declination));

    SolarParameters {
        julian_date,
        julian_day,
        mean_solar_time,
        mean_anomaly,
        equation_of_center,
        ecliptic_longitude,
        transit,
        sin_declination,
        cos_declination,
    }
}

/// Apparent altitude of the sun's center at sunrise/sunset for an observer at `elevation`.
///
/// Starts from the standard -0.833° and lowers it by the dip of the horizon seen from
/// above sea level.
///
/// # Errors
/// Returns `InvalidElevation` for a negative or non-finite elevation.
///
/// # Example
/// ```
/// # use sunrise_equation::solar::horizon_altitude;
/// assert_eq!(horizon_altitude(0.0).unwrap(), -0.833);
/// assert!((horizon_altitude(100.0).unwrap() - (-0.833 - 0.346)).abs() < 1e-12);
/// assert!(horizon_altitude(-100.0).is_err());
/// ```
pub fn horizon_altitude(elevation: f64) -> Result<f64> {
    check_elevation(elevation)?;
    Ok(SUNRISE_SUNSET_ANGLE - ELEVATION_DIP_ARCMINUTES * sqrt(elevation) / 60.0)
}

/// Calculate the sunrise hour angle for a latitude and elevation.
///
/// # Errors
/// Returns `InvalidElevation` for a negative or non-finite elevation, and
/// `ComputationError` if the hour angle cosine is NaN.
pub fn hour_angle(
    parameters: &SolarParameters,
    latitude: f64,
    elevation: f64,
) -> Result<HourAngle> {
    let altitude = degrees_to_radians(horizon_altitude(elevation)?);
    let phi = degrees_to_radians(latitude);

    let cosine = (sin(altitude) - sin(phi) * parameters.sin_declination)
        / (cos(phi) * parameters.cos_declination);

    if cosine.is_nan() {
        return Err(Error::computation_error("hour angle cosine is not finite"));
    }
    if !(-1.0..=1.0).contains(&cosine) {
        return Ok(HourAngle::Degenerate { cosine });
    }

    // 0...180
    Ok(HourAngle::Crossing {
        degrees: radians_to_degrees(acos(cosine)),
    })
}

/// Calculate sunrise, sunset, transit and day length from precomputed [`SolarParameters`].
///
/// Gives the same result as [`calc`] for the timestamp and longitude the parameters were
/// computed from.
///
/// # Errors
/// Same as [`calc`].
///
/// # Example
/// ```
/// use sunrise_equation::solar::{calc_with_parameters, solar_parameters};
///
/// let parameters = solar_parameters(1_687_305_600.0, 0.0);
/// for latitude in [0.0, 30.0, 60.0] {
///     let result = calc_with_parameters(&parameters, latitude, 0.0).unwrap();
///     assert!(result.is_regular_day());
/// }
/// ```
pub fn calc_with_parameters(
    parameters: &SolarParameters,
    latitude: f64,
    elevation: f64,
) -> Result<SunriseResult> {
    let w0 = match hour_angle(parameters, latitude, elevation)? {
        HourAngle::Crossing { degrees } => degrees,
        HourAngle::Degenerate { cosine } => {
            debug!("Hour angle             cos(w0) = {cosine} (no sunrise/sunset)");
            return Ok(if cosine > 0.0 {
                SunriseResult::AllNight
            } else {
                SunriseResult::AllDay
            });
        }
    };
    debug!(
        "Hour angle             w0      = {}",
        AngleDiagnostic(w0)
    );

    let day_length = w0 / (180.0 / SECONDS_PER_DAY);

    let sunrise = parameters.transit.add_days(-w0 / 360.0);
    let sunset = parameters.transit.add_days(w0 / 360.0);
    debug!(
        "Sunrise                j_rise  = {}",
        JulianDiagnostic(sunrise)
    );
    debug!(
        "Sunset                 j_set   = {}",
        JulianDiagnostic(sunset)
    );
    debug!(
        "Day length                       {:.3} hours",
        day_length / SECONDS_PER_HOUR
    );

    Ok(SunriseResult::RegularDay {
        sunrise: sunrise.to_timestamp(),
        transit: parameters.transit.to_timestamp(),
        sunset: sunset.to_timestamp(),
        day_length,
    })
}

/// Calculate sunrise, sunset, solar transit and day length for a chrono `DateTime`.
///
/// Same as [`calc`], with the instant taken from `datetime` and the resulting times
/// returned in the time zone of `datetime`. The time zone has no influence on the
/// calculation.
///
/// # Errors
/// Same as [`calc`], plus `InvalidDateTime` if a resulting time is outside chrono's range.
///
/// # Example
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use sunrise_equation::{sunrise_sunset, SunriseResult};
///
/// let date = "2023-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let result = sunrise_sunset(date, 48.8566, 2.3522, 35.0).unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, sunset, .. } = result {
///     println!("Sunrise: {sunrise}");
///     println!("Sunset: {sunset}");
/// }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_sunset<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<SunriseResult<DateTime<Tz>>> {
    let timezone = datetime.timezone();
    let julian_date = JulianDate::from_datetime(&datetime);
    let result = calc_from_julian(julian_date, latitude, longitude, elevation)?
        .try_map(|timestamp| {
            timestamp_to_datetime(timestamp).map(|utc| utc.with_timezone(&timezone))
        })?;

    if let SunriseResult::RegularDay {
        sunrise, sunset, ..
    } = &result
    {
        debug!("Sunrise (local)                = {sunrise:?}");
        debug!("Sunset (local)                 = {sunset:?}");
    }

    Ok(result)
}
