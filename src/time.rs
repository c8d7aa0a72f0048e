//! Conversions between Unix timestamps and Julian dates.
//!
//! The sunrise equation works on Julian dates while callers deal in Unix timestamps
//! (seconds since 1970-01-01T00:00:00Z). The two are related by a fixed offset:
//! the Unix epoch is Julian date 2440587.5.

#![allow(clippy::unreadable_literal)]

#[cfg(feature = "chrono")]
use crate::math::{floor, round};
#[cfg(feature = "chrono")]
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Seconds per day (86,400)
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date of the Unix epoch (1970-01-01 00:00:00 UTC)
pub(crate) const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 TT)
pub(crate) const J2000_JDN: f64 = 2_451_545.0;

/// Converts a Unix timestamp (seconds, UTC) to a Julian date.
///
/// # Example
/// ```
/// # use sunrise_equation::time::timestamp_to_julian;
/// assert_eq!(timestamp_to_julian(0.0), 2_440_587.5);
/// assert_eq!(timestamp_to_julian(86_400.0), 2_440_588.5);
/// ```
#[must_use]
pub fn timestamp_to_julian(timestamp: f64) -> f64 {
    timestamp / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Converts a Julian date back to a Unix timestamp (seconds, UTC).
///
/// # Example
/// ```
/// # use sunrise_equation::time::julian_to_timestamp;
/// assert_eq!(julian_to_timestamp(2_440_587.5), 0.0);
/// assert_eq!(julian_to_timestamp(2_451_545.0), 946_728_000.0);
/// ```
#[must_use]
pub fn julian_to_timestamp(julian_date: f64) -> f64 {
    (julian_date - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// Julian date value used throughout the calculation.
///
/// A thin wrapper that keeps Julian dates apart from Unix timestamps in signatures.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Wraps a raw Julian date.
    #[must_use]
    pub const fn new(julian_date: f64) -> Self {
        Self { jd: julian_date }
    }

    /// Creates a Julian date from a Unix timestamp in seconds.
    ///
    /// # Example
    /// ```
    /// # use sunrise_equation::time::JulianDate;
    /// let jd = JulianDate::from_timestamp(1_687_305_600.0); // 2023-06-21T00:00:00Z
    /// assert_eq!(jd.julian_date(), 2_460_116.5);
    /// ```
    #[must_use]
    pub fn from_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp_to_julian(timestamp))
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// Sub-second precision is kept.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_timestamp(datetime_to_timestamp(datetime))
    }

    /// Gets the Julian Date value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Converts back to a Unix timestamp in seconds.
    #[must_use]
    pub fn to_timestamp(&self) -> f64 {
        julian_to_timestamp(self.jd)
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JDN
    }

    /// Returns a Julian date shifted by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self::new(self.jd + days)
    }

    /// Converts to a UTC chrono `DateTime`.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the date is not finite or outside chrono's range.
    #[cfg(feature = "chrono")]
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        timestamp_to_datetime(self.to_timestamp())
    }
}

/// Converts a chrono `DateTime` in any time zone to a Unix timestamp with sub-second precision.
#[cfg(feature = "chrono")]
#[must_use]
pub fn datetime_to_timestamp<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    datetime.timestamp() as f64 + f64::from(datetime.timestamp_subsec_nanos()) / 1e9
}

/// Converts a fractional Unix timestamp to a UTC chrono `DateTime`.
///
/// The fractional part is rounded to the nearest nanosecond.
///
/// # Errors
/// Returns `InvalidDateTime` if the timestamp is not finite or outside chrono's range.
///
/// # Example
/// ```
/// # use sunrise_equation::time::timestamp_to_datetime;
/// let datetime = timestamp_to_datetime(1_687_305_600.5).unwrap();
/// assert_eq!(datetime.to_rfc3339(), "2023-06-21T00:00:00.500+00:00");
/// ```
#[cfg(feature = "chrono")]
pub fn timestamp_to_datetime(timestamp: f64) -> Result<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return Err(Error::invalid_datetime("timestamp must be finite"));
    }

    let mut seconds = floor(timestamp);
    let mut nanos = round((timestamp - seconds) * 1e9);
    if nanos >= 1e9 {
        seconds += 1.0;
        nanos = 0.0;
    }

    if seconds < i64::MIN as f64 || seconds > i64::MAX as f64 {
        return Err(Error::invalid_datetime("timestamp out of range"));
    }

    DateTime::from_timestamp(seconds as i64, nanos as u32)
        .ok_or(Error::invalid_datetime("timestamp out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // A Julian date near 2.4e6 resolves to ~4e-5 seconds
    const EPSILON: f64 = 1e-4;

    #[test]
    fn test_epoch_anchor() {
        assert_eq!(timestamp_to_julian(0.0), UNIX_EPOCH_JD);
        assert_eq!(julian_to_timestamp(UNIX_EPOCH_JD), 0.0);
    }

    #[test]
    fn test_j2000_epoch() {
        // 2000-01-01T12:00:00Z
        let jd = JulianDate::from_timestamp(946_728_000.0);
        assert_eq!(jd.julian_date(), J2000_JDN);
        assert_eq!(jd.days_since_j2000(), 0.0);
    }

    #[test]
    fn test_round_trip() {
        for &ts in &[
            0.0,
            1.0,
            -1.0,
            0.25,
            946_728_000.0,
            1_687_305_600.123_456,
            -2_208_988_800.0,
            4_102_444_800.75,
            -1e11,
            1e11,
        ] {
            let back = julian_to_timestamp(timestamp_to_julian(ts));
            assert!(
                (back - ts).abs() < EPSILON,
                "round trip of {ts} gave {back}"
            );
        }
    }

    #[test]
    fn test_julian_date_wrapper() {
        let jd = JulianDate::from_timestamp(86_400.0);
        assert_eq!(jd.julian_date(), 2_440_588.5);
        assert_eq!(jd.to_timestamp(), 86_400.0);
        assert_eq!(jd.add_days(-1.0), JulianDate::new(UNIX_EPOCH_JD));
        assert!(jd > JulianDate::new(UNIX_EPOCH_JD));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_datetime_conversions() {
        use chrono::{FixedOffset, TimeZone};

        let utc = Utc.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
        assert_eq!(datetime_to_timestamp(&utc), 1_687_305_600.0);
        assert_eq!(JulianDate::from_datetime(&utc).julian_date(), 2_460_116.5);

        // Same instant in another zone maps to the same Julian date
        let paris = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2023, 6, 21, 2, 0, 0)
            .unwrap();
        assert_eq!(
            JulianDate::from_datetime(&paris),
            JulianDate::from_datetime(&utc)
        );

        let back = JulianDate::from_datetime(&utc).to_datetime().unwrap();
        assert_eq!(back, utc);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_timestamp_to_datetime_fractional() {
        let dt = timestamp_to_datetime(-0.25).unwrap();
        assert_eq!(dt.timestamp(), -1);
        assert_eq!(dt.timestamp_subsec_nanos(), 750_000_000);

        let dt = timestamp_to_datetime(10.999_999_999_9).unwrap();
        assert_eq!(dt.timestamp(), 11);
        assert_eq!(dt.timestamp_subsec_nanos(), 0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_timestamp_to_datetime_out_of_range() {
        assert!(timestamp_to_datetime(f64::NAN).is_err());
        assert!(timestamp_to_datetime(f64::INFINITY).is_err());
        assert!(timestamp_to_datetime(1e300).is_err());
    }
}
