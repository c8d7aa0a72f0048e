//! Result types for sunrise/sunset calculations.

/// Seconds per hour conversion factor.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Result of a sunrise/sunset calculation for one day.
///
/// The default time representation is a Unix timestamp in seconds (`f64`). The chrono API
/// returns `SunriseResult<chrono::DateTime<Tz>>` instead.
///
/// Near the poles the sun may not cross the horizon at all on a given day. Those cases
/// are reported as [`AllDay`](Self::AllDay) and [`AllNight`](Self::AllNight) rather than
/// as errors, and carry no times.
///
/// # Example
/// ```
/// # use sunrise_equation::SunriseResult;
/// let result = SunriseResult::RegularDay {
///     sunrise: 1_000.0,
///     transit: 22_600.0,
///     sunset: 44_200.0,
///     day_length: 43_200.0,
/// };
/// assert_eq!(result.sunrise(), Some(&1_000.0));
/// assert_eq!(result.day_length_hours(), Some(12.0));
/// assert_eq!(result.polar_flag(), None);
///
/// let polar: SunriseResult = SunriseResult::AllDay;
/// assert_eq!(polar.sunrise(), None);
/// assert_eq!(polar.polar_flag(), Some(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunriseResult<T = f64> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (when sun crosses meridian, solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
        /// Time between sunrise and sunset in seconds
        day_length: f64,
    },
    /// Polar day - sun stays above the horizon all day
    AllDay,
    /// Polar night - sun stays below the horizon all day
    AllNight,
}

impl<T> SunriseResult<T> {
    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets the solar transit time if this is a regular day.
    pub const fn transit(&self) -> Option<&T> {
        if let Self::RegularDay { transit, .. } = self {
            Some(transit)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Gets the day length in seconds if this is a regular day.
    pub const fn day_length(&self) -> Option<f64> {
        if let Self::RegularDay { day_length, .. } = self {
            Some(*day_length)
        } else {
            None
        }
    }

    /// Gets the day length in hours if this is a regular day.
    pub fn day_length_hours(&self) -> Option<f64> {
        self.day_length().map(|seconds| seconds / SECONDS_PER_HOUR)
    }

    /// Flag for the degenerate case: `Some(true)` for permanent daylight,
    /// `Some(false)` for permanent darkness, `None` for a regular day.
    ///
    /// This is the negation of the raw `cos ω₀ > 0` test that picks the polar variant.
    /// The raw test is true for polar night and matches [`Self::is_polar_night`].
    pub const fn polar_flag(&self) -> Option<bool> {
        match self {
            Self::RegularDay { .. } => None,
            Self::AllDay => Some(true),
            Self::AllNight => Some(false),
        }
    }

    /// Converts the times of a regular day with `f`, keeping the day length and polar variants.
    pub fn map<U, F>(self, mut f: F) -> SunriseResult<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
                day_length,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                transit: f(transit),
                sunset: f(sunset),
                day_length,
            },
            Self::AllDay => SunriseResult::AllDay,
            Self::AllNight => SunriseResult::AllNight,
        }
    }

    /// Fallible version of [`map`](Self::map); stops at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<SunriseResult<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
                day_length,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise)?,
                transit: f(transit)?,
                sunset: f(sunset)?,
                day_length,
            },
            Self::AllDay => SunriseResult::AllDay,
            Self::AllNight => SunriseResult::AllNight,
        })
    }
}
