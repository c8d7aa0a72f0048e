//! Sexagesimal (degree/arcminute/arcsecond) coordinate formatting and parsing.
//!
//! Coordinates are written as `D°M′S″H`: whole degrees, arcminutes and arcseconds separated
//! by the degree sign (U+00B0), prime (U+2032) and double prime (U+2033), followed by a
//! hemisphere letter. A location is a latitude token and a longitude token separated by a
//! single space:
//!
//! ```text
//! 48°51′24″N 2°21′8″E
//! ```
//!
//! None of this is needed by the sunrise calculation itself, which works on decimal
//! degrees. These helpers sit at the boundary, for user input and diagnostic output.
//!
//! # Lenient and strict parsing
//!
//! [`parse_coordinate`] and [`parse_coordinates`] are lenient: a component that is neither
//! a run of ASCII digits nor a hemisphere letter contributes nothing and is skipped without
//! error. `48°5x′24″N` parses as if the arcminutes were absent. Digits from other scripts,
//! such as `٤٥`, are not ASCII digits and are skipped the same way. Use
//! [`parse_coordinates_strict`] when malformed input must be rejected.
//!
//! # Example
//! ```
//! use sunrise_equation::coordinates::{format_coordinates, parse_coordinates};
//!
//! let (lat, lon) = parse_coordinates("48°51′24″N 2°21′8″E").unwrap();
//! assert!((lat - 48.856_666).abs() < 1e-6);
//! assert!((lon - 2.352_222).abs() < 1e-6);
//!
//! let text = format_coordinates(-33.8688, 151.2093).to_string();
//! assert_eq!(text, "33°52′7″S 151°12′33″E");
//! ```

use crate::error::check_coordinates;
use crate::math::{degrees_to_radians, powi, trunc};
use crate::{Error, Result};
use core::fmt;

const DEGREE_SIGN: char = '°';
const ARCMINUTE_SIGN: char = '′';
const ARCSECOND_SIGN: char = '″';

/// Separator between the latitude and longitude tokens.
const TOKEN_SEPARATOR: char = ' ';

const SECONDS_PER_DEGREE: f64 = 3600.0;

/// Number of numeric components in a full `D°M′S″` coordinate.
const MAX_NUMERIC_COMPONENTS: usize = 3;

fn is_sexagesimal_mark(c: char) -> bool {
    matches!(c, DEGREE_SIGN | ARCMINUTE_SIGN | ARCSECOND_SIGN)
}

fn is_ascii_digits(piece: &str) -> bool {
    !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_digit())
}

/// Divisor of the component at `position`: 1 for degrees, 60 for arcminutes, 3600 for arcseconds.
fn component_weight(position: usize) -> f64 {
    let exponent = i32::try_from(position).unwrap_or(i32::MAX);
    powi(60.0, exponent)
}

/// Decimal degrees displayed as truncated `D°M′S″`.
///
/// The value is truncated toward zero at whole arcseconds. Negative values get a leading
/// minus sign on the degree component.
///
/// # Example
/// ```
/// # use sunrise_equation::coordinates::Sexagesimal;
/// assert_eq!(Sexagesimal(48.8566).to_string(), "48°51′23″");
/// assert_eq!(Sexagesimal(-0.5).to_string(), "-0°30′0″");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal(pub f64);

impl Sexagesimal {
    /// Splits the value into whole degrees, arcminutes and arcseconds of its magnitude.
    ///
    /// Returns `(negative, degrees, arcminutes, arcseconds)`.
    #[must_use]
    pub fn components(&self) -> (bool, u64, u64, u64) {
        let total = trunc(self.0 * SECONDS_PER_DEGREE);
        let negative = total < 0.0;
        let arcseconds = total.abs() as u64;
        (
            negative,
            arcseconds / 3600,
            arcseconds / 60 % 60,
            arcseconds % 60,
        )
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, degrees, minutes, seconds) = self.components();
        let sign = if negative { "-" } else { "" };
        write!(
            f,
            "{sign}{degrees}{DEGREE_SIGN}{minutes}{ARCMINUTE_SIGN}{seconds}{ARCSECOND_SIGN}"
        )
    }
}

/// Angle rendered in radians, sexagesimal and decimal degrees for diagnostic traces.
///
/// # Example
/// ```
/// # use sunrise_equation::coordinates::AngleDiagnostic;
/// assert_eq!(
///     AngleDiagnostic(48.8566).to_string(),
///     "∠0.853rad = ∠48°51′23″ = ∠48.857°"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleDiagnostic(pub f64);

impl fmt::Display for AngleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "∠{:.3}rad = ∠{} = ∠{:.3}°",
            degrees_to_radians(self.0),
            Sexagesimal(self.0),
            self.0
        )
    }
}

/// Which geographic axis a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south, hemisphere letters `N` and `S`
    Latitude,
    /// East/west, hemisphere letters `E` and `W`
    Longitude,
}

impl Axis {
    const fn hemisphere(self, negative: bool) -> char {
        match (self, negative) {
            (Self::Latitude, false) => 'N',
            (Self::Latitude, true) => 'S',
            (Self::Longitude, false) => 'E',
            (Self::Longitude, true) => 'W',
        }
    }

    const fn accepts(self, hemisphere: char) -> bool {
        match self {
            Self::Latitude => matches!(hemisphere, 'N' | 'S'),
            Self::Longitude => matches!(hemisphere, 'E' | 'W'),
        }
    }
}

/// A single coordinate displayed as `D°M′S″H` with a hemisphere letter instead of a sign.
///
/// The output reads back through [`parse_coordinate`] to within one arcsecond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereCoordinate {
    degrees: f64,
    axis: Axis,
}

impl HemisphereCoordinate {
    /// Decimal degrees value being displayed.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Axis the value belongs to.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }
}

impl fmt::Display for HemisphereCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, degrees, minutes, seconds) = Sexagesimal(self.degrees).components();
        write!(
            f,
            "{degrees}{DEGREE_SIGN}{minutes}{ARCMINUTE_SIGN}{seconds}{ARCSECOND_SIGN}{}",
            self.axis.hemisphere(negative)
        )
    }
}

/// A latitude/longitude pair displayed as two space-separated `D°M′S″H` tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatePair {
    /// Latitude token
    pub latitude: HemisphereCoordinate,
    /// Longitude token
    pub longitude: HemisphereCoordinate,
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{TOKEN_SEPARATOR}{}", self.latitude, self.longitude)
    }
}

/// Formats a latitude in decimal degrees with an `N`/`S` suffix.
///
/// # Example
/// ```
/// # use sunrise_equation::coordinates::format_latitude;
/// assert_eq!(format_latitude(48.8566).to_string(), "48°51′23″N");
/// assert_eq!(format_latitude(-33.8688).to_string(), "33°52′7″S");
/// ```
#[must_use]
pub const fn format_latitude(degrees: f64) -> HemisphereCoordinate {
    HemisphereCoordinate {
        degrees,
        axis: Axis::Latitude,
    }
}

/// Formats a longitude in decimal degrees with an `E`/`W` suffix.
///
/// # Example
/// ```
/// # use sunrise_equation::coordinates::format_longitude;
/// assert_eq!(format_longitude(-122.4194).to_string(), "122°25′9″W");
/// ```
#[must_use]
pub const fn format_longitude(degrees: f64) -> HemisphereCoordinate {
    HemisphereCoordinate {
        degrees,
        axis: Axis::Longitude,
    }
}

/// Formats a location as `latitude longitude` in the text format read by [`parse_coordinates`].
#[must_use]
pub const fn format_coordinates(latitude: f64, longitude: f64) -> CoordinatePair {
    CoordinatePair {
        latitude: format_latitude(latitude),
        longitude: format_longitude(longitude),
    }
}

/// Parses one sexagesimal coordinate token into decimal degrees, leniently.
///
/// The token is split on `°`, `′` and `″`. The component at position `i` adds
/// `value / 60^i` when it consists only of ASCII digits `0`-`9`. A component equal to `S`
/// or `W` negates the value accumulated so far. Everything else (`N`, `E`, empty
/// components, decimals, stray characters) is ignored. Decimal digits of other scripts,
/// e.g. Arabic-Indic `٤٥`, are not accepted and make their component count as stray.
///
/// # Example
/// ```
/// # use sunrise_equation::coordinates::parse_coordinate;
/// assert!((parse_coordinate("33°52′4″S") + 33.867_777).abs() < 1e-6);
/// assert_eq!(parse_coordinate("45°"), 45.0);
/// assert_eq!(parse_coordinate("45°x′"), 45.0); // malformed minutes ignored
/// ```
#[must_use]
pub fn parse_coordinate(token: &str) -> f64 {
    let mut degrees = 0.0;
    for (position, piece) in token.split(is_sexagesimal_mark).enumerate() {
        if is_ascii_digits(piece) {
            if let Ok(value) = piece.parse::<f64>() {
                degrees += value / component_weight(position);
            }
        } else if matches!(piece, "S" | "W") {
            degrees = -degrees;
        }
    }
    degrees
}

fn split_pair(text: &str) -> Result<(&str, &str)> {
    let mut tokens = text.split(TOKEN_SEPARATOR);
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(latitude), Some(longitude), None) => Ok((latitude, longitude)),
        _ => Err(Error::invalid_coordinate(
            "expected latitude and longitude separated by a single space",
        )),
    }
}

/// Parses `"<latitude> <longitude>"` into decimal degrees, leniently.
///
/// Each token is read with [`parse_coordinate`]. The text must hold exactly two tokens
/// separated by a single space; what is inside the tokens is not validated.
///
/// # Errors
/// Returns `InvalidCoordinate` if the text does not split into exactly two tokens.
pub fn parse_coordinates(text: &str) -> Result<(f64, f64)> {
    let (latitude, longitude) = split_pair(text)?;
    Ok((parse_coordinate(latitude), parse_coordinate(longitude)))
}

fn parse_coordinate_strict(token: &str, axis: Axis) -> Result<f64> {
    let pieces = token.split(is_sexagesimal_mark);
    let piece_count = token.split(is_sexagesimal_mark).count();

    let mut degrees = 0.0;
    let mut numeric_components = 0;
    let mut hemisphere = None;

    for (position, piece) in pieces.enumerate() {
        let is_last = position + 1 == piece_count;

        if piece.is_empty() {
            if !is_last {
                return Err(Error::invalid_coordinate("empty coordinate component"));
            }
        } else if is_ascii_digits(piece) {
            if position != numeric_components || position >= MAX_NUMERIC_COMPONENTS {
                return Err(Error::invalid_coordinate(
                    "coordinate has too many components",
                ));
            }
            let value = piece
                .parse::<f64>()
                .map_err(|_| Error::invalid_coordinate("invalid number"))?;
            if position > 0 && value >= 60.0 {
                return Err(Error::invalid_coordinate(
                    "arcminutes and arcseconds must be below 60",
                ));
            }
            degrees += value / component_weight(position);
            numeric_components += 1;
        } else {
            let mut chars = piece.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if is_last && axis.accepts(letter) => {
                    hemisphere = Some(letter);
                }
                (Some(letter), None) if is_last && matches!(letter, 'N' | 'S' | 'E' | 'W') => {
                    return Err(Error::invalid_coordinate(match axis {
                        Axis::Latitude => "latitude hemisphere must be N or S",
                        Axis::Longitude => "longitude hemisphere must be E or W",
                    }));
                }
                _ => {
                    return Err(Error::invalid_coordinate(
                        "unexpected characters in coordinate",
                    ));
                }
            }
        }
    }

    if numeric_components == 0 {
        return Err(Error::invalid_coordinate("coordinate has no degrees"));
    }

    if matches!(hemisphere, Some('S' | 'W')) {
        degrees = -degrees;
    }
    Ok(degrees)
}

/// Parses `"<latitude> <longitude>"` into decimal degrees, rejecting malformed input.
///
/// Accepts the same `D°M′S″H` notation as [`parse_coordinates`], but every component must
/// be well formed: degrees are required, arcminutes and arcseconds must be below 60, the
/// hemisphere letter must come last and match the axis, and the result must be a valid
/// latitude/longitude.
///
/// # Errors
/// Returns `InvalidCoordinate` for malformed text, or `InvalidLatitude`/`InvalidLongitude`
/// for values out of range.
///
/// # Example
/// ```
/// # use sunrise_equation::coordinates::parse_coordinates_strict;
/// let (lat, lon) = parse_coordinates_strict("48°51′24″N 2°21′8″E").unwrap();
/// assert!((lat - 48.856_666).abs() < 1e-6);
/// assert!((lon - 2.352_222).abs() < 1e-6);
///
/// assert!(parse_coordinates_strict("48°5x′24″N 2°21′8″E").is_err());
/// assert!(parse_coordinates_strict("2°21′8″E 48°51′24″N").is_err());
/// ```
pub fn parse_coordinates_strict(text: &str) -> Result<(f64, f64)> {
    let (latitude, longitude) = split_pair(text)?;
    let latitude = parse_coordinate_strict(latitude, Axis::Latitude)?;
    let longitude = parse_coordinate_strict(longitude, Axis::Longitude)?;
    check_coordinates(latitude, longitude)?;
    Ok((latitude, longitude))
}
