//! # Sunrise Equation
//!
//! Sunrise, sunset, solar transit and day length from the NOAA/USNO sunrise equation.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The sunrise equation is a compact approximation of the sun's apparent motion that gives
//! rise and set times to within about a minute at mid latitudes. This crate provides:
//!
//! - **Sunrise/sunset**: [`calc`] for Unix timestamps, [`sunrise_sunset`] for chrono `DateTime`s
//! - **Julian dates**: conversions between Unix timestamps and Julian dates ([`time`]), and
//!   [`calc_from_julian`] for callers that already work in Julian dates
//! - **Coordinates**: degrees/minutes/seconds formatting and parsing ([`coordinates`])
//!
//! Every intermediate value of the calculation is emitted at `debug` level through the
//! [`log`](https://docs.rs/log) facade. Install any logger to see the trace.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sunrise-equation = "0.1"
//!
//! # Minimal std (numeric API only)
//! sunrise-equation = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std
//! sunrise-equation = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (numeric API)
//! ```rust
//! use sunrise_equation::{calc, SunriseResult};
//!
//! // Paris, 2023-06-21T00:00:00Z, 35 m above sea level
//! match calc(1_687_305_600.0, 48.8566, 2.3522, 35.0).unwrap() {
//!     SunriseResult::RegularDay { sunrise, transit, sunset, day_length } => {
//!         println!("Sunrise: {sunrise}");
//!         println!("Solar noon: {transit}");
//!         println!("Sunset: {sunset}");
//!         println!("Day length: {:.2} h", day_length / 3600.0);
//!     }
//!     SunriseResult::AllDay => println!("Polar day"),
//!     SunriseResult::AllNight => println!("Polar night"),
//! }
//! ```
//!
//! ### Sunrise and Sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sunrise_equation::sunrise_sunset;
//! use chrono::{DateTime, FixedOffset};
//!
//! let date = "2023-06-21T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let result = sunrise_sunset(date, 37.7749, -122.4194, 0.0).unwrap();
//!
//! if let Some(sunrise) = result.sunrise() {
//!     println!("Sunrise: {sunrise}"); // in UTC-07:00
//! }
//! # }
//! ```
//!
//! ### Coordinates
//! ```rust
//! use sunrise_equation::coordinates::{format_coordinates, parse_coordinates};
//!
//! let text = format_coordinates(48.8566, 2.3522).to_string();
//! assert_eq!(text, "48°51′23″N 2°21′7″E");
//!
//! let (latitude, longitude) = parse_coordinates(&text).unwrap();
//! assert!((latitude - 48.8566).abs() < 1.0 / 3600.0);
//! assert!((longitude - 2.3522).abs() < 1.0 / 3600.0);
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, north positive (-90° to +90°)
//! - **Longitude**: degrees, east positive (-180° to +180°)
//! - **Elevation**: meters above sea level, non-negative
//! - **Times**: Unix timestamps in seconds (UTC), fractional
//!
//! ## References
//!
//! - Sunrise equation: <https://en.wikipedia.org/wiki/Sunrise_equation>
//! - NOAA solar calculator: <https://gml.noaa.gov/grad/solcalc/>

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::solar::sunrise_sunset;
pub use crate::solar::{
    HourAngle, SolarParameters, calc, calc_from_julian, calc_with_parameters, horizon_altitude,
    hour_angle, solar_parameters, solar_parameters_from_julian,
};
pub use crate::types::SunriseResult;

// Algorithm modules
pub mod solar;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod coordinates;
pub mod time;
