//! Step-by-step trace of the sunrise equation through the `log` facade.
//!
//! Run with `cargo run --example trace -- "48°51′24″N 2°21′8″E" 35`.
//! The log level defaults to `debug` and can be overridden with `RUST_LOG`.

use log::{LevelFilter, info};
use sunrise_equation::coordinates::parse_coordinates_strict;
use sunrise_equation::{SunriseResult, calc};

/// 2023-06-21T00:00:00Z
const DEFAULT_TIMESTAMP: f64 = 1_687_305_600.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let coordinates = args
        .next()
        .unwrap_or_else(|| "48°51′24″N 2°21′8″E".to_string());
    let elevation: f64 = args.next().map_or(Ok(0.0), |value| value.parse())?;
    let timestamp: f64 = args
        .next()
        .map_or(Ok(DEFAULT_TIMESTAMP), |value| value.parse())?;

    let (latitude, longitude) = parse_coordinates_strict(&coordinates)?;
    info!("Observer at {coordinates}, {elevation} m");

    match calc(timestamp, latitude, longitude, elevation)? {
        SunriseResult::RegularDay {
            sunrise, sunset, ..
        } => info!("Sunrise {sunrise}, sunset {sunset}"),
        SunriseResult::AllDay => info!("The sun does not set"),
        SunriseResult::AllNight => info!("The sun does not rise"),
    }

    Ok(())
}
