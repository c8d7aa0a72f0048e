//! Sunrise/sunset with the numeric API only (Unix timestamps, no chrono).
//!
//! Also shows how to reuse the date dependent part of the calculation for many latitudes.

use sunrise_equation::solar::{calc_with_parameters, solar_parameters};
use sunrise_equation::time::{JulianDate, timestamp_to_julian};
use sunrise_equation::{SunriseResult, calc};

/// 2023-06-21T00:00:00Z
const JUNE_SOLSTICE_2023: f64 = 1_687_305_600.0;

fn hours_of_day(timestamp: f64) -> f64 {
    (timestamp - JUNE_SOLSTICE_2023) / 3600.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Julian date of 2023-06-21T00:00:00Z: {}",
        timestamp_to_julian(JUNE_SOLSTICE_2023)
    );
    println!(
        "Days since J2000.0: {}",
        JulianDate::from_timestamp(JUNE_SOLSTICE_2023).days_since_j2000()
    );
    println!();

    // San Francisco, sea level
    match calc(JUNE_SOLSTICE_2023, 37.7749, -122.4194, 0.0)? {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
            day_length,
        } => {
            println!("San Francisco, June 21, 2023 (hours after 00:00 UTC):");
            println!("  Sunrise:  {:.3} h ({sunrise})", hours_of_day(sunrise));
            println!("  Transit:  {:.3} h ({transit})", hours_of_day(transit));
            println!("  Sunset:   {:.3} h ({sunset})", hours_of_day(sunset));
            println!("  Length:   {:.3} h", day_length / 3600.0);
        }
        SunriseResult::AllDay => println!("Polar day - sun never sets"),
        SunriseResult::AllNight => println!("Polar night - sun never rises"),
    }
    println!();

    // Day length along the 0° meridian
    let parameters = solar_parameters(JUNE_SOLSTICE_2023, 0.0);
    println!(
        "Solar declination on June 21, 2023: {:.4}°",
        parameters.declination()
    );
    println!("Latitude  Day length");
    for latitude in (-90..=90).step_by(10) {
        let result = calc_with_parameters(&parameters, f64::from(latitude), 0.0)?;
        let description = match result {
            SunriseResult::RegularDay { day_length, .. } => {
                format!("{:.2} h", day_length / 3600.0)
            }
            SunriseResult::AllDay => "polar day".to_string(),
            SunriseResult::AllNight => "polar night".to_string(),
        };
        println!("{latitude:>8}°  {description}");
    }

    Ok(())
}
