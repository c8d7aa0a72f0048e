//! Sunrise/sunset across diverse global locations, in each location's own time zone.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use sunrise_equation::{SunriseResult, coordinates::format_coordinates, sunrise_sunset};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    timezone: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            elevation: 10.0,
            timezone: chrono_tz::Arctic::Longyearbyen,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            elevation: 31.0,
            timezone: chrono_tz::America::Anchorage,
        },
        City {
            name: "Quito, Ecuador",
            latitude: -0.1807,
            longitude: -78.4678,
            elevation: 2850.0,
            timezone: chrono_tz::America::Guayaquil,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            elevation: 0.0,
            timezone: chrono_tz::Pacific::Auckland,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            elevation: 15.0,
            timezone: chrono_tz::Asia::Singapore,
        },
    ];

    for (label, month, day) in [("June solstice", 6, 21), ("December solstice", 12, 21)] {
        println!("##### {label} 2023 #####");
        println!();

        for city in &cities {
            let date = city
                .timezone
                .with_ymd_and_hms(2023, month, day, 0, 0, 0)
                .single()
                .ok_or("ambiguous local midnight")?;

            println!("=== {} ===", city.name);
            println!(
                "Coordinates: {} ({} m)",
                format_coordinates(city.latitude, city.longitude),
                city.elevation
            );

            let result = sunrise_sunset(date, city.latitude, city.longitude, city.elevation)?;
            print_sunrise_result(&result);
            println!();
        }
    }

    Ok(())
}

fn print_sunrise_result(result: &SunriseResult<DateTime<Tz>>) {
    match result {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
            day_length,
        } => {
            println!("  Sunrise:    {}", sunrise.format("%H:%M:%S %Z"));
            println!("  Solar noon: {}", transit.format("%H:%M:%S %Z"));
            println!("  Sunset:     {}", sunset.format("%H:%M:%S %Z"));
            println!("  Day length: {:.2} hours", day_length / 3600.0);
        }
        SunriseResult::AllDay => println!("  Polar day: the sun does not set"),
        SunriseResult::AllNight => println!("  Polar night: the sun does not rise"),
    }
}
