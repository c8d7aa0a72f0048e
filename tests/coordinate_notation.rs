//! Degree/minute/second notation used end to end.

use sunrise_equation::coordinates::{
    format_coordinates, format_latitude, format_longitude, parse_coordinate, parse_coordinates,
    parse_coordinates_strict,
};
use sunrise_equation::{Error, calc};

const ARCSECOND: f64 = 1.0 / 3600.0;

const CITIES: [(&str, f64, f64); 6] = [
    ("Paris", 48.8566, 2.3522),
    ("San Francisco", 37.7749, -122.4194),
    ("Sydney", -33.8688, 151.2093),
    ("Quito", -0.1807, -78.4678),
    ("McMurdo", -77.846, 166.676),
    ("Honolulu", 21.3069, -157.8583),
];

#[test]
fn test_known_notation() {
    let (latitude, longitude) = parse_coordinates("48°51′24″N 2°21′8″E").unwrap();
    assert!((latitude - 48.856_666_666_666_67).abs() < 1e-12);
    assert!((longitude - 2.352_222_222_222_222).abs() < 1e-12);

    assert_eq!(format_latitude(-77.846).to_string(), "77°50′45″S");
    assert_eq!(format_longitude(166.676).to_string(), "166°40′33″E");
}

#[test]
fn test_city_round_trip() {
    for (name, latitude, longitude) in CITIES {
        let text = format_coordinates(latitude, longitude).to_string();

        let (lenient_lat, lenient_lon) = parse_coordinates(&text).unwrap();
        let (strict_lat, strict_lon) = parse_coordinates_strict(&text).unwrap();

        assert!((lenient_lat - latitude).abs() < ARCSECOND, "{name}: {text}");
        assert!((lenient_lon - longitude).abs() < ARCSECOND, "{name}: {text}");
        assert_eq!((strict_lat, strict_lon), (lenient_lat, lenient_lon), "{name}");
    }
}

#[test]
fn test_parsed_coordinates_give_nearly_same_times() {
    // One arcsecond of longitude shifts events by at most a fraction of a second
    for (name, latitude, longitude) in CITIES {
        let (parsed_lat, parsed_lon) =
            parse_coordinates(&format_coordinates(latitude, longitude).to_string()).unwrap();

        let exact = calc(1_687_305_600.0, latitude, longitude, 0.0).unwrap();
        let parsed = calc(1_687_305_600.0, parsed_lat, parsed_lon, 0.0).unwrap();

        match (exact.transit(), parsed.transit()) {
            (Some(a), Some(b)) => assert!((a - b).abs() < 1.0, "{name}"),
            _ => assert_eq!(exact.polar_flag(), parsed.polar_flag(), "{name}"),
        }
    }
}

#[test]
fn test_lenient_and_strict_disagree_on_garbage() {
    let text = "48°5x′24″N 2°21′8″E";

    let (latitude, _) = parse_coordinates(text).unwrap();
    assert!((latitude - (48.0 + 24.0 / 3600.0)).abs() < 1e-12);

    assert!(matches!(
        parse_coordinates_strict(text),
        Err(Error::InvalidCoordinate { .. })
    ));
}

#[test]
fn test_single_token_parsing() {
    assert_eq!(parse_coordinate("0°0′0″N"), 0.0);
    assert!((parse_coordinate("157°51′29″W") + 157.858_055_555_555_56).abs() < 1e-12);
}
