//! Formatting and parsing degree/minute/second coordinates.

use sunrise_equation::coordinates::{
    AngleDiagnostic, Sexagesimal, format_coordinates, parse_coordinates, parse_coordinates_strict,
};

fn main() {
    let places = [
        ("Paris", 48.8566, 2.3522),
        ("Sydney", -33.8688, 151.2093),
        ("Quito", -0.1807, -78.4678),
    ];

    for (name, latitude, longitude) in places {
        let text = format_coordinates(latitude, longitude).to_string();
        println!("{name:<8} {latitude:>9.4} {longitude:>9.4}  ->  {text}");
    }
    println!();

    println!("Signed notation:   {}", Sexagesimal(-33.8688));
    println!("Diagnostic:        {}", AngleDiagnostic(23.4397));
    println!();

    for input in [
        "48°51′24″N 2°21′8″E",
        "33°52′4″S 151°12′26″E",
        "48°5x′24″N 2°21′8″E",
        "91°0′0″N 0°0′0″E",
        "48°51′24″N",
    ] {
        println!("{input}");
        match parse_coordinates(input) {
            Ok((latitude, longitude)) => println!("  lenient: {latitude:.6}, {longitude:.6}"),
            Err(e) => println!("  lenient: {e}"),
        }
        match parse_coordinates_strict(input) {
            Ok((latitude, longitude)) => println!("  strict:  {latitude:.6}, {longitude:.6}"),
            Err(e) => println!("  strict:  {e}"),
        }
    }
}
