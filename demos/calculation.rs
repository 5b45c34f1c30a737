use chrono::NaiveDate;

use panel_tilt::angles::compute_optimal_angle;
use panel_tilt::locations::Location;
use panel_tilt::types::MountingPositions;

fn main() {
    let location = Location::city("Paris").unwrap();
    let positions = MountingPositions::default();

    println!("=== Panel Tilt Calculation Example ===");
    println!("Location: {}", location.label());
    println!("Positions: {:?}", positions.as_slice());
    println!();

    for (month, day) in [(1, 1), (3, 21), (6, 21), (9, 23), (12, 21)] {
        let date = NaiveDate::from_ymd_opt(2026, month, day).unwrap();
        let r = compute_optimal_angle(location.latitude(), &date, &positions);
        println!(
            "{}  day {:>3}  declination {:>6.2}°  noon altitude {:>5.2}°  tilt {:>5}  -> {}°",
            date, r.day_of_year, r.declination, r.noon_altitude, r.to_string(), r.recommended_position
        );
    }
}
