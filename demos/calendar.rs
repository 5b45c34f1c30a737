use panel_tilt::calendar::build_yearly_calendar;
use panel_tilt::locations::FRENCH_CITIES;
use panel_tilt::types::MountingPositions;

fn main() {
    let positions = MountingPositions::default();

    for city in FRENCH_CITIES.iter().take(3) {
        let calendar = build_yearly_calendar(city.latitude, 2026, &positions);
        println!("=== {} ({:.4}°N) ===", city.name, city.latitude);
        for segment in &calendar.segments {
            let (Some(start), Some(end)) = (calendar.start_date(segment), calendar.end_date(segment))
            else {
                continue;
            };
            println!(
                "{:>4}°  {} – {}  ({} days, {})",
                segment.position,
                start.format("%-d %B"),
                end.format("%-d %B"),
                segment.len_days(),
                segment.season(&positions)
            );
        }
        println!();
    }
}
