use chrono::Datelike;

use crate::types::{AngleResult, MountingPositions};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Day offset in Cooper's declination formula.
pub const COOPER_DAY_OFFSET: u32 = 284;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

/// Ordinal day within the year, January 1 = 1. Time of day is ignored and
/// zoned timestamps are read in their own zone.
pub fn day_of_year<D: Datelike>(date: &D) -> u32 {
    date.ordinal()
}

/// Cooper's approximation of the solar declination, in degrees.
pub fn solar_declination(day_of_year: u32) -> f64 {
    let angle = (360.0 / DAYS_PER_YEAR) * (day_of_year + COOPER_DAY_OFFSET) as f64;
    EARTH_AXIAL_TILT * deg_to_rad(angle).sin()
}

/// Sun height above the horizon at solar noon.
pub fn noon_altitude(latitude: f64, declination: f64) -> f64 {
    90.0 - latitude + declination
}

/// Panel inclination facing the noon sun, saturated into [0°, 90°].
pub fn optimal_tilt(noon_altitude: f64) -> f64 {
    (90.0 - noon_altitude).clamp(0.0, 90.0)
}

/// Closest configured position to `tilt` as `(index, degrees)`.
///
/// Only a strictly smaller difference replaces the current candidate, so
/// ties go to the earlier-declared position.
pub fn nearest_position(tilt: f64, positions: &MountingPositions) -> (usize, f64) {
    let slice = positions.as_slice();
    let mut best = (0, slice[0]);
    let mut min_diff = (tilt - slice[0]).abs();
    for (index, &position) in slice.iter().enumerate().skip(1) {
        let diff = (tilt - position).abs();
        if diff < min_diff {
            min_diff = diff;
            best = (index, position);
        }
    }
    best
}

pub fn compute_for_day(
    latitude: f64,
    day_of_year: u32,
    positions: &MountingPositions,
) -> AngleResult {
    let declination = solar_declination(day_of_year);
    let altitude = noon_altitude(latitude, declination);
    let exact_angle = optimal_tilt(altitude);
    let (position_index, recommended_position) = nearest_position(exact_angle, positions);
    AngleResult {
        day_of_year,
        declination,
        noon_altitude: altitude,
        exact_angle,
        recommended_position,
        position_index,
    }
}

/// Optimal tilt and nearest mounting position for `latitude` on `date`.
///
/// Latitude is not validated; out-of-range values flow through the formula
/// and the result is still clamped.
pub fn compute_optimal_angle<D: Datelike>(
    latitude: f64,
    date: &D,
    positions: &MountingPositions,
) -> AngleResult {
    compute_for_day(latitude, day_of_year(date), positions)
}
