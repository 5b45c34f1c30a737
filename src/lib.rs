//! Seasonal tilt guidance for solar panels on adjustable brackets.
//!
//! The tilt for a day is the complement of the sun's noon altitude, using
//! Cooper's declination formula. It is snapped to the nearest of a small set
//! of mounting positions, and a year is split into runs of days sharing the
//! same position. This is a rough noon-altitude model: no equation of time,
//! refraction or hour-angle integration.

mod trace;

pub mod angles;
pub mod calendar;
pub mod error;
pub mod locations;
pub mod types;

pub use angles::{
    compute_for_day, compute_optimal_angle, day_of_year, deg_to_rad, nearest_position,
    noon_altitude, optimal_tilt, solar_declination, COOPER_DAY_OFFSET, DAYS_PER_YEAR,
    EARTH_AXIAL_TILT,
};

pub use calendar::{build_yearly_calendar, daily_results, segment, YearlyCalendar, DAYS_EVALUATED};

pub use error::{PanelTiltError, Result};

pub use locations::{find_city, Location, FRENCH_CITIES};

pub use types::{
    AngleResult, CalendarSegment, City, MountingPositions, SeasonTag, DEFAULT_POSITIONS,
};
