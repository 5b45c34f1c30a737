//! Static city table and location resolution.
//!
//! Only latitude feeds the tilt calculation; longitude is kept for labels.

use std::fmt;

use crate::error::{PanelTiltError, Result};
use crate::types::City;

/// The twenty largest French cities.
pub const FRENCH_CITIES: [City; 20] = [
    City { name: "Paris", latitude: 48.8566, longitude: 2.3522 },
    City { name: "Marseille", latitude: 43.2965, longitude: 5.3698 },
    City { name: "Lyon", latitude: 45.7640, longitude: 4.8357 },
    City { name: "Toulouse", latitude: 43.6047, longitude: 1.4442 },
    City { name: "Nice", latitude: 43.7102, longitude: 7.2620 },
    City { name: "Nantes", latitude: 47.2184, longitude: -1.5536 },
    City { name: "Strasbourg", latitude: 48.5734, longitude: 7.7521 },
    City { name: "Montpellier", latitude: 43.6108, longitude: 3.8767 },
    City { name: "Bordeaux", latitude: 44.8378, longitude: -0.5792 },
    City { name: "Lille", latitude: 50.6292, longitude: 3.0573 },
    City { name: "Rennes", latitude: 48.1173, longitude: -1.6778 },
    City { name: "Reims", latitude: 49.2583, longitude: 4.0317 },
    City { name: "Saint-Étienne", latitude: 45.4397, longitude: 4.3872 },
    City { name: "Le Havre", latitude: 49.4944, longitude: 0.1079 },
    City { name: "Toulon", latitude: 43.1242, longitude: 5.9280 },
    City { name: "Grenoble", latitude: 45.1885, longitude: 5.7245 },
    City { name: "Dijon", latitude: 47.3220, longitude: 5.0415 },
    City { name: "Angers", latitude: 47.4784, longitude: -0.5632 },
    City { name: "Nîmes", latitude: 43.8367, longitude: 4.3601 },
    City { name: "Clermont-Ferrand", latitude: 45.7772, longitude: 3.0870 },
];

/// Case-insensitive exact-name lookup in [`FRENCH_CITIES`].
pub fn find_city(name: &str) -> Option<&'static City> {
    let wanted = name.trim().to_lowercase();
    FRENCH_CITIES
        .iter()
        .find(|city| city.name.to_lowercase() == wanted)
}

/// Where the panel is installed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    City(&'static City),
    Coordinates { latitude: f64, longitude: f64 },
}

impl Location {
    pub fn city(name: &str) -> Result<Self> {
        find_city(name)
            .map(Location::City)
            .ok_or_else(|| PanelTiltError::UnknownLocation(name.to_string()))
    }

    pub fn from_coordinates(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(PanelTiltError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(PanelTiltError::InvalidLongitude { value: longitude });
        }
        Ok(Location::Coordinates {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        match self {
            Location::City(city) => city.latitude,
            Location::Coordinates { latitude, .. } => *latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        match self {
            Location::City(city) => city.longitude,
            Location::Coordinates { longitude, .. } => *longitude,
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::City(city) => f.write_str(city.name),
            Location::Coordinates {
                latitude,
                longitude,
            } => {
                let ns = if *latitude < 0.0 { 'S' } else { 'N' };
                let ew = if *longitude < 0.0 { 'W' } else { 'E' };
                write!(
                    f,
                    "{:.4}°{}, {:.4}°{}",
                    latitude.abs(),
                    ns,
                    longitude.abs(),
                    ew
                )
            }
        }
    }
}
