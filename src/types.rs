use std::fmt;

use crate::error::{PanelTiltError, Result};

/// Tilt settings shipped with the reference bracket, in degrees.
pub const DEFAULT_POSITIONS: [f64; 3] = [27.0, 35.0, 42.0];

/// Ordered, non-empty set of tilt angles a bracket can physically be set to.
///
/// Declaration order matters: when two positions are equally close to the
/// optimal tilt, the one declared first is recommended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct MountingPositions(Vec<f64>);

impl MountingPositions {
    pub fn new(positions: Vec<f64>) -> Result<Self> {
        if positions.is_empty() {
            return Err(PanelTiltError::NoPositions);
        }
        if let Some(&value) = positions
            .iter()
            .find(|p| !p.is_finite() || !(0.0..=90.0).contains(*p))
        {
            return Err(PanelTiltError::InvalidPosition { value });
        }
        Ok(Self(positions))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn lowest(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn highest(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Default for MountingPositions {
    fn default() -> Self {
        Self(DEFAULT_POSITIONS.to_vec())
    }
}

impl TryFrom<Vec<f64>> for MountingPositions {
    type Error = PanelTiltError;

    fn try_from(positions: Vec<f64>) -> Result<Self> {
        Self::new(positions)
    }
}

impl From<MountingPositions> for Vec<f64> {
    fn from(positions: MountingPositions) -> Self {
        positions.0
    }
}

/// Noon-altitude tilt recommendation for one latitude and one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AngleResult {
    pub day_of_year: u32,
    pub declination: f64,
    pub noon_altitude: f64,
    /// Optimal tilt clamped to [0°, 90°], full precision.
    pub exact_angle: f64,
    pub recommended_position: f64,
    /// Index of `recommended_position` in the configured set.
    pub position_index: usize,
}

impl AngleResult {
    /// Exact angle rounded to one decimal place.
    pub fn display_angle(&self) -> f64 {
        (self.exact_angle * 10.0).round() / 10.0
    }
}

impl fmt::Display for AngleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.exact_angle)
    }
}

/// Seasonal label attached to a calendar segment, derived from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum SeasonTag {
    SummerOptimization,
    WinterOptimization,
    Transitional,
}

impl SeasonTag {
    /// Lowest configured tilt is the summer setting, highest the winter one.
    /// With a single distinct value the summer tag wins.
    pub fn for_position(position: f64, positions: &MountingPositions) -> Self {
        if position == positions.lowest() {
            SeasonTag::SummerOptimization
        } else if position == positions.highest() {
            SeasonTag::WinterOptimization
        } else {
            SeasonTag::Transitional
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeasonTag::SummerOptimization => "summer optimization",
            SeasonTag::WinterOptimization => "winter optimization",
            SeasonTag::Transitional => "transitional",
        }
    }
}

impl fmt::Display for SeasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive run of day-of-year ordinals sharing one recommended position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarSegment {
    pub start_day: u32,
    pub end_day: u32,
    pub position: f64,
    pub position_index: usize,
}

impl CalendarSegment {
    pub fn len_days(&self) -> u32 {
        self.end_day - self.start_day + 1
    }

    pub fn contains(&self, day_of_year: u32) -> bool {
        (self.start_day..=self.end_day).contains(&day_of_year)
    }

    pub fn season(&self, positions: &MountingPositions) -> SeasonTag {
        SeasonTag::for_position(self.position, positions)
    }
}

/// Named place from the static reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}
