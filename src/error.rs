//! Error types for panel_tilt.

use thiserror::Error;

/// Result alias for panel_tilt operations.
pub type Result<T> = std::result::Result<T, PanelTiltError>;

/// Errors raised while validating inputs before any calculation runs.
///
/// The angle and calendar computations themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelTiltError {
    /// The mounting position list is empty.
    #[error("no mounting positions configured")]
    NoPositions,
    /// A mounting position is not a finite angle within [0°, 90°].
    #[error("invalid mounting position {value}° (must be between 0° and 90°)")]
    InvalidPosition { value: f64 },
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },
    /// No city with this name exists in the reference table.
    #[error("unknown location: {0}")]
    UnknownLocation(String),
    /// A required input was not provided.
    #[error("missing input: {0}")]
    MissingInput(&'static str),
}
