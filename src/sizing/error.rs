use thiserror::Error;

/// Reasons a sizing request is rejected before any computation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("unknown altitude band: {0:?}")]
    UnknownAltitudeBand(String),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("air density resolved to {0} kg/m³; the drag balance is undefined in vacuum")]
    NonPositiveDensity(f64),
}
