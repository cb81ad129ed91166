use thiserror::Error;

use crate::strategy::Strategy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("end_date cannot be earlier than start_date")]
    DateOrder,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hourly_increment should be one of 1, 2, 3, 4, 6, 8, 12")]
    HourlyIncrement,

    #[error(
        "strategy {0} needs a measured actinic flux, which a run configuration cannot supply; use MCM or HYBRID"
    )]
    UnsupportedStrategy(Strategy),

    #[error("Invalid site: {0}")]
    Site(String),

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}
