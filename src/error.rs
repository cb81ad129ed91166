use thiserror::Error;

use crate::strategy::Strategy;

pub type Result<T> = std::result::Result<T, PhotolysisError>;

/// Errors raised while selecting a strategy, running an engine or remapping channels.
///
/// Every variant aborts the whole call: a rate set with silently missing
/// entries is never returned.
#[derive(Error, Debug)]
pub enum PhotolysisError {
    #[error(
        "invalid photolysis strategy '{value}': expected one of 0 or \"MCM\", 1 or \"BOTTOMUP\", 2 or \"HYBRID\""
    )]
    InvalidStrategy { value: String },

    #[error("strategy {strategy} requires input '{field}' but it was not supplied")]
    MissingInput {
        strategy: Strategy,
        field: &'static str,
    },

    #[error("channel '{channel}' required by output '{output}' was not produced by the engine")]
    UnknownChannel { channel: String, output: &'static str },

    #[error("mapping table entry '{output}' has no terms")]
    EmptyMappingEntry { output: &'static str },

    #[error("'{field}' has {found} values but {expected} were expected")]
    ShapeMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("{engine} engine failed: {message}")]
    Engine {
        engine: &'static str,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PhotolysisError {
    pub(crate) fn engine(engine: &'static str, message: impl Into<String>) -> Self {
        PhotolysisError::Engine {
            engine,
            message: message.into(),
        }
    }

    pub(crate) fn shape(field: impl Into<String>, expected: usize, found: usize) -> Self {
        PhotolysisError::ShapeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }
}
