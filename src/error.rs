use polars::prelude::PolarsError;
use std::io;

/// Problems turning raw trip text into a [`TripInput`](crate::TripInput).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid {field} date-time '{value}' (expected YYYY-MM-DDTHH:MM)")]
    InvalidDateTime { field: &'static str, value: String },

    #[error("{field} date-time '{value}' leaves no room for a full plan")]
    OutOfRange { field: &'static str, value: String },

    #[error("invalid {field} time '{value}' (expected HH:MM)")]
    InvalidClockTime { field: &'static str, value: String },

    #[error("unknown adjustment strategy '{0}' (expected after-arrival, on-plane or before-departure)")]
    UnknownStrategy(String),

    #[error("missing {0}")]
    Missing(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataframe conversion error: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
