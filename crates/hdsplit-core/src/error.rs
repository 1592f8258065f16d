//! Error types for the hdsplit-core library.

use thiserror::Error;

/// Main error type for the hdsplit library.
#[derive(Error, Debug)]
pub enum HdsplitError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Per-record input error.
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised at setup time. Fatal to splitter construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configured extractor regex does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An extractor regex defines fewer than two capture groups. Group 1
    /// is the fallback output key, group 2 the output value.
    #[error("pattern `{pattern}` must have at least two capture groups")]
    TooFewCaptureGroups { pattern: String },
}

/// Errors raised while processing a single record.
///
/// These reject the record but are recoverable: the caller decides whether
/// to drop, re-route, or halt.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The record or its designated field has an incompatible type.
    #[error("invalid input type {type_name} with value {value} in record {record}")]
    InvalidInputType {
        type_name: String,
        value: String,
        record: String,
    },
}

/// Result type for the hdsplit library.
pub type Result<T> = std::result::Result<T, HdsplitError>;
