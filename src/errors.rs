// errors.rs
use crate::lookup::LookupError;
use thiserror::Error;

/// Errors raised at the edges of an analysis: caller input that cannot be
/// turned into a subject property, bad configuration, or a failed load.
///
/// The scenario engine itself never fails once it has a valid subject.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid property: {0}")]
    InvalidProperty(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
