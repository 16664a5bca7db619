use thiserror::Error;

/// Failure of the external property/comp lookup service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LookupError {
    #[error("Lookup service unavailable: {0}")]
    Unavailable(String),

    #[error("Lookup timed out: {0}")]
    Timeout(String),

    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),

    #[error("Property not found: {0}")]
    NotFound(String),
}

/// Why a single raw listing could not become a comp.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListingError {
    #[error("missing or non-positive price")]
    MissingPrice,

    #[error("missing or non-positive living area")]
    MissingLivingArea,

    #[error("missing {0}")]
    MissingField(&'static str),
}
