//! Error types for intensity transforms.

use thiserror::Error;

/// Error type for intensity transforms.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for intensity transforms.
pub type OpsResult<T> = Result<T, OpsError>;
