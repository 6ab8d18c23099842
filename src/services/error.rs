//! Failure kinds for game service calls
//!
//! Every kind ends up in the output field rather than leaving a call silently
//! pending.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The service could not be reached or the transfer broke off
    #[error("could not reach the game service: {0}")]
    Network(String),

    /// The reply arrived but did not have the expected shape
    #[error("malformed reply from the game service: {0}")]
    Malformed(String),

    /// Non-success status with no usable body
    #[error("game service answered with HTTP {0}")]
    Status(u16),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ServiceError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            ServiceError::Status(status.as_u16())
        } else {
            ServiceError::Network(e.to_string())
        }
    }
}
