//! Errors of the console layer.
//!
//! Rejected boxes are reported to the user and entered again, so `Domain`
//! only carries errors the prompts already rule out.

use thiserror::Error;

use warehouse_core::DomainError;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input ended while a value was still expected.
    #[error("input ended before the session was complete")]
    Eof,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
