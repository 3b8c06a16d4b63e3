//! Domain error model.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised by the operation that detects it (construction or
/// `add_box`). Nothing is retried inside the domain; re-prompting belongs to
/// whoever collects the input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Width, height or depth was not a finite value greater than zero.
    #[error("{dimension} must be greater than zero (got {value})")]
    InvalidDimension { dimension: &'static str, value: f64 },

    /// Weight was not a finite value greater than zero.
    #[error("weight must be greater than zero (got {value})")]
    InvalidWeight { value: f64 },

    /// Production date falls after the expiry date.
    #[error("production date {production} is after expiry date {expiry}")]
    InvalidDateRange {
        production: NaiveDate,
        expiry: NaiveDate,
    },

    /// Deriving the expiry date from the production date left the calendar.
    #[error("expiry derived from production date {production} is out of range")]
    DateOutOfRange { production: NaiveDate },

    /// No box was supplied to a pallet.
    #[error("no box supplied")]
    MissingBox,

    /// Box footprint exceeds the pallet footprint.
    #[error(
        "box {box_width}x{box_depth} does not fit on pallet {pallet_width}x{pallet_depth} (width x depth)"
    )]
    BoxTooLarge {
        box_width: f64,
        box_depth: f64,
        pallet_width: f64,
        pallet_depth: f64,
    },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_dimension(dimension: &'static str, value: f64) -> Self {
        Self::InvalidDimension { dimension, value }
    }

    pub fn invalid_weight(value: f64) -> Self {
        Self::InvalidWeight { value }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = DomainError::invalid_dimension("width", -1.5);
        assert_eq!(err.to_string(), "width must be greater than zero (got -1.5)");

        let err = DomainError::invalid_weight(0.0);
        assert_eq!(err.to_string(), "weight must be greater than zero (got 0)");
    }

    #[test]
    fn date_range_message_uses_iso_dates() {
        let err = DomainError::InvalidDateRange {
            production: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
            expiry: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "production date 2023-05-02 is after expiry date 2023-05-01"
        );
    }
}
