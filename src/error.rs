//! Error types for the driver roster
//!
//! Provides structured error handling for store operations, argument
//! conversion and output.

use std::num::ParseIntError;
use thiserror::Error;

/// Main error type for the driver roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// No driver with the requested ID is in the store
    #[error("Driver not found")]
    DriverNotFound { id: i64 },

    /// A positional argument could not be converted to a number
    #[error("Invalid {field}: '{value}' is not a valid number")]
    InvalidNumber {
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A positional argument is a number outside the field's range
    #[error("Invalid {field}: '{value}' is out of range")]
    NumberOutOfRange { field: String, value: String },

    /// Applying a delta would take a counter below zero or past its maximum
    #[error("Counter out of range: {field} of driver {id} cannot change by {delta}")]
    CounterOutOfRange { id: i64, field: String, delta: i64 },

    /// Writing command output failed
    #[error("Output error: failed to write command result")]
    Output {
        #[source]
        source: std::io::Error,
    },

    /// Encoding command output as JSON failed
    #[error("Serialization error: failed to encode command result")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },
}

impl RosterError {
    /// Create a new not-found error
    pub const fn driver_not_found(id: i64) -> Self {
        Self::DriverNotFound { id }
    }

    /// Create a new invalid number error
    pub fn invalid_number(
        field: impl Into<String>,
        value: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
            source,
        }
    }

    /// Create a new number out of range error
    pub fn number_out_of_range(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NumberOutOfRange {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a new counter out of range error
    pub fn counter_out_of_range(id: i64, field: impl Into<String>, delta: i64) -> Self {
        Self::CounterOutOfRange {
            id,
            field: field.into(),
            delta,
        }
    }

    /// Whether this error is the recoverable "record not found" condition
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::DriverNotFound { .. })
    }
}

impl From<std::io::Error> for RosterError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization { source }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RosterError>;
