//! Numeric argument conversion
//!
//! Positional arguments arrive as text. How a value that is not a number, or
//! is out of range for its field, is handled depends on the configured
//! [`NumberPolicy`].

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::{
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};
use tracing::warn;

/// Handling of positional arguments that are not valid numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPolicy {
    /// Reject the command with an error
    #[default]
    Strict,
    /// Legacy behavior: treat the value as zero
    Lenient,
}

/// Converts positional arguments to integers according to a policy
#[derive(Debug, Clone, Copy)]
pub struct NumberParser {
    policy: NumberPolicy,
}

impl NumberParser {
    #[must_use]
    pub const fn new(policy: NumberPolicy) -> Self {
        Self { policy }
    }

    /// Parse `raw` as the named field
    pub fn parse<T>(&self, field: &str, raw: &str) -> Result<T>
    where
        T: FromStr<Err = ParseIntError> + Default,
    {
        match raw.parse::<T>() {
            Ok(value) => Ok(value),
            Err(e) => {
                let error = match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        RosterError::number_out_of_range(field, raw)
                    }
                    _ => RosterError::invalid_number(field, raw, e),
                };
                self.fallback(error)
            }
        }
    }

    /// Parse `raw` as a non-negative counter such as wins or poles
    pub fn parse_count(&self, field: &str, raw: &str) -> Result<u32> {
        let value: i64 = self.parse(field, raw)?;
        match u32::try_from(value) {
            Ok(count) => Ok(count),
            Err(_) => self.fallback(RosterError::number_out_of_range(field, raw)),
        }
    }

    fn fallback<T: Default>(&self, error: RosterError) -> Result<T> {
        match self.policy {
            NumberPolicy::Strict => Err(error),
            NumberPolicy::Lenient => {
                warn!("Treating value as 0: {}", error);
                Ok(T::default())
            }
        }
    }
}
