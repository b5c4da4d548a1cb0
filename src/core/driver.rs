//! Driver records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A racing driver and their career statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Driver {
    /// Roster key; uniqueness is not enforced
    pub id: i64,
    /// Display name
    pub name: String,
    /// Race wins
    pub wins: u32,
    /// Pole positions
    pub poles: u32,
}

impl Driver {
    /// Create a new driver record
    pub fn new(id: i64, name: impl Into<String>, wins: u32, poles: u32) -> Self {
        Self {
            id,
            name: name.into(),
            wins,
            poles,
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Wins: {}, Poles: {}",
            self.id, self.name, self.wins, self.poles
        )
    }
}
