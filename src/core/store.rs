//! In-memory driver store
//!
//! An ordered sequence of driver records. Every operation is a linear scan;
//! lookups by ID always resolve to the first matching record.

use crate::{
    core::driver::Driver,
    error::{Result, RosterError},
};
use tracing::{debug, instrument, warn};

/// Ordered collection of drivers owned by the running process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverStore {
    drivers: Vec<Driver>,
}

impl DriverStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in roster
    pub fn seeded() -> Self {
        Self::from_drivers(vec![
            Driver::new(1, "Lewis Hamilton", 95, 98),
            Driver::new(2, "Sebastian Vettel", 53, 57),
            Driver::new(3, "Ayrton Senna", 41, 65),
        ])
    }

    /// Create a store from an existing sequence, keeping its order
    pub fn from_drivers(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    /// All drivers in insertion order
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Append a driver to the end of the roster.
    ///
    /// A record whose ID is already present is still appended; it stays
    /// shadowed by the earlier record until that one is deleted.
    #[instrument(skip(self, driver), fields(id = driver.id))]
    pub fn add(&mut self, driver: Driver) -> &Driver {
        if self.find(driver.id).is_some() {
            warn!(
                "Driver ID {} already exists, new record will be shadowed",
                driver.id
            );
        }

        let index = self.drivers.len();
        self.drivers.push(driver);
        debug!("Store now holds {} drivers", self.drivers.len());
        &self.drivers[index]
    }

    /// Find the first driver with the given ID
    pub fn find(&self, id: i64) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id == id)
    }

    /// Add `wins_delta` and `poles_delta` to the first driver with the given ID.
    ///
    /// Deltas may be negative, but neither counter may drop below zero or
    /// exceed `u32::MAX`; if either would, the record is left unchanged.
    #[instrument(skip(self))]
    pub fn update(&mut self, id: i64, wins_delta: i64, poles_delta: i64) -> Result<&Driver> {
        let index = self
            .position(id)
            .ok_or(RosterError::driver_not_found(id))?;
        let driver = &mut self.drivers[index];

        // Check both counters before touching either
        let wins = apply_delta(driver.wins, wins_delta)
            .ok_or_else(|| RosterError::counter_out_of_range(id, "wins", wins_delta))?;
        let poles = apply_delta(driver.poles, poles_delta)
            .ok_or_else(|| RosterError::counter_out_of_range(id, "poles", poles_delta))?;

        driver.wins = wins;
        driver.poles = poles;
        debug!("Driver {} now has {} wins, {} poles", id, wins, poles);
        Ok(&*driver)
    }

    /// Remove the first driver with the given ID and return it
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: i64) -> Result<Driver> {
        let index = self
            .position(id)
            .ok_or(RosterError::driver_not_found(id))?;
        let removed = self.drivers.remove(index);
        debug!("Removed driver at position {}", index);
        Ok(removed)
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.drivers.iter().position(|driver| driver.id == id)
    }
}

fn apply_delta(count: u32, delta: i64) -> Option<u32> {
    i64::from(count)
        .checked_add(delta)
        .and_then(|value| u32::try_from(value).ok())
}
