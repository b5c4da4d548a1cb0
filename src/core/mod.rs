//! Core roster functionality
//!
//! Contains the driver record and the in-memory store that owns them.

pub mod driver;
pub mod store;

pub use driver::Driver;
pub use store::DriverStore;
