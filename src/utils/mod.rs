//! Utility modules for common functionality

pub mod numbers;

pub use numbers::{NumberParser, NumberPolicy};
