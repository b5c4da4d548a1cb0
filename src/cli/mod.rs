//! Command-line interface module
//!
//! Provides argument parsing, command dispatch and result rendering.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{parse_args, Args, Command, DriverCommand};
pub use commands::execute_command;
