//! Command-line argument parsing

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Driver roster - track racing drivers and their win/pole statistics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "roster")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Treat arguments that are not numbers as 0 instead of rejecting them
    #[arg(long, global = true)]
    pub lenient_numbers: bool,

    /// Output format for command results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Driver operations
    #[command(subcommand)]
    Driver(DriverCommand),
}

/// Driver operations.
///
/// Numeric arguments are kept as text here and converted by the command
/// layer, so the number policy decides what an invalid value means.
#[derive(Subcommand, Debug)]
pub enum DriverCommand {
    /// Get all drivers, or a single driver by ID
    Get {
        /// Driver ID
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Add a new driver
    Add {
        /// Driver ID
        #[arg(allow_hyphen_values = true)]
        id: String,
        /// Driver name
        name: String,
        /// Race wins
        #[arg(allow_hyphen_values = true)]
        wins: String,
        /// Pole positions
        #[arg(allow_hyphen_values = true)]
        poles: String,
    },

    /// Update a driver by ID, adding to its wins and poles
    Update {
        /// Driver ID
        #[arg(allow_hyphen_values = true)]
        id: String,
        /// Wins to add (negative to subtract)
        #[arg(allow_hyphen_values = true)]
        wins: String,
        /// Poles to add (negative to subtract)
        #[arg(allow_hyphen_values = true)]
        poles: String,
    },

    /// Delete a driver by ID
    Delete {
        /// Driver ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
