//! Configuration management for the roster
//!
//! Centralizes the options that shape how commands parse and print.

use crate::{cli::Args, utils::numbers::NumberPolicy};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Handling of positional arguments that are not numbers
    pub number_policy: NumberPolicy,
    /// Format of command results on stdout
    pub output: OutputFormat,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per record
    #[default]
    Text,
    /// One JSON document per line
    Json,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        let number_policy = if args.lenient_numbers {
            NumberPolicy::Lenient
        } else {
            NumberPolicy::Strict
        };

        Self {
            debug: args.debug,
            number_policy,
            output: args.format,
        }
    }
}
