//! # Driver Roster
//!
//! A small command-line roster of racing drivers and their win/pole
//! statistics. The roster lives in memory for the lifetime of one command;
//! every run starts again from the built-in seed list.
//!
//! ## Example
//!
//! ```
//! use driver_roster::core::{Driver, DriverStore};
//!
//! let mut store = DriverStore::seeded();
//! store.add(Driver::new(4, "Max Verstappen", 50, 30));
//! store.update(1, 5, 2)?;
//! assert_eq!(store.find(1).map(|d| d.wins), Some(100));
//! # Ok::<(), driver_roster::error::RosterError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr; `RUST_LOG` takes precedence over `debug`
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
