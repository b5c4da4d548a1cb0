#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use driver_roster::{cli, config::Config, core::DriverStore, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    let config = Config::from_args(&args);

    // Setup logging based on debug flag
    setup_logging(config.debug)?;

    let mut store = DriverStore::seeded();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute_command(&config, &mut store, &args.command, &mut out)
}
