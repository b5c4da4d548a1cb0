//! Command implementations for the CLI

use crate::{
    cli::{Command, DriverCommand, output::Printer},
    config::Config,
    core::{Driver, DriverStore},
    utils::numbers::NumberParser,
};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Execute the appropriate command against the store, writing results to `out`
#[instrument(skip(config, store, out))]
pub fn execute_command<W: Write>(
    config: &Config,
    store: &mut DriverStore,
    command: &Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Driver(driver_command) => {
            execute_driver_command(config, store, driver_command, out)
        }
    }
}

fn execute_driver_command<W: Write>(
    config: &Config,
    store: &mut DriverStore,
    command: &DriverCommand,
    out: &mut W,
) -> anyhow::Result<()> {
    let parser = NumberParser::new(config.number_policy);
    let mut printer = Printer::new(config.output, out);

    match command {
        DriverCommand::Get { id: None } => execute_list_command(store, &mut printer),
        DriverCommand::Get { id: Some(id) } => {
            execute_get_command(store, &mut printer, parser.parse("id", id)?)
        }
        DriverCommand::Add {
            id,
            name,
            wins,
            poles,
        } => {
            let driver = Driver::new(
                parser.parse("id", id)?,
                name.clone(),
                parser.parse_count("wins", wins)?,
                parser.parse_count("poles", poles)?,
            );
            execute_add_command(store, &mut printer, driver)
        }
        DriverCommand::Update { id, wins, poles } => execute_update_command(
            store,
            &mut printer,
            parser.parse("id", id)?,
            parser.parse("wins", wins)?,
            parser.parse("poles", poles)?,
        ),
        DriverCommand::Delete { id } => {
            execute_delete_command(store, &mut printer, parser.parse("id", id)?)
        }
    }
}

/// Execute the list-all command
#[instrument(skip_all)]
fn execute_list_command<W: Write>(
    store: &DriverStore,
    printer: &mut Printer<'_, W>,
) -> anyhow::Result<()> {
    debug!("Listing {} drivers", store.len());
    printer
        .drivers(store.drivers())
        .context("Failed to print drivers")
}

/// Execute the single lookup command
#[instrument(skip(store, printer))]
fn execute_get_command<W: Write>(
    store: &DriverStore,
    printer: &mut Printer<'_, W>,
    id: i64,
) -> anyhow::Result<()> {
    let result = match store.find(id) {
        Some(driver) => printer.driver(driver),
        None => {
            debug!("No driver with ID {}", id);
            printer.not_found(id)
        }
    };
    result.context("Failed to print driver")
}

/// Execute the add command
#[instrument(skip(store, printer))]
fn execute_add_command<W: Write>(
    store: &mut DriverStore,
    printer: &mut Printer<'_, W>,
    driver: Driver,
) -> anyhow::Result<()> {
    let added = store.add(driver);
    info!("Added driver {}", added.id);
    printer.added(added).context("Failed to print added driver")
}

/// Execute the update command
#[instrument(skip(store, printer))]
fn execute_update_command<W: Write>(
    store: &mut DriverStore,
    printer: &mut Printer<'_, W>,
    id: i64,
    wins: i64,
    poles: i64,
) -> anyhow::Result<()> {
    let result = match store.update(id, wins, poles) {
        Ok(updated) => {
            info!("Updated driver {}", id);
            printer.updated(updated)
        }
        Err(e) if e.is_not_found() => printer.not_found(id),
        Err(e) => return Err(e).context(format!("Failed to update driver {id}")),
    };
    result.context("Failed to print updated driver")
}

/// Execute the delete command
#[instrument(skip(store, printer))]
fn execute_delete_command<W: Write>(
    store: &mut DriverStore,
    printer: &mut Printer<'_, W>,
    id: i64,
) -> anyhow::Result<()> {
    let result = match store.delete(id) {
        Ok(removed) => {
            info!("Deleted driver {}", id);
            printer.deleted(&removed)
        }
        Err(e) if e.is_not_found() => printer.not_found(id),
        Err(e) => return Err(e).context(format!("Failed to delete driver {id}")),
    };
    result.context("Failed to print deleted driver")
}
