//! Rendering of command results

use crate::{config::OutputFormat, core::Driver, error::Result};
use serde::Serialize;
use serde_json::json;
use std::io::Write;

/// Message printed when a lookup, update or delete finds no record
pub const NOT_FOUND: &str = "Driver not found";

/// Writes command results to a sink in the configured format
pub struct Printer<'a, W: Write> {
    format: OutputFormat,
    out: &'a mut W,
}

impl<'a, W: Write> Printer<'a, W> {
    /// Create a printer writing to `out`
    pub fn new(format: OutputFormat, out: &'a mut W) -> Self {
        Self { format, out }
    }

    /// Print every driver, one per line
    pub fn drivers(&mut self, drivers: &[Driver]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for driver in drivers {
                    writeln!(self.out, "{driver}")?;
                }
                Ok(())
            }
            OutputFormat::Json => self.json(drivers),
        }
    }

    /// Print a single driver
    pub fn driver(&mut self, driver: &Driver) -> Result<()> {
        match self.format {
            OutputFormat::Text => Ok(writeln!(self.out, "{driver}")?),
            OutputFormat::Json => self.json(driver),
        }
    }

    /// Print a newly added driver
    pub fn added(&mut self, driver: &Driver) -> Result<()> {
        match self.format {
            OutputFormat::Text => Ok(writeln!(self.out, "Added driver: {driver}")?),
            OutputFormat::Json => self.json(driver),
        }
    }

    /// Print a driver after its counters changed
    pub fn updated(&mut self, driver: &Driver) -> Result<()> {
        match self.format {
            OutputFormat::Text => Ok(writeln!(self.out, "Updated driver: {driver}")?),
            OutputFormat::Json => self.json(driver),
        }
    }

    /// Print the outcome of a successful delete
    pub fn deleted(&mut self, driver: &Driver) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                Ok(writeln!(self.out, "Deleted driver with ID {}", driver.id)?)
            }
            OutputFormat::Json => self.json(&json!({ "deleted": driver })),
        }
    }

    /// Print the not-found message for `id`
    pub fn not_found(&mut self, id: i64) -> Result<()> {
        match self.format {
            OutputFormat::Text => Ok(writeln!(self.out, "{NOT_FOUND}")?),
            OutputFormat::Json => self.json(&json!({ "error": NOT_FOUND, "id": id })),
        }
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut *self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(
        format: OutputFormat,
        f: impl FnOnce(&mut Printer<'_, Vec<u8>>) -> Result<()>,
    ) -> String {
        let mut buf = Vec::new();
        let mut printer = Printer::new(format, &mut buf);
        f(&mut printer).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_lines() {
        let driver = Driver::new(2, "Sebastian Vettel", 53, 57);

        assert_eq!(
            render(OutputFormat::Text, |p| p.added(&driver)),
            "Added driver: ID: 2, Name: Sebastian Vettel, Wins: 53, Poles: 57\n"
        );
        assert_eq!(
            render(OutputFormat::Text, |p| p.deleted(&driver)),
            "Deleted driver with ID 2\n"
        );
        assert_eq!(
            render(OutputFormat::Text, |p| p.not_found(2)),
            "Driver not found\n"
        );
    }

    #[test]
    fn test_json_documents() {
        let drivers = vec![Driver::new(1, "A", 1, 2), Driver::new(2, "B", 3, 4)];

        let listed = render(OutputFormat::Json, |p| p.drivers(&drivers));
        let value: serde_json::Value = serde_json::from_str(listed.trim()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["name"], "B");

        let deleted = render(OutputFormat::Json, |p| p.deleted(&drivers[0]));
        let value: serde_json::Value = serde_json::from_str(deleted.trim()).unwrap();
        assert_eq!(value["deleted"]["id"], 1);

        let missing = render(OutputFormat::Json, |p| p.not_found(99));
        let value: serde_json::Value = serde_json::from_str(missing.trim()).unwrap();
        assert_eq!(value, json!({"error": "Driver not found", "id": 99}));
    }
}
