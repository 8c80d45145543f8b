//! List output formatting.
//!
//! Rooms, employees and reservations are printed as a table (the default),
//! JSON, CSV or TSV.

use std::io::Write;

use clap::ValueEnum;
use roombook::{Employee, ReservationDetails, Room};
use serde::Serialize;

use crate::error::CliError;

/// Output format for list commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

/// A record that can be printed as one row.
pub trait Tabular: Serialize {
    /// Column headers for delimited output.
    const HEADERS: &'static [&'static str];

    /// The row's fields, in header order.
    fn record(&self) -> Vec<String>;
}

impl Tabular for Room {
    const HEADERS: &'static [&'static str] = &["id", "name", "capacity", "resources"];

    fn record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.capacity.to_string(),
            self.resources.clone(),
        ]
    }
}

impl Tabular for Employee {
    const HEADERS: &'static [&'static str] = &["id", "name", "email", "department"];

    fn record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.department.clone(),
        ]
    }
}

impl Tabular for ReservationDetails {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "room_id",
        "room",
        "employee_id",
        "employee",
        "date",
        "start",
        "end",
    ];

    fn record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.room_id.to_string(),
            self.room_name.clone(),
            self.employee_id.to_string(),
            self.employee_name.clone(),
            self.date.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
        ]
    }
}

/// Write `items` to `out` in the given format.
pub fn write_records<T: Tabular, W: Write>(
    out: &mut W,
    format: OutputFormat,
    items: &[T],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => Ok(write_table(out, items)?),
        OutputFormat::Json => write_json(out, items),
        OutputFormat::Csv => write_delimited(out, items, b','),
        OutputFormat::Tsv => write_delimited(out, items, b'\t'),
    }
}

/// Format records as a human-readable table.
pub fn write_table<T: Tabular, W: Write>(out: &mut W, items: &[T]) -> std::io::Result<()> {
    let header_line = T::HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for item in items {
        let fields = item
            .record()
            .into_iter()
            .map(|field| if field.is_empty() { "-".to_string() } else { field })
            .collect::<Vec<_>>();
        writeln!(out, "{}", fields.join("\t"))?;
    }

    Ok(())
}

fn write_json<T: Tabular, W: Write>(out: &mut W, items: &[T]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, items)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn write_delimited<T: Tabular, W: Write>(
    out: &mut W,
    items: &[T],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(T::HEADERS).map_err(csv_error)?;
    for item in items {
        writer.write_record(item.record()).map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
