//! Writing close approaches to CSV or JSON.
//!
//! Each output record describes one approach together with its NEO. The
//! format is picked from the output file's extension.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::helpers::float_to_str;
use crate::models::CloseApproach;

/// Column names of the CSV output, in order.
pub const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Structured output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Picks the format from a path's extension (`.csv` or `.json`,
    /// case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(OutputFormat::Csv),
            Some("json") => Ok(OutputFormat::Json),
            _ => Err(StoreError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: String,
    potentially_hazardous: &'static str,
}

impl<'a> CsvRow<'a> {
    fn from_approach(approach: &'a CloseApproach) -> Self {
        let neo = approach.neo.as_deref();
        CsvRow {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            designation: &approach.designation,
            name: neo.and_then(|n| n.name.as_deref()).unwrap_or_default(),
            diameter_km: float_to_str(neo.map_or(f64::NAN, |n| n.diameter)),
            potentially_hazardous: if neo.is_some_and(|n| n.hazardous) {
                "True"
            } else {
                "False"
            },
        }
    }
}

#[derive(Serialize)]
struct JsonApproach<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: JsonNeo<'a>,
}

#[derive(Serialize)]
struct JsonNeo<'a> {
    designation: &'a str,
    name: &'a str,
    // null when unknown
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

impl<'a> JsonApproach<'a> {
    fn from_approach(approach: &'a CloseApproach) -> Self {
        let neo = approach.neo.as_deref();
        JsonApproach {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            neo: JsonNeo {
                designation: &approach.designation,
                name: neo.and_then(|n| n.name.as_deref()).unwrap_or_default(),
                diameter_km: neo.map(|n| n.diameter).filter(|d| !d.is_nan()),
                potentially_hazardous: neo.is_some_and(|n| n.hazardous),
            },
        }
    }
}

/// Writes approaches as CSV rows, header first. Returns the row count.
pub fn csv_to_writer<'a, W, I>(results: I, writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for approach in results {
        wtr.serialize(CsvRow::from_approach(approach))?;
        rows += 1;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(rows)
}

/// Writes approaches as a JSON array. Returns the element count.
pub fn json_to_writer<'a, W, I>(results: I, writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let records: Vec<JsonApproach<'a>> = results
        .into_iter()
        .map(JsonApproach::from_approach)
        .collect();
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(records.len())
}

/// Writes approaches to a CSV file.
pub fn write_to_csv<'a, I>(results: I, path: impl AsRef<Path>) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let rows = csv_to_writer(results, BufWriter::new(file))?;
    debug!(path = %path.display(), rows, "wrote CSV");
    Ok(rows)
}

/// Writes approaches to a JSON file.
pub fn write_to_json<'a, I>(results: I, path: impl AsRef<Path>) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let rows = json_to_writer(results, &mut writer)?;
    writer.flush().map_err(|e| StoreError::io(path, e))?;
    debug!(path = %path.display(), rows, "wrote JSON");
    Ok(rows)
}

/// Writes approaches to `path` in the format its extension names.
pub fn write_results<'a, I>(results: I, path: impl AsRef<Path>) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let path = path.as_ref();
    match OutputFormat::from_path(path)? {
        OutputFormat::Csv => write_to_csv(results, path),
        OutputFormat::Json => write_to_json(results, path),
    }
}
