//! Output sinks — the fixed-column tabular writer and the exception stream.
//!
//! Both sinks are generic over [`Write`] so the harnesses can drive them
//! against in-memory buffers, and both flush after every record so an
//! interrupted run leaves complete output for everything already processed.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use saucer_core::Report;

/// Column order of the tabular output. Input keys outside this set are
/// silently dropped from the CSV (they still reach the exception sink in
/// full when a record is diverted).
pub const COLUMNS: [&str; 10] = [
    "summary",
    "city",
    "state",
    "date_time",
    "shape",
    "duration",
    "stats",
    "report_link",
    "text",
    "posted",
];

/// CSV writer for clean records. The header row is written on construction.
pub struct TableSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(COLUMNS)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Write one normalized report as a row, missing fields rendered empty.
    pub fn write(&mut self, report: &Report) -> Result<()> {
        self.writer
            .write_record(COLUMNS.iter().map(|column| column_value(report, column)))?;
        self.writer.flush()?;
        Ok(())
    }
}

fn column_value(report: &Report, column: &str) -> String {
    match column {
        "posted" => report.posted.clone().unwrap_or_default(),
        "date_time" => report.date_time.clone().unwrap_or_default(),
        "shape" => report.shape.clone().unwrap_or_default(),
        "state" => report.state.clone().unwrap_or_default(),
        other => match report.extra.get(other) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(value) => value.to_string(),
        },
    }
}

/// Newline-delimited JSON writer for records that failed normalization.
pub struct ExceptionSink<W: Write> {
    out: W,
}

impl<W: Write> ExceptionSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Serialize one record as a single JSON line.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
