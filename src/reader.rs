//! Record reader — a lazy sequence of decoded reports from an NDJSON source.

use std::io::BufRead;

use saucer_core::Report;

/// One input line, decoded or not.
#[derive(Debug)]
pub enum RawLine {
    /// The line held a JSON object. `raw` is kept alongside the decoded
    /// report so a diverted record can be re-serialized with every original
    /// key verbatim, explicit nulls included.
    Parsed { report: Report, raw: String },
    /// The line was not valid JSON. `raw` is preserved so the record can
    /// still be routed to the exception sink instead of being dropped.
    Malformed {
        raw: String,
        error: serde_json::Error,
    },
}

/// Iterate reports lazily from an NDJSON source. Whitespace-only lines are
/// not records and are skipped; I/O errors surface to the caller.
pub fn read_reports<R: BufRead>(input: R) -> impl Iterator<Item = std::io::Result<RawLine>> {
    input
        .lines()
        .filter(|line| match line {
            Ok(raw) => !raw.trim().is_empty(),
            Err(_) => true,
        })
        .map(|line| {
            line.map(|raw| match serde_json::from_str::<Report>(&raw) {
                Ok(report) => RawLine::Parsed { report, raw },
                Err(error) => RawLine::Malformed { raw, error },
            })
        })
}
