//! saucer — cleans scraped sighting reports into tidy tabular records.
//!
//! Reads newline-delimited JSON reports, normalizes timestamps and the
//! categorical `shape`/`state` fields, and writes clean records to a fixed
//! 10-column CSV. Records that cannot be normalized are never dropped: they
//! go to an exception file, annotated with the failure reason, for manual
//! review. The I/O plumbing lives here; all normalization rules live in
//! [`saucer_core`].
//!
//! # Architecture
//!
//! ```text
//! Reader ──► Router ──► { Date Normalizer, Field Canonicalizer }
//!               │
//!               ├──► tabular sink     (clean records)
//!               └──► exception sink   (failed records, annotated)
//! ```
//!
//! Strictly synchronous and single-threaded: each record is fully resolved
//! to exactly one sink before the next line is read, and both sinks flush
//! per record so partial progress survives an abrupt stop.

pub mod pipeline;
pub mod reader;
pub mod sink;

pub use pipeline::{run, run_at, RunStats};
