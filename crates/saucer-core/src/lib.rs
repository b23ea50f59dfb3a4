//! saucer-core — record types and normalization rules for saucer.
//!
//! This crate holds everything about a sighting report that does not touch
//! I/O: the record model, timestamp normalization, categorical field
//! canonicalization, and the per-record router that decides whether a record
//! is clean or belongs in the exception stream.
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
//! The reader and both sinks live in the `saucer` binary crate; everything
//! here is pure and synchronous.

pub mod canon;
pub mod report;
pub mod router;
pub mod timestamp;

pub use report::Report;
pub use router::{route, NormalizeError, Outcome};
pub use timestamp::{normalize_timestamp, DateParseError};
