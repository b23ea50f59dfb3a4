//! Per-record router — the orchestration step of the pipeline.
//!
//! [`route`] attempts to normalize one report and classifies it: clean
//! records get their fields rewritten in place, failed records come back
//! untouched together with the captured failure reason. The failure path is
//! a returned variant, not an unwound error — the caller's only job is to
//! pick a sink.

use thiserror::Error;

use crate::canon::{canonical_region, canonical_shape};
use crate::report::Report;
use crate::timestamp::{normalize_timestamp, to_iso, DateParseError};

/// Why a report could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}`: {source}")]
    Timestamp {
        field: &'static str,
        #[source]
        source: DateParseError,
    },
}

/// The router's verdict on one report.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Both timestamps parsed; fields are rewritten to canonical form.
    Clean(Report),
    /// Normalization failed; the report is exactly as it was read.
    Diverted { report: Report, reason: String },
}

/// Normalize one report against the given clock.
///
/// `posted` is attempted first, then `date_time`; the first failure wins and
/// nothing is mutated on the failure path. On success both timestamp fields
/// are replaced with ISO-8601 strings and `shape`/`state` are canonicalized
/// in place. Residual keys are never touched.
pub fn route(mut report: Report, now: chrono::NaiveDateTime) -> Outcome {
    let posted = match canonical_field(&report.posted, "posted", now) {
        Ok(value) => value,
        Err(err) => {
            return Outcome::Diverted {
                reason: err.to_string(),
                report,
            }
        }
    };
    let date_time = match canonical_field(&report.date_time, "date_time", now) {
        Ok(value) => value,
        Err(err) => {
            return Outcome::Diverted {
                reason: err.to_string(),
                report,
            }
        }
    };

    report.posted = Some(posted);
    report.date_time = Some(date_time);
    report.shape = canonical_shape(report.shape.as_deref());
    report.state = canonical_region(report.state.as_deref());

    Outcome::Clean(report)
}

fn canonical_field(
    value: &Option<String>,
    field: &'static str,
    now: chrono::NaiveDateTime,
) -> Result<String, NormalizeError> {
    let raw = value
        .as_deref()
        .ok_or(NormalizeError::MissingField(field))?;
    let ts = normalize_timestamp(raw, now)
        .map_err(|source| NormalizeError::Timestamp { field, source })?;
    Ok(to_iso(ts))
}
