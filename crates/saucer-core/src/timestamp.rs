//! Date normalization — ambiguous scraped timestamps into canonical form.
//!
//! Scraped reports carry timestamps in one of two formats: `07/04/21 13:45`
//! (24-hour) or the short `07/04/21` (implicit midnight). Years are two
//! digits, so a parsed value landing in the future means the wrong century
//! was assumed and 100 years are subtracted. The caller supplies `now` so
//! that boundary is deterministic under test.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Long scraped format, tried first.
const LONG_FORMAT: &str = "%m/%d/%y %H:%M";
/// Short scraped format, the fallback. Trailing input is rejected.
const SHORT_FORMAT: &str = "%m/%d/%y";
/// Canonical rendering. Naive local time — the inputs carry no timezone.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Failure to turn a scraped timestamp string into a canonical one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The string matched neither accepted format.
    #[error("timestamp {0:?} matches neither \"%m/%d/%y %H:%M\" nor \"%m/%d/%y\"")]
    UnrecognizedFormat(String),
    /// Century correction produced a date that does not exist
    /// (Feb 29 mapped onto a non-leap year).
    #[error("no valid date 100 years before {0}")]
    CenturyOverflow(NaiveDateTime),
}

/// Parse a scraped timestamp, correcting the century when the two-digit year
/// resolves to a date after `now`.
pub fn normalize_timestamp(s: &str, now: NaiveDateTime) -> Result<NaiveDateTime, DateParseError> {
    let parsed = NaiveDateTime::parse_from_str(s, LONG_FORMAT)
        .or_else(|_| {
            NaiveDate::parse_from_str(s, SHORT_FORMAT).map(|date| date.and_time(NaiveTime::MIN))
        })
        .map_err(|_| DateParseError::UnrecognizedFormat(s.to_string()))?;

    if parsed > now {
        parsed
            .with_year(parsed.year() - 100)
            .ok_or(DateParseError::CenturyOverflow(parsed))
    } else {
        Ok(parsed)
    }
}

/// Render a timestamp in the canonical ISO-8601 form (`2021-07-04T13:45:00`).
pub fn to_iso(ts: NaiveDateTime) -> String {
    ts.format(ISO_FORMAT).to_string()
}
