//! The sighting report record model.
//!
//! Scraped reports arrive as flat JSON objects with no fixed schema beyond a
//! handful of recognized keys. [`Report`] names the keys the pipeline acts
//! on and keeps everything else in a residual map so nothing an input record
//! carries is lost.

use serde::{Deserialize, Serialize};

/// One scraped sighting report, decoded from a single NDJSON line.
///
/// The four named fields are the only ones the pipeline normalizes. All are
/// optional at the type level: `shape` and `state` are genuinely optional in
/// the data, while a missing `posted` or `date_time` is a normalization
/// failure caught by the router, not a deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// When the report was posted, as scraped (e.g. `"07/04/21 13:45"`).
    /// Replaced with an ISO-8601 string on the clean path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted: Option<String>,
    /// When the sighting occurred, as scraped. Replaced like `posted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// Reported object shape. Replaced with a lowercase canonical category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Reported state/province code. Replaced with an uppercase canonical code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Every other key, passed through unmodified.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn residual_keys_survive_a_round_trip() {
        let line = r#"{"posted":"07/04/21 13:45","shape":"Sphere","summary":"bright light","duration":"5 min"}"#;
        let report: Report = serde_json::from_str(line).unwrap();

        assert_eq!(report.posted.as_deref(), Some("07/04/21 13:45"));
        assert_eq!(report.shape.as_deref(), Some("Sphere"));
        assert_eq!(report.date_time, None);
        assert_eq!(report.extra["summary"], "bright light");
        assert_eq!(report.extra["duration"], "5 min");

        let back: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(back["summary"], "bright light");
        assert_eq!(back["posted"], "07/04/21 13:45");
        // Absent keys stay absent.
        assert!(back.get("date_time").is_none());
    }

    #[test]
    fn explicit_null_collapses_to_absent_in_the_typed_view() {
        // The typed record does not distinguish null from absent; verbatim
        // null preservation on the exception path works from the raw line,
        // not from this type.
        let report: Report = serde_json::from_str(r#"{"shape":null}"#).unwrap();
        assert_eq!(report.shape, None);
    }
}
