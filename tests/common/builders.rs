//! Test builders — ergonomic constructors for [`Report`] fixtures.
//!
//! Designed for readability in assertions, not for production use; they
//! panic on invalid input rather than returning `Result`.

use saucer_core::Report;

/// Fluent builder for [`Report`] test fixtures.
///
/// Starts from a report with both timestamps set to `01/01/21 10:00` so a
/// default build routes cleanly.
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new() -> Self {
        let report = serde_json::from_str(
            r#"{"posted":"01/01/21 10:00","date_time":"01/01/21 10:00"}"#,
        )
        .unwrap();
        Self { report }
    }

    pub fn posted(mut self, value: impl Into<String>) -> Self {
        self.report.posted = Some(value.into());
        self
    }

    pub fn date_time(mut self, value: impl Into<String>) -> Self {
        self.report.date_time = Some(value.into());
        self
    }

    pub fn shape(mut self, value: impl Into<String>) -> Self {
        self.report.shape = Some(value.into());
        self
    }

    pub fn state(mut self, value: impl Into<String>) -> Self {
        self.report.state = Some(value.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.report.extra.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Report {
        self.report
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode one NDJSON line into a [`Report`], panicking on bad fixtures.
pub fn report_from_line(line: &str) -> Report {
    serde_json::from_str(line).unwrap()
}
