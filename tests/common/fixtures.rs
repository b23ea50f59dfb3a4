//! Static report corpora and the fixed test clock.
//!
//! Each corpus is a `&'static [&'static str]` of representative NDJSON
//! lines. The clock is pinned so century-correction behavior never depends
//! on when the suite runs.

use chrono::{NaiveDate, NaiveDateTime};

/// The clock every harness routes against: 2024-06-01 12:00.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Reports that normalize cleanly.
pub const CORPUS_CLEAN: &[&str] = &[
    r#"{"posted":"01/01/21 10:00","date_time":"01/01/21 10:00","shape":"Triangular","state":"nf","summary":"x"}"#,
    r#"{"posted":"07/04/21 13:45","date_time":"07/04/21","shape":"Sphere","state":"on","city":"Ottawa","duration":"2 min"}"#,
    r#"{"posted":"12/24/19","date_time":"12/24/19 23:10","state":"pq","text":"lights over the river"}"#,
    r#"{"posted":"03/15/30","date_time":"03/15/30","shape":"changed","state":"yk"}"#,
    r#"{"posted":"05/31/24 09:30","date_time":"05/31/24 09:30"}"#,
];

/// Reports whose timestamps match neither accepted format.
pub const CORPUS_BAD_DATES: &[&str] = &[
    r#"{"posted":"01/01/21 10:00","date_time":"last tuesday","shape":"Sphere","state":"sa"}"#,
    r#"{"posted":"2021-07-04T13:45:00","date_time":"07/04/21","summary":"iso crept in"}"#,
    r#"{"posted":"01/01/21 10:00","date_time":"01/01/21 25:99"}"#,
    r#"{"date_time":"01/01/21"}"#,
];

/// Input lines that are not JSON objects at all.
pub const CORPUS_MALFORMED: &[&str] = &[
    "not json at all",
    "{\"posted\": \"01/01/21\", unquoted: true}",
    "[1, 2, 3]",
];

/// Join corpus lines into one NDJSON document.
pub fn ndjson(lines: &[&str]) -> String {
    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}
