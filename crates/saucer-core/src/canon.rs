//! Field canonicalization — shape categories and region codes.
//!
//! Both mappings are total over string-or-null input and idempotent: case is
//! normalized first, then a closed alias table maps the handful of legacy
//! spellings onto their canonical values. Everything else passes through
//! case-normalized and otherwise unchanged.

use phf::phf_map;

/// Shape spellings merged into an existing category.
static SHAPE_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "triangular" => "triangle",
    "changed" => "changing",
};

/// Legacy/nonstandard region codes still present in older scraped data.
static REGION_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "NF" => "NL", // Newfoundland and Labrador
    "PQ" => "QC", // Quebec
    "SA" => "SK", // Saskatchewan
    "YK" => "YT", // Yukon Territory
};

/// Lowercase a shape label and merge the known aliases.
pub fn canonical_shape(shape: Option<&str>) -> Option<String> {
    let lower = shape?.to_lowercase();
    Some(match SHAPE_ALIASES.get(lower.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lower,
    })
}

/// Uppercase a region code and remap the known legacy codes.
pub fn canonical_region(state: Option<&str>) -> Option<String> {
    let upper = state?.to_uppercase();
    Some(match REGION_ALIASES.get(upper.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => upper,
    })
}
