//! Custom filename normalization.

use std::collections::BTreeMap;

use super::{CustomNameInput, REPORT_EXTENSION};

/// Trims a user-entered filename and guarantees the report extension.
///
/// Returns `None` for blank input. Idempotent: a name that already ends in
/// `.xlsx` is returned unchanged.
pub fn normalize_custom_filename(value: &str) -> Option<String> {
    let name = value.trim();
    if name.is_empty() {
        return None;
    }
    if name.ends_with(REPORT_EXTENSION) {
        Some(name.to_string())
    } else {
        Some(format!("{name}{REPORT_EXTENSION}"))
    }
}

/// Builds the `customNames` map from the current inputs.
///
/// Blank inputs are dropped. If two inputs share a URL the later one wins.
pub fn collect_custom_names(inputs: &[CustomNameInput]) -> BTreeMap<String, String> {
    let mut names = BTreeMap::new();
    for input in inputs {
        if let Some(filename) = normalize_custom_filename(&input.value) {
            names.insert(input.url.clone(), filename);
        }
    }
    names
}
