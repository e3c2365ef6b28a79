//! URL list input: raw multi-line text to an ordered list of URLs.

/// Splits raw text on newlines, trims each line and drops empty ones.
///
/// Order of the remaining lines is preserved; it pairs each URL with its
/// custom filename input and its result entry.
pub fn parse_urls(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when the submit control should be enabled for this input text.
pub fn submit_enabled(raw: &str) -> bool {
    raw.split('\n').any(|line| !line.trim().is_empty())
}
