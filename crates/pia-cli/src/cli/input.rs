//! Gathers raw URL text from positional arguments and an optional file.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Joins argument URLs and the file (or stdin for `-`) into one
/// newline-separated text, the same shape a pasted URL list has.
pub fn read_url_text(urls: &[String], file: Option<&Path>) -> Result<String> {
    let mut raw = urls.join("\n");
    if let Some(path) = file {
        let contents = if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading URLs from stdin")?;
            buf
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("reading URLs from {}", path.display()))?
        };
        if !raw.is_empty() {
            raw.push('\n');
        }
        raw.push_str(&contents);
    }
    Ok(raw)
}
