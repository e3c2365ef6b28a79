//! `pia names <url>...` – preview custom filename suggestions.

use anyhow::Result;
use pia_core::input::parse_urls;
use pia_core::naming::custom_inputs;
use std::path::Path;

use crate::cli::input::read_url_text;

pub fn run_names(urls: &[String], file: Option<&Path>) -> Result<()> {
    let raw = read_url_text(urls, file)?;
    let inputs = custom_inputs(&parse_urls(&raw));
    if inputs.is_empty() {
        println!("Enter URLs to generate custom name suggestions.");
        return Ok(());
    }
    let width = inputs.iter().map(|i| i.url.len()).max().unwrap_or(0);
    println!("{:<width$}  {}", "URL", "FILENAME");
    for input in inputs {
        println!("{:<width$}  {}", input.url, input.value);
    }
    Ok(())
}
