//! Results rendering: one entry per backend result plus a summary line.

use std::fmt;

use crate::response::{ProcessResponse, ReportStats, ResultEntry};

/// A rendered result line group.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedEntry {
    Success {
        filename: String,
        url: String,
        /// `"{pages} pages, {views} views ({pct}% of site traffic)"`, when stats were sent.
        stats_line: Option<String>,
    },
    Failure {
        url: String,
        error: String,
    },
}

impl RenderedEntry {
    fn from_result(result: &ResultEntry) -> Self {
        if result.success {
            RenderedEntry::Success {
                filename: result.filename.clone().unwrap_or_else(|| "-".to_string()),
                url: result.url.clone(),
                stats_line: result.stats.as_ref().map(stats_line),
            }
        } else {
            RenderedEntry::Failure {
                url: result.url.clone(),
                error: result
                    .error
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RenderedEntry::Success { .. })
    }
}

impl fmt::Display for RenderedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedEntry::Success {
                filename,
                url,
                stats_line,
            } => {
                write!(f, "[ok] {filename}\n     {url}")?;
                if let Some(line) = stats_line {
                    write!(f, "\n     {line}")?;
                }
                Ok(())
            }
            RenderedEntry::Failure { url, error } => {
                write!(f, "[!!] Error processing: {url}\n     {error}")
            }
        }
    }
}

fn stats_line(stats: &ReportStats) -> String {
    format!(
        "{} pages, {} views ({}% of site traffic)",
        stats.total_pages, stats.total_views, stats.section_traffic_percentage
    )
}

/// Rendered result set for one successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsReport {
    pub entries: Vec<RenderedEntry>,
    pub successes: usize,
    pub failures: usize,
    /// Whether the download affordance is revealed.
    pub download_available: bool,
}

impl ResultsReport {
    pub fn from_response(response: &ProcessResponse) -> Self {
        let entries: Vec<RenderedEntry> =
            response.results.iter().map(RenderedEntry::from_result).collect();
        let successes = entries.iter().filter(|e| e.is_success()).count();
        let failures = entries.len() - successes;
        Self {
            download_available: response.has_download && !entries.is_empty(),
            entries,
            successes,
            failures,
        }
    }

    /// `None` for an empty result set, which renders no summary.
    pub fn summary_line(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        Some(format!(
            "Processing Complete: {} successful, {} failed",
            self.successes, self.failures
        ))
    }
}

impl fmt::Display for ResultsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        if let Some(summary) = self.summary_line() {
            write!(f, "\n{summary}")?;
        }
        Ok(())
    }
}
