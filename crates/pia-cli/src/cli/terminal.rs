//! Terminal rendering of the form surface.
//!
//! Results go to `out`; progress, custom name previews and errors go to
//! `err` so piping the results stays clean.

use pia_core::controller::FormSurface;
use pia_core::naming::{CustomNameInput, OptionalSection};
use pia_core::progress::ProgressSnapshot;
use pia_core::report::ResultsReport;
use std::io::Write;

const BAR_WIDTH: usize = 30;

pub struct TerminalSurface<O: Write, E: Write> {
    out: O,
    err: E,
    download_url: String,
    /// Custom filenames as last edited; printed when the submission starts.
    custom_inputs: Vec<CustomNameInput>,
    /// Length of the progress line currently drawn, for erasing it.
    progress_len: usize,
}

impl<O: Write, E: Write> TerminalSurface<O, E> {
    pub fn new(out: O, err: E, download_url: String) -> Self {
        Self {
            out,
            err,
            download_url,
            custom_inputs: Vec::new(),
            progress_len: 0,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn print_custom_inputs(&mut self) {
        if self.custom_inputs.is_empty() {
            return;
        }
        let _ = writeln!(self.err, "Custom filenames:");
        for input in &self.custom_inputs {
            let _ = writeln!(self.err, "  {} -> {}", input.url, input.value);
        }
    }

    fn draw_progress(&mut self, snapshot: ProgressSnapshot) {
        let line = progress_line(snapshot);
        let pad = self.progress_len.saturating_sub(line.len());
        let _ = write!(self.err, "\r{line}{:pad$}", "");
        let _ = self.err.flush();
        self.progress_len = line.len();
    }
}

/// `[#########.....................]  30% Fetching analytics data...`
pub fn progress_line(snapshot: ProgressSnapshot) -> String {
    let pct = snapshot.percent.clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}% {}",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        pct,
        snapshot.message
    )
}

impl<O: Write, E: Write> FormSurface for TerminalSurface<O, E> {
    fn set_submit_enabled(&mut self, enabled: bool) {
        tracing::trace!(enabled, "submit control");
    }

    fn show_section(&mut self, section: OptionalSection) {
        tracing::trace!(?section, "visible section");
        if section != OptionalSection::CustomNames {
            self.custom_inputs.clear();
        }
    }

    // A terminal cannot redraw a form, so edits are kept and the final list
    // is printed once, when the submission starts.
    fn show_custom_inputs(&mut self, inputs: &[CustomNameInput]) {
        self.custom_inputs = inputs.to_vec();
    }

    fn progress_started(&mut self, snapshot: ProgressSnapshot) {
        self.print_custom_inputs();
        self.progress_len = 0;
        self.draw_progress(snapshot);
    }

    fn progress_updated(&mut self, snapshot: ProgressSnapshot) {
        self.draw_progress(snapshot);
    }

    fn progress_finished(&mut self) {
        if self.progress_len > 0 {
            let _ = write!(self.err, "\r{:width$}\r", "", width = self.progress_len);
            let _ = self.err.flush();
        }
        self.progress_len = 0;
    }

    fn clear_output(&mut self) {}

    fn show_results(&mut self, report: &ResultsReport) {
        // Results arrive while the progress line is still drawn.
        self.progress_finished();
        if report.entries.is_empty() {
            let _ = writeln!(self.out, "No results returned.");
            return;
        }
        let _ = writeln!(self.out, "{report}");
        if report.download_available {
            let _ = writeln!(self.out, "Download ready: {}", self.download_url);
        }
    }

    fn show_error(&mut self, message: &str) {
        self.progress_finished();
        let _ = writeln!(self.err, "Error: {message}");
    }
}
