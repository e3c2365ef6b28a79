//! Rendering surface driven by the form controller.

use crate::naming::{CustomNameInput, OptionalSection};
use crate::progress::ProgressSnapshot;
use crate::report::ResultsReport;

/// Everything the controller shows to the user goes through this trait.
///
/// A terminal front end prints; a test surface records.
pub trait FormSurface {
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Shows exactly this optional section and hides the others.
    fn show_section(&mut self, section: OptionalSection);

    /// Replaces all custom filename inputs.
    fn show_custom_inputs(&mut self, inputs: &[CustomNameInput]);

    fn progress_started(&mut self, snapshot: ProgressSnapshot);
    fn progress_updated(&mut self, snapshot: ProgressSnapshot);
    /// Hides the indicator. Called once per submission that reached the
    /// in-flight state.
    fn progress_finished(&mut self);

    /// Hides previous results, the download affordance, and the error section.
    fn clear_output(&mut self);
    fn show_results(&mut self, report: &ResultsReport);
    fn show_error(&mut self, message: &str);
}
