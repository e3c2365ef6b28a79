//! Submission error kinds, each surfaced to the user as one text block.

use crate::transport::TransportError;

/// Message shown when the form is submitted without any URL.
pub const EMPTY_URLS_MESSAGE: &str = "Please enter at least one URL.";

/// Why a submission did not produce a result list.
///
/// None of these are retried; the form stays re-submittable after each.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Empty URL list, caught before any network call.
    #[error("Please enter at least one URL.")]
    Validation,
    /// Non-2xx response; `message` already includes setup instructions.
    #[error("{message}")]
    Backend { status: u32, message: String },
    /// The request failed before a usable response was obtained.
    #[error("Network error: {0}")]
    Transport(String),
}

impl From<TransportError> for SubmitError {
    fn from(e: TransportError) -> Self {
        SubmitError::Transport(e.to_string())
    }
}

impl SubmitError {
    /// Text for the error section of the form.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
