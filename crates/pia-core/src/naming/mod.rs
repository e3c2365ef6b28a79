//! Naming modes and output filename handling.
//!
//! The naming mode decides which optional form section is shown and how the
//! backend names each report: server default, user prefix, or one custom
//! filename per URL.

mod normalize;
mod suggest;

pub use normalize::{collect_custom_names, normalize_custom_filename};
pub use suggest::{custom_inputs, suggested_filename};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension every report filename carries.
pub const REPORT_EXTENSION: &str = ".xlsx";

/// Output naming strategy sent to the backend as `namingMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
    #[default]
    Default,
    Prefix,
    Custom,
}

/// The optional form section shown for a naming mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalSection {
    /// Neither the prefix input nor the custom names section.
    None,
    Prefix,
    CustomNames,
}

impl NamingMode {
    pub const ALL: [NamingMode; 3] = [NamingMode::Default, NamingMode::Prefix, NamingMode::Custom];

    pub fn as_str(self) -> &'static str {
        match self {
            NamingMode::Default => "default",
            NamingMode::Prefix => "prefix",
            NamingMode::Custom => "custom",
        }
    }

    pub fn visible_section(self) -> OptionalSection {
        match self {
            NamingMode::Default => OptionalSection::None,
            NamingMode::Prefix => OptionalSection::Prefix,
            NamingMode::Custom => OptionalSection::CustomNames,
        }
    }
}

impl fmt::Display for NamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown naming mode string.
#[derive(Debug, thiserror::Error)]
#[error("unknown naming mode {0:?} (expected default, prefix or custom)")]
pub struct ParseNamingModeError(String);

impl FromStr for NamingMode {
    type Err = ParseNamingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamingMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNamingModeError(s.to_string()))
    }
}

/// One editable filename input of the custom names section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomNameInput {
    /// URL this input was generated for.
    pub url: String,
    /// Current input value (pre-filled with the suggestion).
    pub value: String,
}
