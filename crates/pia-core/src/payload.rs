//! Request payload for `POST /process`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::naming::{collect_custom_names, CustomNameInput, NamingMode};

/// JSON body sent to the report backend. Built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub urls: Vec<String>,
    pub naming_mode: NamingMode,
    pub custom_prefix: String,
    pub custom_names: BTreeMap<String, String>,
}

impl ProcessRequest {
    /// Builds the payload from the current form values.
    ///
    /// The prefix is trimmed. Custom names are only collected in custom mode;
    /// other modes send an empty map.
    pub fn build(
        urls: Vec<String>,
        naming_mode: NamingMode,
        custom_prefix: &str,
        custom_inputs: &[CustomNameInput],
    ) -> Self {
        let custom_names = if naming_mode == NamingMode::Custom {
            collect_custom_names(custom_inputs)
        } else {
            BTreeMap::new()
        };
        Self {
            urls,
            naming_mode,
            custom_prefix: custom_prefix.trim().to_string(),
            custom_names,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
