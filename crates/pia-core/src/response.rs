//! Backend response bodies.

use serde::Deserialize;

/// Shown when a failure body carries no `error` field.
pub const GENERIC_ERROR: &str = "An error occurred while processing the analytics.";

/// Per-report statistics returned for a successful URL. Display only, so
/// any JSON number is accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportStats {
    pub total_pages: f64,
    pub total_views: f64,
    pub section_traffic_percentage: f64,
}

/// Outcome for one submitted URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultEntry {
    pub url: String,
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub stats: Option<ReportStats>,
}

/// Body of a 2xx response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub results: Vec<ResultEntry>,
    /// True when at least one report file was produced.
    #[serde(default)]
    pub has_download: bool,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub setup_instructions: Option<Vec<String>>,
}

impl ErrorResponse {
    /// User-facing message: the backend error (or a generic one) followed by
    /// the setup instructions, one per line.
    pub fn message(&self) -> String {
        let mut message = self
            .error
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(GENERIC_ERROR)
            .to_string();
        if let Some(steps) = &self.setup_instructions {
            message.push_str("\n\nSetup Instructions:\n");
            message.push_str(&steps.join("\n"));
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_with_setup_instructions() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"error":"no credentials","setup_instructions":["Set API_KEY"]}"#,
        )
        .unwrap();
        assert_eq!(body.message(), "no credentials\n\nSetup Instructions:\nSet API_KEY");
    }

    #[test]
    fn error_without_field_uses_generic_message() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), GENERIC_ERROR);
        let body: ErrorResponse =
            serde_json::from_str(r#"{"setup_instructions":["1. a","","2. b"]}"#).unwrap();
        assert_eq!(
            body.message(),
            format!("{GENERIC_ERROR}\n\nSetup Instructions:\n1. a\n\n2. b")
        );
    }

    #[test]
    fn success_body_with_optional_fields() {
        let body: ProcessResponse = serde_json::from_str(
            r#"{
                "success": true,
                "has_download": true,
                "results": [
                    {"url": "https://a.com/hr/", "success": true, "filename": "hr_analytics.xlsx",
                     "stats": {"total_pages": 12, "total_views": 3400, "section_traffic_percentage": 1.25}},
                    {"url": "https://a.com/it/", "success": false, "filename": "it_analytics.xlsx",
                     "error": "No data found for https://a.com/it/"}
                ]
            }"#,
        )
        .unwrap();
        assert!(body.has_download);
        assert_eq!(body.results.len(), 2);
        let stats = body.results[0].stats.as_ref().unwrap();
        assert_eq!(stats.total_views, 3400.0);
        assert!(body.results[1].stats.is_none());
        assert_eq!(
            body.results[1].error.as_deref(),
            Some("No data found for https://a.com/it/")
        );
    }

    #[test]
    fn missing_results_default_to_empty() {
        let body: ProcessResponse = serde_json::from_str("{}").unwrap();
        assert!(body.results.is_empty());
        assert!(!body.has_download);
    }

    #[test]
    fn fractional_or_negative_stats_still_decode() {
        let body: ProcessResponse = serde_json::from_str(
            r#"{"results": [
                {"url": "https://a.com/hr/", "success": true,
                 "stats": {"total_pages": 2.5, "total_views": -1, "section_traffic_percentage": 0}},
                {"url": "https://a.com/it/", "success": true, "filename": "it_analytics.xlsx"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.results.len(), 2);
        let stats = body.results[0].stats.as_ref().unwrap();
        assert_eq!(stats.total_pages, 2.5);
        assert_eq!(stats.total_views, -1.0);
    }
}
