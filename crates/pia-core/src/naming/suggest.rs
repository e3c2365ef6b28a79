//! Default filename suggestions for the custom names section.

use super::CustomNameInput;

/// Used when the URL has no usable segment.
const FALLBACK_SEGMENT: &str = "department";

const SUGGESTION_TAIL: &str = "_analytics.xlsx";

/// Suggested report filename for a URL: `<segment>_analytics.xlsx`.
///
/// The segment is the second-to-last piece of the URL split on `/`, so a
/// directory-style URL like `https://a.com/hr/` yields `hr`. Missing or
/// empty pieces fall back to `department`.
pub fn suggested_filename(url: &str) -> String {
    let pieces: Vec<&str> = url.split('/').collect();
    let segment = pieces
        .len()
        .checked_sub(2)
        .map(|i| pieces[i])
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_SEGMENT);
    format!("{segment}{SUGGESTION_TAIL}")
}

/// One pre-filled input per URL, in URL order.
///
/// Always builds a fresh list; earlier edits are not carried over.
pub fn custom_inputs(urls: &[String]) -> Vec<CustomNameInput> {
    urls.iter()
        .map(|url| CustomNameInput {
            url: url.clone(),
            value: suggested_filename(url),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_urls() {
        assert_eq!(suggested_filename("https://a.com/hr/"), "hr_analytics.xlsx");
        assert_eq!(suggested_filename("https://a.com/it/"), "it_analytics.xlsx");
        assert_eq!(
            suggested_filename("https://www.example.gov/services/parks/"),
            "parks_analytics.xlsx"
        );
    }

    #[test]
    fn page_urls_use_parent_piece() {
        assert_eq!(
            suggested_filename("https://a.com/hr/index.html"),
            "hr_analytics.xlsx"
        );
        assert_eq!(suggested_filename("https://a.com/hr"), "a.com_analytics.xlsx");
    }

    #[test]
    fn fallback() {
        assert_eq!(suggested_filename("hr"), "department_analytics.xlsx");
        assert_eq!(suggested_filename(""), "department_analytics.xlsx");
        assert_eq!(suggested_filename("https://a.com//"), "department_analytics.xlsx");
    }

    #[test]
    fn inputs_follow_url_order() {
        let urls = vec!["https://a.com/hr/".to_string(), "https://a.com/it/".to_string()];
        let inputs = custom_inputs(&urls);
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].url, "https://a.com/hr/");
        assert_eq!(inputs[0].value, "hr_analytics.xlsx");
        assert_eq!(inputs[1].value, "it_analytics.xlsx");
        assert!(custom_inputs(&[]).is_empty());
    }
}
