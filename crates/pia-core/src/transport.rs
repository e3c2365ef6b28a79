//! HTTP transport for the report backend.
//!
//! Uses the curl crate (libcurl) for a single JSON POST. Status codes are
//! handed back to the caller untouched; only failures that leave no
//! response at all become a [`TransportError`].

use std::str;
use std::time::Duration;

use url::Url;

/// Raw HTTP reply: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request that never produced a response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The blocking request task panicked or was cancelled.
    #[error("request task failed: {0}")]
    Task(String),
}

/// Blocking JSON POST. Runs on the caller's thread; async callers go through
/// `spawn_blocking`.
pub trait Transport: Send + Sync + 'static {
    fn post_json(&self, path: &str, body: &[u8]) -> Result<HttpReply, TransportError>;
}

/// libcurl-backed transport bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    base_url: Url,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl CurlTransport {
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            connect_timeout,
            request_timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/process`.
    pub fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base_url.join(path)?)
    }
}

impl Transport for CurlTransport {
    fn post_json(&self, path: &str, body: &[u8]) -> Result<HttpReply, TransportError> {
        let url = self.endpoint(path)?;
        let mut response = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        list.append("Accept: application/json")?;
        // No 100-continue round trip for small JSON bodies.
        list.append("Expect:")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(
            url = %url,
            status,
            bytes = response.len(),
            "POST completed"
        );
        Ok(HttpReply {
            status,
            body: response,
        })
    }
}

/// Short printable prefix of a body, for log lines.
pub(crate) fn body_preview(body: &[u8]) -> &str {
    const MAX: usize = 200;
    let text = str::from_utf8(body).unwrap_or("<non-utf8 body>");
    if text.len() <= MAX {
        return text;
    }
    let mut end = MAX;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> CurlTransport {
        CurlTransport::new(base, Duration::from_secs(1), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn endpoint_joins_path() {
        let t = transport("http://localhost:5000");
        assert_eq!(t.endpoint("/process").unwrap().as_str(), "http://localhost:5000/process");
        let t = transport("http://127.0.0.1:8080/tools/pia/");
        assert_eq!(
            t.endpoint("process").unwrap().as_str(),
            "http://127.0.0.1:8080/tools/pia/process"
        );
    }

    #[test]
    fn invalid_base_url() {
        let err = CurlTransport::new("not a url", Duration::from_secs(1), Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[test]
    fn success_range() {
        let reply = |status| HttpReply {
            status,
            body: Vec::new(),
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(302).is_success());
        assert!(!reply(500).is_success());
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "é".repeat(150);
        let preview = body_preview(long.as_bytes());
        assert!(preview.len() <= 200);
        assert!(preview.chars().all(|c| c == 'é'));
        assert_eq!(body_preview(b"short"), "short");
    }
}
