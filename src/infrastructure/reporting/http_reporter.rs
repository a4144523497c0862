//! HTTP crash reporter posting events to a configured DSN.

use super::service::{CrashEvent, CrashReporter};
use tracing::warn;
use url::Url;

/// Posts crash events as JSON to an external http(s) endpoint.
///
/// Delivery is fire-and-forget from a spawned task, so a slow or unreachable
/// collector never delays a response. Delivery failures are logged and
/// dropped; no retries are performed.
pub struct HttpReporter {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpReporter {
    /// Builds a reporter from a DSN string.
    ///
    /// Returns `None` unless the DSN parses as an absolute `http` or `https`
    /// URL.
    pub fn from_dsn(dsn: &str) -> Option<Self> {
        let endpoint = Url::parse(dsn).ok()?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return None;
        }

        Some(Self {
            endpoint,
            client: reqwest::Client::new(),
        })
    }
}

impl CrashReporter for HttpReporter {
    fn capture(&self, event: CrashEvent) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        tokio::spawn(async move {
            if let Err(e) = client.post(endpoint).json(&event).send().await {
                warn!(error = %e, "Failed to deliver crash report");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dsn_accepts_http_urls() {
        assert!(HttpReporter::from_dsn("https://errors.example.com/ingest").is_some());
        assert!(HttpReporter::from_dsn("http://localhost:9000/events").is_some());
    }

    #[test]
    fn test_from_dsn_rejects_malformed_values() {
        assert!(HttpReporter::from_dsn("").is_none());
        assert!(HttpReporter::from_dsn("not a url").is_none());
        assert!(HttpReporter::from_dsn("ftp://example.com/drop").is_none());
        assert!(HttpReporter::from_dsn("/relative/path").is_none());
    }
}
