//! Client for the external media host.
//!
//! Images are uploaded by the admin frontend directly; the backend only ever
//! deletes them, by URL, when the owning row is removed. Deletion is a
//! best-effort side call: a failure is logged and the row deletion proceeds,
//! leaving at worst an orphaned file on the host.

use std::time::Duration;

use reqwest::Url;

use crate::config::settings::MediaConfig;
use crate::external::client::HTTP_CLIENT;

/// Best-effort deletion client for externally hosted images.
#[derive(Clone)]
pub struct MediaClient {
    config: MediaConfig,
}

impl MediaClient {
    pub fn new(config: MediaConfig) -> Self {
        Self { config }
    }

    /// Delete a hosted file by its public URL.
    ///
    /// Returns whether the host confirmed the deletion. Invalid URLs, network
    /// failures, and non-2xx responses all come back as `false`; none of them
    /// are fatal to the caller.
    pub async fn delete_by_url(&self, url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => parsed,
            _ => {
                tracing::warn!(url, "skipping media deletion for non-http url");
                return false;
            }
        };

        let mut request = HTTP_CLIENT
            .delete(parsed)
            .timeout(Duration::from_secs(self.config.timeout_seconds));
        if !self.config.auth_token.is_empty() {
            request = request.bearer_auth(&self.config.auth_token);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(url, "deleted media file");
                true
            }
            Ok(response) => {
                tracing::warn!(url, status = %response.status(), "media host refused deletion");
                false
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "media deletion request failed");
                false
            }
        }
    }

    /// Delete several hosted files, continuing past individual failures.
    pub async fn delete_all(&self, urls: &[String]) -> usize {
        let mut deleted = 0;
        for url in urls {
            if self.delete_by_url(url).await {
                deleted += 1;
            }
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MediaClient {
        MediaClient::new(MediaConfig {
            auth_token: String::new(),
            timeout_seconds: 1,
        })
    }

    #[tokio::test]
    async fn invalid_url_is_not_fatal() {
        assert!(!client().delete_by_url("not a url").await);
    }

    #[tokio::test]
    async fn non_http_scheme_is_skipped() {
        assert!(!client().delete_by_url("ftp://example.com/img.png").await);
    }

    #[tokio::test]
    async fn unreachable_host_is_not_fatal() {
        // Reserved TEST-NET-1 address, nothing listens there.
        assert!(!client().delete_by_url("http://192.0.2.1/img.png").await);
        assert_eq!(
            client()
                .delete_all(&["http://192.0.2.1/a.png".to_string()])
                .await,
            0
        );
    }
}
