//! HTTP implementation of RecordSource

use crate::core::error::{BazaarResult, SourceError};
use crate::source::RecordSource;
use async_trait::async_trait;
use serde_json::Value;

/// A [`RecordSource`] backed by the remote storefront API
///
/// Holds a base URL and an optional bearer token for authenticated
/// endpoints (the wishlist). The token is whatever the surrounding
/// application stored at login; this crate never mints or refreshes it.
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpSource {
    /// Create a source for an API base URL (e.g. "http://127.0.0.1:5001")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    /// Attach a bearer token for authenticated endpoints
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn is_authenticated(&self) -> bool {
        self.bearer_token.is_some()
    }

    async fn fetch(&self, path: &str) -> BazaarResult<Value> {
        let url = self.url_for(path);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(url = %url, "fetching collection");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "fetch failed");
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            }
            .into());
        }

        let payload = response.json::<Value>().await.map_err(|err| {
            SourceError::Decode {
                url: url.clone(),
                message: err.to_string(),
            }
        })?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let source = HttpSource::new("http://127.0.0.1:5001/");
        assert_eq!(source.url_for("/products"), "http://127.0.0.1:5001/products");
        assert_eq!(source.url_for("order"), "http://127.0.0.1:5001/order");
    }

    #[test]
    fn test_bearer_token_flag() {
        let anon = HttpSource::new("http://localhost");
        assert!(!anon.is_authenticated());

        let authed = HttpSource::new("http://localhost").with_bearer_token("tok");
        assert!(authed.is_authenticated());
    }
}
