//! REST client for the CMS `find` endpoints.
//!
//! Wraps `GET {server_url}/api/{collection}` using [`reqwest`]. Every
//! request carries the configured timeout and a `Cache-Control` header
//! derived from the query's [`ContentMode`](foliomate_core::preview::ContentMode).

use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::CmsConfig;
use crate::error::CmsError;
use crate::query::{Collection, FindQuery};

/// Result envelope of a `find` call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse<T> {
    /// Matching documents in data-source order. Empty when nothing matched.
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
    #[serde(default)]
    pub total_docs: Option<u64>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
}

/// HTTP client for a single CMS instance.
pub struct CmsClient {
    client: reqwest::Client,
    config: CmsConfig,
}

impl CmsClient {
    /// Create a client with its own connection pool and the configured
    /// request timeout.
    pub fn new(config: CmsConfig) -> Result<Self, CmsError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Run a `find` query against a collection.
    ///
    /// Sends `GET /api/{collection}` with the query's filters. Returns the
    /// decoded envelope, or an error for transport failures, non-2xx
    /// statuses and undecodable bodies.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        collection: Collection,
        query: &FindQuery,
    ) -> Result<FindResponse<T>, CmsError> {
        let url = format!("{}/api/{}", self.config.server_url, collection.as_str());
        let cache_control = query.mode.upstream_cache_control(self.config.revalidate);

        tracing::debug!(
            collection = collection.as_str(),
            draft = query.mode.is_draft(),
            cache_control = %cache_control,
            "Querying CMS",
        );

        let response = self
            .client
            .get(url)
            .query(&query.to_pairs())
            .header(CACHE_CONTROL, cache_control)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CmsError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CmsError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CmsError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CmsError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
