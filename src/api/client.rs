//! HTTP client for the Readwise Reader API.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use super::{DocumentFilter, DocumentSource, ListPage};
use crate::error::ExportError;

/// Fixed API base path.
pub const API_BASE: &str = "https://readwise.io/api/v3";

/// Authenticated Reader API client.
pub struct ReaderClient {
    /// Bearer token
    token: String,
    /// API base URL (overridable for tests)
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl ReaderClient {
    /// Create a client for the production API.
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, API_BASE.to_string())
    }

    /// Create a client against an alternate base URL.
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            token,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Build the URL for an endpoint (the API wants a trailing slash).
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}/", self.base_url, endpoint)
    }

    /// Issue a GET request and decode the JSON body.
    ///
    /// Any non-2xx response is fatal: the status and raw body are surfaced
    /// as `ExportError::Api` with no retry.
    pub async fn request(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExportError> {
        let response = self
            .client
            .get(self.endpoint_url(endpoint))
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExportError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DocumentSource for ReaderClient {
    async fn list_page(
        &self,
        filter: &DocumentFilter,
        cursor: Option<&str>,
    ) -> Result<ListPage, ExportError> {
        let params = filter.query_params(cursor);
        let body = self.request("list", &params).await?;
        Ok(serde_json::from_value(body)?)
    }
}
