//! User search service.
//!
//! The [`UserSearchService`] trait is the seam between the search box and
//! the server. [`HttpUserSearchService`] is the production implementation:
//! it sends `GET <endpoint>?q=<query>` and returns the `tabla` markup from
//! the JSON body.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::Url;

use crate::config::SearchConfig;
use crate::error::Result;

/// Remote collaborator that renders the user table for a query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSearchService: Send + Sync {
    /// Fetches the table-body markup matching `query`.
    async fn fetch_table(&self, query: &str) -> Result<String>;
}

/// JSON body returned by the user-search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Table-body markup. Not validated: any JSON value is accepted, and
    /// `None` means the field was absent.
    #[serde(default, deserialize_with = "present")]
    pub tabla: Option<Value>,
}

/// Keeps an explicit `null` distinct from a missing field.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl SearchResponse {
    /// Returns the markup to render.
    ///
    /// Rendered the way a page assigns the value as text: a missing field
    /// becomes `undefined` and a non-string value its JSON text.
    pub fn into_markup(self) -> String {
        match self.tabla {
            Some(Value::String(markup)) => markup,
            Some(other) => {
                tracing::warn!(tabla = %other, "search response `tabla` is not a string");
                other.to_string()
            }
            None => {
                tracing::warn!("search response has no `tabla` field");
                "undefined".to_string()
            }
        }
    }
}

/// HTTP implementation backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpUserSearchService {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpUserSearchService {
    /// Creates a service for the endpoint described by `config`.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Ok(Self::with_client(reqwest::Client::new(), config.endpoint()?))
    }

    /// Creates a service with an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the request URL for a query.
    ///
    /// The query is interpolated as-is; characters such as `&` or `#` are
    /// not escaped and change the meaning of the URL.
    pub fn request_url(&self, query: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}?q={}", self.endpoint, query))?)
    }
}

#[async_trait]
impl UserSearchService for HttpUserSearchService {
    async fn fetch_table(&self, query: &str) -> Result<String> {
        let url = self.request_url(query)?;
        tracing::debug!(%url, "sending user search");

        // The status code is ignored; an error page fails to decode instead.
        let body = self.client.get(url).send().await?.bytes().await?;
        let response: SearchResponse = serde_json::from_slice(&body)?;
        Ok(response.into_markup())
    }
}
