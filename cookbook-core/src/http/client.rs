//! Recipe API trait and its reqwest implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::types::{Recipe, RecipeCreate, RecipeUpdate};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// The five operations the front end performs against the backend.
///
/// Views take `&dyn RecipeApi` so tests can substitute an in-memory backend.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// All recipes, in the order the backend returns them.
    async fn list(&self) -> Result<Vec<Recipe>, ApiError>;

    async fn get(&self, id: &str) -> Result<Recipe, ApiError>;

    /// Persist a new recipe. The result carries the assigned id and timestamps.
    async fn create(&self, recipe: &RecipeCreate) -> Result<Recipe, ApiError>;

    async fn update(&self, id: &str, recipe: &RecipeUpdate) -> Result<Recipe, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Reject identifiers that cannot name a single `/recipes/{id}` resource.
pub(crate) fn check_id(id: &str) -> Result<(), ApiError> {
    let malformed = id.is_empty()
        || id
            .chars()
            .any(|c| c == '/' || c == '?' || c == '#' || c.is_whitespace());
    if malformed {
        return Err(ApiError::InvalidId(id.to_string()));
    }
    Ok(())
}

/// Configuration for RecipeClient.
#[derive(Clone)]
pub struct RecipeClientBuilder {
    base_url: String,
    user_agent: String,
}

impl Default for RecipeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("cookbook/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the API root, e.g. `http://localhost:8000/api`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<RecipeClient, ApiError> {
        let parsed = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(self.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let inner = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(RecipeClient {
            inner: Arc::new(inner),
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// HTTP client for the `/recipes` resource.
///
/// Constructed once at startup and shared by reference with every view.
#[derive(Clone)]
pub struct RecipeClient {
    /// Shared reqwest client for connection pooling.
    inner: Arc<reqwest::Client>,
    base_url: String,
}

impl RecipeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        RecipeClientBuilder::new().base_url(base_url).build()
    }

    pub fn builder() -> RecipeClientBuilder {
        RecipeClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/recipes", self.base_url)
    }

    fn item_url(&self, id: &str) -> Result<String, ApiError> {
        check_id(id)?;
        Ok(format!("{}/recipes/{}", self.base_url, id))
    }

    /// Map a non-success status to an error, passing successful responses through.
    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %response.url(), "backend: not found");
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            tracing::debug!(url = %response.url(), status = %status, "backend: request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// The service health endpoint, which sits beside the API root rather than under it.
    fn health_url(&self) -> String {
        let origin = self.base_url.strip_suffix("/api").unwrap_or(&self.base_url);
        format!("{}/health", origin)
    }

    /// Probe `GET /health` and return the reported status.
    pub async fn health(&self) -> Result<String, ApiError> {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }

        let url = self.health_url();
        tracing::debug!(url = %url, "GET health");
        let response = self.inner.get(&url).send().await?;
        let health: Health = Self::decode(response).await?;
        Ok(health.status)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::check_status(response)?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RecipeApi for RecipeClient {
    async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        let url = self.collection_url();
        tracing::debug!(url = %url, "GET recipes");
        let response = self.inner.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn get(&self, id: &str) -> Result<Recipe, ApiError> {
        let url = self.item_url(id)?;
        tracing::debug!(url = %url, "GET recipe");
        let response = self.inner.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, recipe: &RecipeCreate) -> Result<Recipe, ApiError> {
        let url = self.collection_url();
        tracing::debug!(url = %url, title = %recipe.title, "POST recipe");
        let response = self.inner.post(&url).json(recipe).send().await?;
        Self::decode(response).await
    }

    async fn update(&self, id: &str, recipe: &RecipeUpdate) -> Result<Recipe, ApiError> {
        let url = self.item_url(id)?;
        tracing::debug!(url = %url, "PUT recipe");
        let response = self.inner.put(&url).json(recipe).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        tracing::debug!(url = %url, "DELETE recipe");
        let response = self.inner.delete(&url).send().await?;
        Self::check_status(response)?;
        Ok(())
    }
}
