//! Yelp Fusion restaurant provider
//!
//! Implements the `RestaurantProvider` port over the Yelp Fusion REST API
//! using a bearer token taken from configuration or the environment.

use super::types::{
    AutocompleteResponse, Business, ErrorBody, ReviewsResponse, SearchResponse, to_candidate,
    to_detail, to_review,
};
use async_trait::async_trait;
use munch_application::ports::restaurant_provider::{
    ProviderError, RestaurantProvider, SearchQuery,
};
use munch_domain::{Candidate, CandidateId, RestaurantDetail, Review};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Yelp Fusion API root
pub const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3";

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "YELP_API_KEY";

/// Connection settings for [`YelpRestaurantProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YelpConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for YelpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl YelpConfig {
    /// Fill in the API key from [`API_KEY_ENV`] when none is set
    pub fn with_env_fallback(mut self) -> Self {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            self.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
        self
    }
}

pub struct YelpRestaurantProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl YelpRestaurantProvider {
    pub fn new(config: &YelpConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("munch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if config.api_key.is_none() {
            warn!("No Yelp API key configured; restaurant lookups will fail");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials)?;
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::UnexpectedResponse(e.to_string()))
    }
}

/// Map a non-success response to a provider error
fn status_error(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| format!("{}: {}", b.error.code, b.error.description))
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown").to_string());

    match status {
        StatusCode::NOT_FOUND => ProviderError::NotFound(message),
        StatusCode::UNAUTHORIZED => ProviderError::MissingCredentials,
        _ => ProviderError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl RestaurantProvider for YelpRestaurantProvider {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError> {
        let params = [
            ("term", query.term.clone()),
            ("latitude", query.latitude.to_string()),
            ("longitude", query.longitude.to_string()),
            ("limit", query.limit.to_string()),
        ];
        let response: SearchResponse = self.get("/businesses/search", &params).await?;
        debug!(
            "Search '{}' returned {} businesses",
            query.term,
            response.businesses.len()
        );
        Ok(response.businesses.into_iter().map(to_candidate).collect())
    }

    async fn details(&self, id: &CandidateId) -> Result<RestaurantDetail, ProviderError> {
        let business: Business = self.get(&format!("/businesses/{}", id), &[]).await?;
        Ok(to_detail(business))
    }

    async fn autocomplete(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        let response: AutocompleteResponse = self
            .get("/autocomplete", &[("text", text.to_string())])
            .await?;
        Ok(response.terms.into_iter().map(|t| t.text).collect())
    }

    async fn reviews(&self, id: &CandidateId) -> Result<Vec<Review>, ProviderError> {
        let response: ReviewsResponse = self
            .get(&format!("/businesses/{}/reviews", id), &[])
            .await?;
        Ok(response.reviews.into_iter().map(to_review).collect())
    }
}
