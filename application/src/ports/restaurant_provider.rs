//! Restaurant provider port
//!
//! Defines the interface for looking up restaurants from an external
//! directory service.

use async_trait::async_trait;
use munch_domain::{Candidate, CandidateId, RestaurantDetail, Review};
use thiserror::Error;

/// Errors that can occur during provider lookups
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Restaurant not found: {0}")]
    NotFound(String),

    #[error("No API key configured for the restaurant provider")]
    MissingCredentials,

    #[error("Timeout")]
    Timeout,
}

/// A location-based restaurant search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Free-text search term, e.g. "tacos"
    pub term: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Maximum number of results
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            term: term.into(),
            latitude,
            longitude,
            limit: 10,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Gateway to the restaurant directory
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait RestaurantProvider: Send + Sync {
    /// Ordered candidate list for a location and search term
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError>;

    /// Full detail for a single restaurant
    async fn details(&self, id: &CandidateId) -> Result<RestaurantDetail, ProviderError>;

    /// Search-term suggestions for partially typed text
    async fn autocomplete(&self, text: &str) -> Result<Vec<String>, ProviderError>;

    /// User reviews for a restaurant
    async fn reviews(&self, id: &CandidateId) -> Result<Vec<Review>, ProviderError>;
}
