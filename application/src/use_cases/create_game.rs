//! Create Game use case
//!
//! Looks up candidates for a location and registers a new lobby for them.

use super::game_hub::{GameHandle, HubError};
use crate::ports::restaurant_provider::{ProviderError, RestaurantProvider, SearchQuery};
use munch_domain::{DomainError, JoinCode};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while creating a game
#[derive(Error, Debug)]
pub enum CreateGameError {
    #[error("No restaurants found for this search")]
    NoCandidates,

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Hub error: {0}")]
    Hub(HubError),
}

impl From<HubError> for CreateGameError {
    fn from(error: HubError) -> Self {
        match error {
            HubError::Domain(DomainError::NoCandidates) => CreateGameError::NoCandidates,
            other => CreateGameError::Hub(other),
        }
    }
}

/// Input for the CreateGame use case
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameInput {
    /// Free-text search term, e.g. "pizza"
    pub search_text: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CreateGameInput {
    pub fn new(search_text: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            search_text: search_text.into(),
            latitude,
            longitude,
        }
    }
}

/// Use case for creating a game from a restaurant search
pub struct CreateGameUseCase {
    provider: Arc<dyn RestaurantProvider>,
    hub: GameHandle,
    search_limit: u32,
}

impl CreateGameUseCase {
    pub fn new(provider: Arc<dyn RestaurantProvider>, hub: GameHandle) -> Self {
        Self {
            provider,
            hub,
            search_limit: 10,
        }
    }

    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit;
        self
    }

    /// Execute the use case, returning the new game's join code
    pub async fn execute(&self, input: CreateGameInput) -> Result<JoinCode, CreateGameError> {
        let query = SearchQuery::new(input.search_text, input.latitude, input.longitude)
            .with_limit(self.search_limit);

        let candidates = self.provider.search(&query).await?;
        if candidates.is_empty() {
            warn!("Search for '{}' returned no restaurants", query.term);
            return Err(CreateGameError::NoCandidates);
        }

        let code = self.hub.create_game(candidates).await?;
        info!("New game {} for '{}'", code, query.term);
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameParams;
    use crate::use_cases::dispatch::GameDispatcher;
    use crate::use_cases::game_hub::GameHub;
    use async_trait::async_trait;
    use munch_domain::{Candidate, CandidateId, RestaurantDetail, Review, SessionRegistry};
    use std::sync::Mutex;
    use tokio_util::sync::CancellationToken;

    struct FixedSearch {
        results: Result<Vec<Candidate>, String>,
        queries: Mutex<Vec<SearchQuery>>,
    }

    impl FixedSearch {
        fn ok(ids: &[&str]) -> Self {
            Self {
                results: Ok(ids.iter().map(|id| Candidate::new(*id, *id)).collect()),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                results: Err(message.to_string()),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RestaurantProvider for FixedSearch {
        async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError> {
            self.queries.lock().unwrap().push(query.clone());
            self.results
                .clone()
                .map_err(ProviderError::RequestFailed)
        }

        async fn details(&self, id: &CandidateId) -> Result<RestaurantDetail, ProviderError> {
            Err(ProviderError::NotFound(id.to_string()))
        }

        async fn autocomplete(&self, _text: &str) -> Result<Vec<String>, ProviderError> {
            Ok(vec![])
        }

        async fn reviews(&self, _id: &CandidateId) -> Result<Vec<Review>, ProviderError> {
            Ok(vec![])
        }
    }

    fn use_case(provider: Arc<FixedSearch>) -> (CreateGameUseCase, GameHandle) {
        let dispatcher = GameDispatcher::new(provider.clone(), SessionRegistry::new());
        let (hub, _task) = GameHub::spawn(
            dispatcher,
            &GameParams::default(),
            CancellationToken::new(),
        );
        (CreateGameUseCase::new(provider, hub.clone()), hub)
    }

    #[tokio::test]
    async fn test_create_game_registers_session() {
        let provider = Arc::new(FixedSearch::ok(&["a", "b"]));
        let (use_case, hub) = use_case(provider.clone());

        let code = use_case
            .with_search_limit(5)
            .execute(CreateGameInput::new("pizza", 40.7, -74.0))
            .await
            .unwrap();

        assert!(hub.check_game(code).await.unwrap());
        let queries = provider.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].term, "pizza");
        assert_eq!(queries[0].limit, 5);
    }

    #[tokio::test]
    async fn test_empty_search_creates_nothing() {
        let provider = Arc::new(FixedSearch::ok(&[]));
        let (use_case, _hub) = use_case(provider);

        let err = use_case
            .execute(CreateGameInput::new("nothing", 0.0, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateGameError::NoCandidates));
    }

    #[tokio::test]
    async fn test_provider_failure_is_surfaced() {
        let provider = Arc::new(FixedSearch::failing("connection refused"));
        let (use_case, _hub) = use_case(provider);

        let err = use_case
            .execute(CreateGameInput::new("tacos", 1.0, 1.0))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateGameError::Provider(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_full_code_space_fails_without_stalling_hub() {
        let provider = Arc::new(FixedSearch::ok(&["a"]));
        let registry = SessionRegistry::new().with_code_length(1);
        let dispatcher = GameDispatcher::new(provider.clone(), registry);
        let (hub, _task) = GameHub::spawn(
            dispatcher,
            &GameParams::default(),
            CancellationToken::new(),
        );
        let use_case = CreateGameUseCase::new(provider, hub.clone());

        for _ in 0..36 {
            use_case
                .execute(CreateGameInput::new("tacos", 1.0, 1.0))
                .await
                .unwrap();
        }

        let err = use_case
            .execute(CreateGameInput::new("tacos", 1.0, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CreateGameError::Hub(HubError::Domain(DomainError::CodeSpaceExhausted))
        ));

        // The hub still answers afterwards
        assert!(!hub.check_game(JoinCode::from("??")).await.unwrap());
    }

    #[test]
    fn test_hub_no_candidates_maps_to_no_candidates() {
        let err = CreateGameError::from(HubError::Domain(DomainError::NoCandidates));
        assert!(matches!(err, CreateGameError::NoCandidates));

        let err = CreateGameError::from(HubError::Stopped);
        assert!(matches!(err, CreateGameError::Hub(HubError::Stopped)));
    }
}
