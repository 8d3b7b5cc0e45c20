//! Route table and shared handler state

use super::{handlers, ws};
use axum::Router;
use axum::routing::{get, post};
use munch_application::{CreateGameUseCase, GameHandle, RestaurantProvider};
use std::sync::Arc;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub hub: GameHandle,
    pub create_game: Arc<CreateGameUseCase>,
    pub provider: Arc<dyn RestaurantProvider>,
}

impl AppState {
    pub fn new(
        hub: GameHandle,
        create_game: CreateGameUseCase,
        provider: Arc<dyn RestaurantProvider>,
    ) -> Self {
        Self {
            hub,
            create_game: Arc::new(create_game),
            provider,
        }
    }
}

/// Build the HTTP + WebSocket router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/newGame", post(handlers::new_game))
        .route("/checkGame", get(handlers::check_game))
        .route("/autocomplete", get(handlers::autocomplete))
        .route("/reviews", get(handlers::reviews))
        .route("/ws", get(ws::upgrade))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use munch_application::{
        GameDispatcher, GameHub, GameParams, ProviderError, SearchQuery,
    };
    use munch_domain::{Candidate, CandidateId, RestaurantDetail, Review, SessionRegistry};
    use tokio_util::sync::CancellationToken;
    use tower::ServiceExt;

    /// Provider whose search results are fixed up front
    struct StubProvider {
        search: Result<Vec<Candidate>, u16>,
    }

    #[async_trait]
    impl RestaurantProvider for StubProvider {
        async fn search(&self, _query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError> {
            self.search.clone().map_err(|status| ProviderError::Status {
                status,
                message: "upstream down".to_string(),
            })
        }

        async fn details(&self, id: &CandidateId) -> Result<RestaurantDetail, ProviderError> {
            Ok(RestaurantDetail::new(id.clone(), id.as_str()))
        }

        async fn autocomplete(&self, text: &str) -> Result<Vec<String>, ProviderError> {
            Ok(vec![format!("{text} tacos"), format!("{text} pizza")])
        }

        async fn reviews(&self, id: &CandidateId) -> Result<Vec<Review>, ProviderError> {
            Err(ProviderError::NotFound(id.to_string()))
        }
    }

    fn app(search: Result<Vec<Candidate>, u16>) -> (Router, CancellationToken) {
        let provider: Arc<dyn RestaurantProvider> = Arc::new(StubProvider { search });
        let cancel = CancellationToken::new();
        let dispatcher = GameDispatcher::new(provider.clone(), SessionRegistry::new());
        let (hub, _task) = GameHub::spawn(dispatcher, &GameParams::default(), cancel.clone());
        let create_game = CreateGameUseCase::new(provider.clone(), hub.clone());
        (
            build_router(AppState::new(hub, create_game, provider)),
            cancel,
        )
    }

    fn new_game_request() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/newGame")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"searchText":"tacos","latitude":40.7,"longitude":-74.0}"#,
            ))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_new_game_then_check_game() {
        let (router, cancel) = app(Ok(vec![Candidate::new("a", "A"), Candidate::new("b", "B")]));

        let response = router.clone().oneshot(new_game_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let code = body_text(response).await;
        assert_eq!(code.len(), 6);

        let response = router
            .oneshot(get(&format!("/checkGame?joinCode={code}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        cancel.cancel();
    }

    #[tokio::test]
    async fn test_check_unknown_game() {
        let (router, cancel) = app(Ok(vec![]));
        let response = router.oneshot(get("/checkGame?joinCode=nope42")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        cancel.cancel();
    }

    #[tokio::test]
    async fn test_new_game_with_no_results() {
        let (router, cancel) = app(Ok(vec![]));
        let response = router.oneshot(new_game_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        cancel.cancel();
    }

    #[tokio::test]
    async fn test_new_game_provider_failure() {
        let (router, cancel) = app(Err(500));
        let response = router.oneshot(new_game_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        cancel.cancel();
    }

    #[tokio::test]
    async fn test_new_game_rejects_malformed_body() {
        let (router, cancel) = app(Ok(vec![Candidate::new("a", "A")]));
        let request = Request::builder()
            .method("POST")
            .uri("/newGame")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"searchText":"tacos"}"#))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
        cancel.cancel();
    }

    #[tokio::test]
    async fn test_autocomplete_passthrough() {
        let (router, cancel) = app(Ok(vec![]));
        let response = router.oneshot(get("/autocomplete?keyword=fish")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let terms: Vec<String> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(terms, vec!["fish tacos", "fish pizza"]);
        cancel.cancel();
    }

    #[tokio::test]
    async fn test_reviews_not_found() {
        let (router, cancel) = app(Ok(vec![]));
        let response = router.oneshot(get("/reviews?id=missing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        cancel.cancel();
    }
}
