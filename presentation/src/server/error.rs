//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use munch_application::{CreateGameError, HubError, ProviderError};
use thiserror::Error;
use tracing::warn;

/// Errors surfaced by the HTTP handlers
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("No restaurants found for this search")]
    NoCandidates,

    #[error("Game not found")]
    GameNotFound,

    #[error("Restaurant provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Game server unavailable: {0}")]
    Hub(HubError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NoCandidates => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::GameNotFound => StatusCode::NOT_FOUND,
            ServerError::Provider(ProviderError::NotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Provider(_) => StatusCode::BAD_GATEWAY,
            ServerError::Hub(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<HubError> for ServerError {
    fn from(error: HubError) -> Self {
        ServerError::Hub(error)
    }
}

impl From<CreateGameError> for ServerError {
    fn from(error: CreateGameError) -> Self {
        match error {
            CreateGameError::NoCandidates => ServerError::NoCandidates,
            CreateGameError::Provider(e) => ServerError::Provider(e),
            CreateGameError::Hub(e) => ServerError::Hub(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("Request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
