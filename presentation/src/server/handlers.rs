//! HTTP request handlers

use super::error::ServerError;
use super::router::AppState;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use munch_application::CreateGameInput;
use munch_domain::{CandidateId, JoinCode, Review};
use serde::Deserialize;
use tracing::debug;

/// Body of `POST /newGame`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    pub search_text: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCodeQuery {
    pub join_code: String,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    pub id: String,
}

/// Search for restaurants and open a lobby; responds with the join code
pub async fn new_game(
    State(state): State<AppState>,
    Json(request): Json<NewGameRequest>,
) -> Result<(StatusCode, String), ServerError> {
    let input = CreateGameInput::new(request.search_text, request.latitude, request.longitude);
    let code = state.create_game.execute(input).await?;
    Ok((StatusCode::CREATED, code.to_string()))
}

/// 200 if a game exists under the code, 404 otherwise
pub async fn check_game(
    State(state): State<AppState>,
    Query(query): Query<JoinCodeQuery>,
) -> Result<StatusCode, ServerError> {
    let code = JoinCode::from(query.join_code);
    if state.hub.check_game(code).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServerError::GameNotFound)
    }
}

pub async fn autocomplete(
    State(state): State<AppState>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<Vec<String>>, ServerError> {
    debug!("Autocomplete for '{}'", query.keyword);
    let terms = state.provider.autocomplete(&query.keyword).await?;
    Ok(Json(terms))
}

pub async fn reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<Vec<Review>>, ServerError> {
    let reviews = state.provider.reviews(&CandidateId::from(query.id)).await?;
    Ok(Json(reviews))
}
