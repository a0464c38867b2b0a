use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use lambda_http::tracing::{debug, error};
use serde::Deserialize;

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::game::requests::{
    LeaveGameRequest, MatchmakeRequest, ScorePointRequest, UpdateGameTimeRequest,
};
use shared::models::game::responses::MatchmakeResponse;
use shared::models::game::GameView;
use shared::models::game_event::GameEvent;
use shared::services::errors::game_service_errors::GameServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games/matchmake", post(matchmake))
        .route("/games/active", get(get_active_game))
        .route("/games/recent", get(get_recent_games))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/score", post(score_point))
        .route("/games/{id}/time", put(update_game_time))
        .route("/games/{id}/end", post(end_game))
        .route("/games/{id}/leave", post(leave_game))
        .route("/games/{id}/events", get(get_game_events))
}

#[derive(Debug, Deserialize)]
struct RecentGamesQuery {
    limit: Option<usize>,
}

async fn matchmake(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<MatchmakeRequest>,
) -> Result<Json<MatchmakeResponse>, ApiError> {
    let game_id = state
        .matchmaking_service
        .find_or_create_game(&payload.player_id)
        .await
        .map_err(|e| {
            error!(
                "Matchmaking failed for player {}: {}",
                payload.player_id, e
            );
            ApiError::from(e)
        })?;

    debug!("Player {} matched into game {}", payload.player_id, game_id);
    Ok(Json(MatchmakeResponse { game_id }))
}

async fn get_game(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(game_id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    state
        .game_service
        .get_game(&game_id)
        .await
        .map_err(|e| {
            error!("Failed to retrieve game {}: {}", game_id, e);
            ApiError::from(e)
        })?
        .map(Json)
        .ok_or(ApiError::GameService(GameServiceError::GameNotFound))
}

async fn get_active_game(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Response, ApiError> {
    let player = state
        .player_service
        .get_current_player(&authenticated_user.user_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to resolve player for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;

    let Some(player) = player else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let active = state
        .game_service
        .get_active_game(&player.player_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to find active game for player {}: {}",
                player.player_id, e
            );
            ApiError::from(e)
        })?;

    match active {
        Some(view) => Ok(Json(view).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

async fn score_point(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(game_id): Path<String>,
    Json(payload): Json<ScorePointRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .game_service
        .score_point(&game_id, &payload.player_id, payload.points)
        .await
        .map_err(|e| {
            error!(
                "Failed to score {} points for player {} in game {}: {}",
                payload.points, payload.player_id, game_id, e
            );
            ApiError::from(e)
        })?;

    debug!(
        "Player {} scored {} in game {}",
        payload.player_id, payload.points, game_id
    );
    Ok(StatusCode::OK)
}

async fn update_game_time(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(game_id): Path<String>,
    Json(payload): Json<UpdateGameTimeRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .game_service
        .update_game_time(&game_id, payload.time_left)
        .await
        .map_err(|e| {
            error!("Failed to update clock for game {}: {}", game_id, e);
            ApiError::from(e)
        })?;

    Ok(StatusCode::OK)
}

async fn end_game(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(game_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.game_service.end_game(&game_id).await.map_err(|e| {
        error!("Failed to end game {}: {}", game_id, e);
        ApiError::from(e)
    })?;

    debug!("Game {} ended", game_id);
    Ok(StatusCode::OK)
}

async fn leave_game(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(game_id): Path<String>,
    Json(payload): Json<LeaveGameRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .game_service
        .leave_game(&game_id, &payload.player_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to remove player {} from game {}: {}",
                payload.player_id, game_id, e
            );
            ApiError::from(e)
        })?;

    debug!("Player {} left game {}", payload.player_id, game_id);
    Ok(StatusCode::OK)
}

async fn get_recent_games(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Query(query): Query<RecentGamesQuery>,
) -> Result<Json<Vec<GameView>>, ApiError> {
    let player = state
        .player_service
        .get_current_player(&authenticated_user.user_id)
        .await
        .map_err(ApiError::from)?;

    let Some(player) = player else {
        return Ok(Json(Vec::new()));
    };

    state
        .game_service
        .get_recent_games(&player.player_id, query.limit)
        .await
        .map(Json)
        .map_err(|e| {
            error!(
                "Failed to load match history for player {}: {}",
                player.player_id, e
            );
            ApiError::from(e)
        })
}

async fn get_game_events(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<GameEvent>>, ApiError> {
    state
        .game_service
        .get_game_events(&game_id)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to load events for game {}: {}", game_id, e);
            ApiError::from(e)
        })
}
