use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use lambda_http::tracing::{debug, error};
use serde::Deserialize;

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::player::requests::{UpdateAvatarColorRequest, UpdateUsernameRequest};
use shared::models::player::Player;
use shared::services::errors::player_service_errors::PlayerServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/players", post(get_or_create_player))
        .route("/players/me", get(get_current_player))
        .route("/players/me/username", put(update_username))
        .route("/players/me/color", put(update_avatar_color))
        .route("/players/{id}", get(get_player))
        .route("/leaderboard", get(get_leaderboard))
}

#[derive(Debug, Deserialize)]
struct LeaderboardQuery {
    limit: Option<usize>,
}

async fn get_or_create_player(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .player_service
        .get_or_create_player(
            &authenticated_user.user_id,
            authenticated_user.email.as_deref(),
        )
        .await
        .map_err(|e| {
            error!(
                "Failed to get or create player for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;

    debug!(
        "Resolved player {} for identity {}",
        player.player_id, authenticated_user.user_id
    );
    Ok(Json(player))
}

async fn get_current_player(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<Player>, ApiError> {
    state
        .player_service
        .get_current_player(&authenticated_user.user_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to retrieve player for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?
        .map(Json)
        .ok_or(ApiError::PlayerService(PlayerServiceError::PlayerNotFound))
}

async fn get_player(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(player_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    state
        .player_service
        .get_player(&player_id)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to retrieve player {}: {}", player_id, e);
            ApiError::from(e)
        })
}

async fn update_username(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<UpdateUsernameRequest>,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .player_service
        .update_username(&authenticated_user.user_id, &payload.username)
        .await
        .map_err(|e| {
            error!(
                "Failed to update username for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;

    debug!("Username updated for player {}", player.player_id);
    Ok(Json(player))
}

async fn update_avatar_color(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<UpdateAvatarColorRequest>,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .player_service
        .update_avatar_color(&authenticated_user.user_id, &payload.color)
        .await
        .map_err(|e| {
            error!(
                "Failed to update avatar color for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;

    debug!("Avatar color updated for player {}", player.player_id);
    Ok(Json(player))
}

async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    state
        .player_service
        .get_leaderboard(query.limit)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to load leaderboard: {}", e);
            ApiError::from(e)
        })
}
