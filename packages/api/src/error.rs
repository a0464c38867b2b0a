use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::services::errors::{
    auth_service_errors::AuthServiceError, game_service_errors::GameServiceError,
    matchmaking_service_errors::MatchmakingServiceError,
    player_service_errors::PlayerServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    PlayerService(PlayerServiceError),
    MatchmakingService(MatchmakingServiceError),
    GameService(GameServiceError),
    AuthService(AuthServiceError),
}

impl From<PlayerServiceError> for ApiError {
    fn from(error: PlayerServiceError) -> Self {
        ApiError::PlayerService(error)
    }
}

impl From<MatchmakingServiceError> for ApiError {
    fn from(error: MatchmakingServiceError) -> Self {
        ApiError::MatchmakingService(error)
    }
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::PlayerService(PlayerServiceError::PlayerNotFound) => StatusCode::NOT_FOUND,
            ApiError::PlayerService(PlayerServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PlayerService(PlayerServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::MatchmakingService(MatchmakingServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MatchmakingService(MatchmakingServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::GameService(GameServiceError::GameNotFound) => StatusCode::NOT_FOUND,
            ApiError::GameService(GameServiceError::GameNotActive) => StatusCode::CONFLICT,
            ApiError::GameService(GameServiceError::NotAParticipant) => StatusCode::FORBIDDEN,
            ApiError::GameService(GameServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::AuthService(
                AuthServiceError::InvalidCredentials
                | AuthServiceError::InvalidToken
                | AuthServiceError::ExpiredToken,
            ) => StatusCode::UNAUTHORIZED,
            ApiError::AuthService(AuthServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::AuthService(AuthServiceError::JwtError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}
