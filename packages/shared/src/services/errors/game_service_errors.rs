use crate::repositories::errors::game_event_repository_errors::GameEventRepositoryError;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;

#[derive(Debug)]
pub enum GameServiceError {
    GameNotFound,
    GameNotActive,
    NotAParticipant,
    ValidationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::GameNotFound => write!(f, "Game not found"),
            GameServiceError::GameNotActive => write!(f, "Game not active"),
            GameServiceError::NotAParticipant => write!(f, "Not in this game"),
            GameServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            GameServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<GameRepositoryError> for GameServiceError {
    fn from(err: GameRepositoryError) -> Self {
        match err {
            GameRepositoryError::NotFound => GameServiceError::GameNotFound,
            other => GameServiceError::RepositoryError(other.to_string()),
        }
    }
}

impl From<PlayerRepositoryError> for GameServiceError {
    fn from(err: PlayerRepositoryError) -> Self {
        GameServiceError::RepositoryError(err.to_string())
    }
}

impl From<GameEventRepositoryError> for GameServiceError {
    fn from(err: GameEventRepositoryError) -> Self {
        GameServiceError::RepositoryError(err.to_string())
    }
}
