use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;

#[derive(Debug)]
pub enum PlayerServiceError {
    PlayerNotFound,
    ValidationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for PlayerServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerServiceError::PlayerNotFound => write!(f, "Player not found"),
            PlayerServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            PlayerServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for PlayerServiceError {}

impl From<PlayerRepositoryError> for PlayerServiceError {
    fn from(err: PlayerRepositoryError) -> Self {
        match err {
            PlayerRepositoryError::NotFound => PlayerServiceError::PlayerNotFound,
            other => PlayerServiceError::RepositoryError(other.to_string()),
        }
    }
}
