use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[derive(Debug)]
pub enum MatchmakingServiceError {
    RepositoryError(GameRepositoryError),
    ValidationError(String),
}

impl std::fmt::Display for MatchmakingServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchmakingServiceError::RepositoryError(err) => {
                write!(f, "Repository error: {}", err)
            }
            MatchmakingServiceError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for MatchmakingServiceError {}

impl From<GameRepositoryError> for MatchmakingServiceError {
    fn from(err: GameRepositoryError) -> Self {
        MatchmakingServiceError::RepositoryError(err)
    }
}
