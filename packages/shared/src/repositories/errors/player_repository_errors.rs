#[derive(Debug)]
pub enum PlayerRepositoryError {
    NotFound,
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for PlayerRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRepositoryError::NotFound => write!(f, "Player not found"),
            PlayerRepositoryError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            PlayerRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for PlayerRepositoryError {}
