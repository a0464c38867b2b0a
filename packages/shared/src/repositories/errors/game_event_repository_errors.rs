#[derive(Debug)]
pub enum GameEventRepositoryError {
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for GameEventRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEventRepositoryError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            GameEventRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for GameEventRepositoryError {}
