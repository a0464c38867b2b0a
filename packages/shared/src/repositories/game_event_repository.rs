use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::{from_items, to_item};

use crate::models::game_event::GameEvent;
use crate::repositories::errors::game_event_repository_errors::GameEventRepositoryError;

#[async_trait]
pub trait GameEventRepository: Send + Sync {
    async fn record_event(&self, event: &GameEvent) -> Result<(), GameEventRepositoryError>;

    /// Events for one game, newest first.
    async fn get_events_for_game(
        &self,
        game_id: &str,
        limit: i32,
    ) -> Result<Vec<GameEvent>, GameEventRepositoryError>;
}

pub struct DynamoDbGameEventRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbGameEventRepository {
    pub fn new(client: Client) -> Self {
        let table_name = std::env::var("GAME_EVENTS_TABLE")
            .expect("GAME_EVENTS_TABLE environment variable must be set");
        Self { client, table_name }
    }
}

#[async_trait]
impl GameEventRepository for DynamoDbGameEventRepository {
    async fn record_event(&self, event: &GameEvent) -> Result<(), GameEventRepositoryError> {
        let item = to_item(event)
            .map_err(|e| GameEventRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| GameEventRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn get_events_for_game(
        &self,
        game_id: &str,
        limit: i32,
    ) -> Result<Vec<GameEvent>, GameEventRepositoryError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("game_id = :game_id")
            .expression_attribute_values(":game_id", AttributeValue::S(game_id.to_string()))
            .scan_index_forward(false)
            .limit(limit)
            .send()
            .await
            .map_err(|e| GameEventRepositoryError::DynamoDb(e.to_string()))?;

        match result.items {
            Some(items) => from_items(items)
                .map_err(|e| GameEventRepositoryError::Serialization(e.to_string())),
            None => Ok(Vec::new()),
        }
    }
}
