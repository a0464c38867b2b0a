use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::{DateTime, Utc};
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items, to_item};

use crate::models::game::Game;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError>;

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError>;

    async fn update_game(&self, game: &Game) -> Result<(), GameRepositoryError>;

    async fn delete_game(&self, game_id: &str) -> Result<(), GameRepositoryError>;

    /// Atomically fill the open player-two slot of a waiting game, moving it
    /// to playing. Returns false when the slot was taken (or the game left
    /// the waiting pool) between the caller's read and this write.
    async fn claim_player_two(
        &self,
        game_id: &str,
        player2_id: &str,
        started_at: DateTime<Utc>,
    ) -> Result<bool, GameRepositoryError>;

    /// All games created by this player, newest first.
    async fn find_games_by_player_one(
        &self,
        player1_id: &str,
    ) -> Result<Vec<Game>, GameRepositoryError>;

    /// The waiting pool, oldest first.
    async fn find_waiting_games(&self) -> Result<Vec<Game>, GameRepositoryError>;

    async fn find_playing_games(&self) -> Result<Vec<Game>, GameRepositoryError>;

    /// Finished games, newest first.
    async fn find_finished_games(&self, limit: i32) -> Result<Vec<Game>, GameRepositoryError>;
}

pub struct DynamoDbGameRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbGameRepository {
    pub fn new(client: Client) -> Self {
        let table_name =
            std::env::var("GAMES_TABLE").expect("GAMES_TABLE environment variable must be set");
        Self { client, table_name }
    }

    async fn query_by_status(
        &self,
        status: &str,
        newest_first: bool,
        limit: Option<i32>,
    ) -> Result<Vec<Game>, GameRepositoryError> {
        let mut request = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("status-index")
            .key_condition_expression("#status = :status")
            .expression_attribute_names("#status", "status")
            .expression_attribute_values(":status", AttributeValue::S(status.to_string()))
            .scan_index_forward(!newest_first);

        if let Some(limit) = limit {
            request = request.limit(limit);
        }

        let result = request
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        match result.items {
            Some(items) => {
                from_items(items).map_err(|e| GameRepositoryError::Serialization(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl GameRepository for DynamoDbGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let item = to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("game_id", AttributeValue::S(game_id.to_string()))
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        match result.item {
            Some(item) => from_item(item)
                .map(Some)
                .map_err(|e| GameRepositoryError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn update_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let item = to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(game_id)")
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn delete_game(&self, game_id: &str) -> Result<(), GameRepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("game_id", AttributeValue::S(game_id.to_string()))
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn claim_player_two(
        &self,
        game_id: &str,
        player2_id: &str,
        started_at: DateTime<Utc>,
    ) -> Result<bool, GameRepositoryError> {
        let update_result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("game_id", AttributeValue::S(game_id.to_string()))
            .update_expression(
                "SET player2_id = :player2, #status = :playing, started_at = :started",
            )
            .condition_expression("#status = :waiting AND attribute_not_exists(player2_id)")
            .expression_attribute_names("#status", "status")
            .expression_attribute_values(":player2", AttributeValue::S(player2_id.to_string()))
            .expression_attribute_values(":playing", AttributeValue::S("playing".to_string()))
            .expression_attribute_values(":waiting", AttributeValue::S("waiting".to_string()))
            .expression_attribute_values(":started", AttributeValue::S(started_at.to_rfc3339()))
            .send()
            .await;

        match update_result {
            Ok(_) => Ok(true),
            Err(e) => {
                // A failed condition check means another player won the slot.
                if let SdkError::ServiceError(service_err) = &e {
                    if service_err.err().is_conditional_check_failed_exception() {
                        return Ok(false);
                    }
                }
                Err(GameRepositoryError::DynamoDb(e.to_string()))
            }
        }
    }

    async fn find_games_by_player_one(
        &self,
        player1_id: &str,
    ) -> Result<Vec<Game>, GameRepositoryError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("player1-index")
            .key_condition_expression("player1_id = :player1")
            .expression_attribute_values(":player1", AttributeValue::S(player1_id.to_string()))
            .scan_index_forward(false)
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        match result.items {
            Some(items) => {
                from_items(items).map_err(|e| GameRepositoryError::Serialization(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    async fn find_waiting_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        self.query_by_status("waiting", false, None).await
    }

    async fn find_playing_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        self.query_by_status("playing", false, None).await
    }

    async fn find_finished_games(&self, limit: i32) -> Result<Vec<Game>, GameRepositoryError> {
        self.query_by_status("finished", true, Some(limit)).await
    }
}
