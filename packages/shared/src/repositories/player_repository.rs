use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items, to_item};

use crate::models::player::Player;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError>;

    async fn get_player(&self, player_id: &str) -> Result<Player, PlayerRepositoryError>;

    async fn find_player_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Player>, PlayerRepositoryError>;

    async fn update_player(&self, player: &Player) -> Result<(), PlayerRepositoryError>;

    async fn list_players(&self, limit: i32) -> Result<Vec<Player>, PlayerRepositoryError>;
}

pub struct DynamoDbPlayerRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbPlayerRepository {
    pub fn new(client: Client) -> Self {
        let table_name =
            std::env::var("PLAYERS_TABLE").expect("PLAYERS_TABLE environment variable must be set");
        Self { client, table_name }
    }
}

#[async_trait]
impl PlayerRepository for DynamoDbPlayerRepository {
    async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
        let item = to_item(player)
            .map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn get_player(&self, player_id: &str) -> Result<Player, PlayerRepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("player_id", AttributeValue::S(player_id.to_string()))
            .send()
            .await
            .map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;

        match result.item {
            Some(item) => {
                from_item(item).map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))
            }
            None => Err(PlayerRepositoryError::NotFound),
        }
    }

    async fn find_player_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Player>, PlayerRepositoryError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("user-index")
            .key_condition_expression("user_id = :user_id")
            .expression_attribute_values(":user_id", AttributeValue::S(user_id.to_string()))
            .limit(1)
            .send()
            .await
            .map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;

        match result.items.and_then(|items| items.into_iter().next()) {
            Some(item) => from_item(item)
                .map(Some)
                .map_err(|e| PlayerRepositoryError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn update_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
        let item = to_item(player)
            .map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(player_id)")
            .send()
            .await
            .map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn list_players(&self, limit: i32) -> Result<Vec<Player>, PlayerRepositoryError> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit)
            .send()
            .await
            .map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;

        match result.items {
            Some(items) => {
                from_items(items).map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// In-memory stand-in keyed by player id, for service tests.
    pub struct MockPlayerRepository {
        pub players: Mutex<HashMap<String, Player>>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Self {
                players: Mutex::new(HashMap::new()),
            }
        }

        pub fn with_players(self, players: Vec<Player>) -> Self {
            {
                let mut map = self.players.lock().unwrap();
                for player in players {
                    map.insert(player.player_id.clone(), player);
                }
            }
            self
        }

        pub fn stored(&self, player_id: &str) -> Option<Player> {
            self.players.lock().unwrap().get(player_id).cloned()
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
            self.players
                .lock()
                .unwrap()
                .insert(player.player_id.clone(), player.clone());
            Ok(())
        }

        async fn get_player(&self, player_id: &str) -> Result<Player, PlayerRepositoryError> {
            self.players
                .lock()
                .unwrap()
                .get(player_id)
                .cloned()
                .ok_or(PlayerRepositoryError::NotFound)
        }

        async fn find_player_by_user(
            &self,
            user_id: &str,
        ) -> Result<Option<Player>, PlayerRepositoryError> {
            Ok(self
                .players
                .lock()
                .unwrap()
                .values()
                .find(|player| player.user_id == user_id)
                .cloned())
        }

        async fn update_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
            let mut map = self.players.lock().unwrap();
            if !map.contains_key(&player.player_id) {
                return Err(PlayerRepositoryError::NotFound);
            }
            map.insert(player.player_id.clone(), player.clone());
            Ok(())
        }

        async fn list_players(&self, limit: i32) -> Result<Vec<Player>, PlayerRepositoryError> {
            let mut players: Vec<Player> = self.players.lock().unwrap().values().cloned().collect();
            players.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            players.truncate(limit as usize);
            Ok(players)
        }
    }

    #[tokio::test]
    async fn test_find_player_by_user_matches_identity() {
        let player = Player::new("user-1", Some("one@example.com"));
        let repository = MockPlayerRepository::new().with_players(vec![player.clone()]);

        let found = repository.find_player_by_user("user-1").await.unwrap();
        assert_eq!(found.unwrap().player_id, player.player_id);

        let missing = repository.find_player_by_user("user-2").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_player_requires_existing_record() {
        let repository = MockPlayerRepository::new();
        let player = Player::new("user-1", None);

        let result = repository.update_player(&player).await;
        assert!(matches!(result, Err(PlayerRepositoryError::NotFound)));
    }
}
