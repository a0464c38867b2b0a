use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::models::game::{Game, GameStatus};
use crate::repositories::game_repository::GameRepository;
use crate::services::errors::matchmaking_service_errors::MatchmakingServiceError;

/// Places a player into exactly one non-finished game: their own open game
/// if they have one, else the oldest joinable waiting game, else a fresh
/// waiting game.
#[derive(Clone)]
pub struct MatchmakingService {
    games: Arc<dyn GameRepository + Send + Sync>,
}

impl MatchmakingService {
    pub fn new(games: Arc<dyn GameRepository + Send + Sync>) -> Self {
        MatchmakingService { games }
    }

    pub async fn find_or_create_game(
        &self,
        player_id: &str,
    ) -> Result<String, MatchmakingServiceError> {
        if player_id.is_empty() {
            return Err(MatchmakingServiceError::ValidationError(
                "Player ID cannot be empty".to_string(),
            ));
        }

        // Repeated calls from a player with an open game are no-ops.
        let own_games = self.games.find_games_by_player_one(player_id).await?;
        if let Some(existing) = own_games
            .iter()
            .find(|game| game.status != GameStatus::Finished)
        {
            return Ok(existing.game_id.clone());
        }

        // Waiting pool is ordered oldest first; players never join their own
        // game. A lost claim means someone else took the slot between our
        // read and write, so move on to the next candidate.
        let waiting = self.games.find_waiting_games().await?;
        for candidate in waiting.iter().filter(|game| game.player1_id != player_id) {
            if self
                .games
                .claim_player_two(&candidate.game_id, player_id, Utc::now())
                .await?
            {
                return Ok(candidate.game_id.clone());
            }
            debug!(
                "Game {} was claimed by another player, trying next candidate",
                candidate.game_id
            );
        }

        let game = Game::new(player_id);
        self.games.create_game(&game).await?;
        Ok(game.game_id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};

    use super::*;
    use crate::repositories::errors::game_repository_errors::GameRepositoryError;
    use crate::repositories::game_repository::tests::MockGameRepository;

    fn waiting_game(player1_id: &str, age_minutes: i64) -> Game {
        let mut game = Game::new(player1_id);
        game.created_at = Utc::now() - Duration::minutes(age_minutes);
        game
    }

    #[tokio::test]
    async fn test_creates_new_waiting_game_when_pool_is_empty() {
        let repository = Arc::new(MockGameRepository::new());
        let service = MatchmakingService::new(repository.clone());

        let game_id = service.find_or_create_game("player-1").await.unwrap();

        let stored = repository.stored(&game_id).unwrap();
        assert_eq!(stored.player1_id, "player-1");
        assert_eq!(stored.status, GameStatus::Waiting);
        assert!(stored.player2_id.is_none());
    }

    #[tokio::test]
    async fn test_repeated_calls_return_the_same_game() {
        let repository = Arc::new(MockGameRepository::new());
        let service = MatchmakingService::new(repository.clone());

        let first = service.find_or_create_game("player-1").await.unwrap();
        let second = service.find_or_create_game("player-1").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repository.games.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_idempotent_while_game_is_playing() {
        let mut game = waiting_game("player-1", 1);
        game.player2_id = Some("player-2".to_string());
        game.status = GameStatus::Playing;
        let game_id = game.game_id.clone();

        let repository = Arc::new(MockGameRepository::new().with_games(vec![game]));
        let service = MatchmakingService::new(repository);

        let result = service.find_or_create_game("player-1").await.unwrap();
        assert_eq!(result, game_id);
    }

    #[tokio::test]
    async fn test_joins_waiting_game_and_starts_it() {
        let game = waiting_game("player-1", 1);
        let game_id = game.game_id.clone();

        let repository = Arc::new(MockGameRepository::new().with_games(vec![game]));
        let service = MatchmakingService::new(repository.clone());

        let result = service.find_or_create_game("player-2").await.unwrap();
        assert_eq!(result, game_id);

        let stored = repository.stored(&game_id).unwrap();
        assert_eq!(stored.status, GameStatus::Playing);
        assert_eq!(stored.player2_id.as_deref(), Some("player-2"));
        assert!(stored.started_at.is_some());
    }

    #[tokio::test]
    async fn test_joins_oldest_waiting_game_first() {
        let oldest = waiting_game("player-1", 10);
        let newer = waiting_game("player-2", 2);
        let oldest_id = oldest.game_id.clone();

        let repository = Arc::new(MockGameRepository::new().with_games(vec![newer, oldest]));
        let service = MatchmakingService::new(repository);

        let result = service.find_or_create_game("player-3").await.unwrap();
        assert_eq!(result, oldest_id);
    }

    #[tokio::test]
    async fn test_never_joins_own_waiting_game() {
        let game = waiting_game("player-1", 5);
        let game_id = game.game_id.clone();

        let repository = Arc::new(MockGameRepository::new().with_games(vec![game]));
        let service = MatchmakingService::new(repository.clone());

        let result = service.find_or_create_game("player-1").await.unwrap();

        // The existing game is the player's own, so it is returned untouched.
        assert_eq!(result, game_id);
        let stored = repository.stored(&game_id).unwrap();
        assert_eq!(stored.status, GameStatus::Waiting);
        assert!(stored.player2_id.is_none());
    }

    #[tokio::test]
    async fn test_finished_games_do_not_block_matchmaking() {
        let mut finished = waiting_game("player-1", 30);
        finished.status = GameStatus::Finished;

        let repository = Arc::new(MockGameRepository::new().with_games(vec![finished]));
        let service = MatchmakingService::new(repository.clone());

        let game_id = service.find_or_create_game("player-1").await.unwrap();

        let stored = repository.stored(&game_id).unwrap();
        assert_eq!(stored.status, GameStatus::Waiting);
        assert_eq!(repository.games.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_player_id_is_rejected() {
        let service = MatchmakingService::new(Arc::new(MockGameRepository::new()));

        let result = service.find_or_create_game("").await;
        assert!(matches!(
            result,
            Err(MatchmakingServiceError::ValidationError(_))
        ));
    }

    // Repository whose player-two claims always lose the race.
    struct LostClaimGameRepository {
        inner: MockGameRepository,
    }

    #[async_trait]
    impl GameRepository for LostClaimGameRepository {
        async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
            self.inner.create_game(game).await
        }

        async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
            self.inner.get_game(game_id).await
        }

        async fn update_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
            self.inner.update_game(game).await
        }

        async fn delete_game(&self, game_id: &str) -> Result<(), GameRepositoryError> {
            self.inner.delete_game(game_id).await
        }

        async fn claim_player_two(
            &self,
            _game_id: &str,
            _player2_id: &str,
            _started_at: DateTime<Utc>,
        ) -> Result<bool, GameRepositoryError> {
            Ok(false)
        }

        async fn find_games_by_player_one(
            &self,
            player1_id: &str,
        ) -> Result<Vec<Game>, GameRepositoryError> {
            self.inner.find_games_by_player_one(player1_id).await
        }

        async fn find_waiting_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
            self.inner.find_waiting_games().await
        }

        async fn find_playing_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
            self.inner.find_playing_games().await
        }

        async fn find_finished_games(&self, limit: i32) -> Result<Vec<Game>, GameRepositoryError> {
            self.inner.find_finished_games(limit).await
        }
    }

    #[tokio::test]
    async fn test_lost_claims_fall_back_to_a_new_game() {
        let contested = waiting_game("player-1", 5);
        let contested_id = contested.game_id.clone();

        let repository = Arc::new(LostClaimGameRepository {
            inner: MockGameRepository::new().with_games(vec![contested]),
        });
        let service = MatchmakingService::new(repository.clone());

        let game_id = service.find_or_create_game("player-2").await.unwrap();

        // Every claim lost, so the player opened a fresh waiting game.
        assert_ne!(game_id, contested_id);
        let stored = repository.inner.stored(&game_id).unwrap();
        assert_eq!(stored.player1_id, "player-2");
        assert_eq!(stored.status, GameStatus::Waiting);
    }
}
