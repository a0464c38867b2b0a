use std::sync::Arc;

use crate::models::player::Player;
use crate::repositories::player_repository::PlayerRepository;
use crate::services::errors::player_service_errors::PlayerServiceError;

/// How many profiles to pull before ranking the leaderboard in memory.
const LEADERBOARD_SCAN_LIMIT: i32 = 100;
/// Default leaderboard page size.
const LEADERBOARD_DEFAULT_LIMIT: usize = 10;

#[derive(Clone)]
pub struct PlayerService {
    players: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(players: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        PlayerService { players }
    }

    /// The profile for an authenticated identity, created on first contact.
    pub async fn get_or_create_player(
        &self,
        user_id: &str,
        email: Option<&str>,
    ) -> Result<Player, PlayerServiceError> {
        if user_id.is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "User ID cannot be empty".to_string(),
            ));
        }

        if let Some(existing) = self.players.find_player_by_user(user_id).await? {
            return Ok(existing);
        }

        let player = Player::new(user_id, email);
        self.players.create_player(&player).await?;
        Ok(player)
    }

    pub async fn get_current_player(
        &self,
        user_id: &str,
    ) -> Result<Option<Player>, PlayerServiceError> {
        self.players
            .find_player_by_user(user_id)
            .await
            .map_err(PlayerServiceError::from)
    }

    pub async fn get_player(&self, player_id: &str) -> Result<Player, PlayerServiceError> {
        if player_id.is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "Player ID cannot be empty".to_string(),
            ));
        }
        self.players
            .get_player(player_id)
            .await
            .map_err(PlayerServiceError::from)
    }

    pub async fn update_username(
        &self,
        user_id: &str,
        username: &str,
    ) -> Result<Player, PlayerServiceError> {
        if username.trim().is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }

        let mut player = self
            .players
            .find_player_by_user(user_id)
            .await?
            .ok_or(PlayerServiceError::PlayerNotFound)?;

        player.username = username.to_string();
        self.players.update_player(&player).await?;
        Ok(player)
    }

    pub async fn update_avatar_color(
        &self,
        user_id: &str,
        color: &str,
    ) -> Result<Player, PlayerServiceError> {
        if color.trim().is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "Color cannot be empty".to_string(),
            ));
        }

        let mut player = self
            .players
            .find_player_by_user(user_id)
            .await?
            .ok_or(PlayerServiceError::PlayerNotFound)?;

        player.avatar_color = color.to_string();
        self.players.update_player(&player).await?;
        Ok(player)
    }

    /// Players ranked by wins, ties broken by total points.
    pub async fn get_leaderboard(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<Player>, PlayerServiceError> {
        let limit = limit.unwrap_or(LEADERBOARD_DEFAULT_LIMIT);

        let mut players = self.players.list_players(LEADERBOARD_SCAN_LIMIT).await?;
        players.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then_with(|| b.total_points.cmp(&a.total_points))
        });
        players.truncate(limit);
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repositories::player_repository::tests::MockPlayerRepository;

    fn ranked_player(user_id: &str, wins: u32, total_points: i64) -> Player {
        let mut player = Player::new(user_id, None);
        player.wins = wins;
        player.total_points = total_points;
        player
    }

    #[tokio::test]
    async fn test_get_or_create_player_creates_a_profile_once() {
        let repository = Arc::new(MockPlayerRepository::new());
        let service = PlayerService::new(repository.clone());

        let created = service
            .get_or_create_player("user-1", Some("hooper@example.com"))
            .await
            .unwrap();
        let fetched = service
            .get_or_create_player("user-1", Some("hooper@example.com"))
            .await
            .unwrap();

        assert_eq!(created.player_id, fetched.player_id);
        assert_eq!(created.username, "hooper");
        assert_eq!(repository.players.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_player_rejects_empty_identity() {
        let service = PlayerService::new(Arc::new(MockPlayerRepository::new()));

        let result = service.get_or_create_player("", None).await;
        assert!(matches!(
            result,
            Err(PlayerServiceError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_get_current_player_returns_none_for_unknown_identity() {
        let service = PlayerService::new(Arc::new(MockPlayerRepository::new()));

        let result = service.get_current_player("nobody").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_player_maps_missing_profile_to_not_found() {
        let service = PlayerService::new(Arc::new(MockPlayerRepository::new()));

        let result = service.get_player("missing").await;
        assert!(matches!(result, Err(PlayerServiceError::PlayerNotFound)));
    }

    #[tokio::test]
    async fn test_update_username() {
        let player = Player::new("user-1", None);
        let repository = Arc::new(MockPlayerRepository::new().with_players(vec![player.clone()]));
        let service = PlayerService::new(repository.clone());

        let updated = service.update_username("user-1", "newname").await.unwrap();

        assert_eq!(updated.username, "newname");
        assert_eq!(
            repository.stored(&player.player_id).unwrap().username,
            "newname"
        );
    }

    #[tokio::test]
    async fn test_update_username_rejects_blank_names() {
        let service = PlayerService::new(Arc::new(MockPlayerRepository::new()));

        let result = service.update_username("user-1", "   ").await;
        assert!(matches!(
            result,
            Err(PlayerServiceError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_update_avatar_color() {
        let player = Player::new("user-1", None);
        let repository = Arc::new(MockPlayerRepository::new().with_players(vec![player.clone()]));
        let service = PlayerService::new(repository);

        let updated = service
            .update_avatar_color("user-1", "#123456")
            .await
            .unwrap();

        assert_eq!(updated.avatar_color, "#123456");
    }

    #[tokio::test]
    async fn test_update_without_profile_fails() {
        let service = PlayerService::new(Arc::new(MockPlayerRepository::new()));

        let result = service.update_username("user-1", "name").await;
        assert!(matches!(result, Err(PlayerServiceError::PlayerNotFound)));
    }

    #[tokio::test]
    async fn test_leaderboard_orders_by_wins_then_points() {
        let repository = Arc::new(MockPlayerRepository::new().with_players(vec![
            ranked_player("user-1", 5, 10),
            ranked_player("user-2", 5, 20),
            ranked_player("user-3", 3, 100),
        ]));
        let service = PlayerService::new(repository);

        let leaderboard = service.get_leaderboard(Some(2)).await.unwrap();

        assert_eq!(leaderboard.len(), 2);
        assert_eq!(leaderboard[0].user_id, "user-2");
        assert_eq!(leaderboard[0].total_points, 20);
        assert_eq!(leaderboard[1].user_id, "user-1");
        // The high-scoring three-win player stays off the podium.
        assert!(leaderboard.iter().all(|p| p.wins == 5));
    }

    #[tokio::test]
    async fn test_leaderboard_default_limit() {
        let players: Vec<Player> = (0..15)
            .map(|i| ranked_player(&format!("user-{}", i), i, 0))
            .collect();
        let repository = Arc::new(MockPlayerRepository::new().with_players(players));
        let service = PlayerService::new(repository);

        let leaderboard = service.get_leaderboard(None).await.unwrap();

        assert_eq!(leaderboard.len(), 10);
        assert_eq!(leaderboard[0].wins, 14);
    }
}
