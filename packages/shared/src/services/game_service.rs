use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::models::game::{Game, GameStatus, GameView};
use crate::models::game_event::GameEvent;
use crate::models::player::Player;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;
use crate::repositories::game_event_repository::GameEventRepository;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::player_repository::PlayerRepository;
use crate::services::errors::game_service_errors::GameServiceError;

/// Newest events returned per game.
const GAME_EVENTS_LIMIT: i32 = 20;
/// Default page size for a player's match history.
const RECENT_GAMES_DEFAULT_LIMIT: usize = 10;
/// How far back to look for finished games when collecting the player-two
/// side of a match history.
const FINISHED_GAMES_SCAN_LIMIT: i32 = 100;

/// Owns the life of a game once matchmaking has placed players into it:
/// score keeping, the countdown, finishing (by clock or forfeit), and the
/// stats roll-up into both players' profiles.
#[derive(Clone)]
pub struct GameService {
    games: Arc<dyn GameRepository + Send + Sync>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
    events: Arc<dyn GameEventRepository + Send + Sync>,
}

impl GameService {
    pub fn new(
        games: Arc<dyn GameRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
        events: Arc<dyn GameEventRepository + Send + Sync>,
    ) -> Self {
        GameService {
            games,
            players,
            events,
        }
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Option<GameView>, GameServiceError> {
        match self.games.get_game(game_id).await? {
            Some(game) => Ok(Some(self.enrich(game).await?)),
            None => Ok(None),
        }
    }

    /// The player's current non-finished game, if any: first their own open
    /// game, then any playing game where they hold the second slot.
    pub async fn get_active_game(
        &self,
        player_id: &str,
    ) -> Result<Option<GameView>, GameServiceError> {
        let own_games = self.games.find_games_by_player_one(player_id).await?;
        if let Some(game) = own_games
            .into_iter()
            .find(|game| game.status != GameStatus::Finished)
        {
            return Ok(Some(self.enrich(game).await?));
        }

        let playing = self.games.find_playing_games().await?;
        if let Some(game) = playing
            .into_iter()
            .find(|game| game.player2_id.as_deref() == Some(player_id))
        {
            return Ok(Some(self.enrich(game).await?));
        }

        Ok(None)
    }

    /// Credit `points` to one participant of an active game and log the
    /// event. The point value is taken as-is.
    pub async fn score_point(
        &self,
        game_id: &str,
        player_id: &str,
        points: i32,
    ) -> Result<(), GameServiceError> {
        let mut game = match self.games.get_game(game_id).await? {
            Some(game) if game.status == GameStatus::Playing => game,
            _ => return Err(GameServiceError::GameNotActive),
        };

        if game.player1_id == player_id {
            game.player1_score += points;
        } else if game.player2_id.as_deref() == Some(player_id) {
            game.player2_score += points;
        } else {
            return Err(GameServiceError::NotAParticipant);
        }

        self.games.update_game(&game).await?;

        self.events
            .record_event(&GameEvent::score(game_id, player_id, points))
            .await?;

        Ok(())
    }

    /// Overwrite the countdown. A stale call against a game that is no
    /// longer playing is harmless and ignored.
    pub async fn update_game_time(
        &self,
        game_id: &str,
        time_left: u32,
    ) -> Result<(), GameServiceError> {
        let mut game = match self.games.get_game(game_id).await? {
            Some(game) if game.status == GameStatus::Playing => game,
            _ => return Ok(()),
        };

        game.time_left = time_left;
        self.games
            .update_game(&game)
            .await
            .map_err(GameServiceError::from)
    }

    /// Finish the game and fold the result into both players' aggregates.
    /// Already-finished and unknown games are left alone, so the call is
    /// safe to repeat when both clients' clocks hit zero.
    pub async fn end_game(&self, game_id: &str) -> Result<(), GameServiceError> {
        let mut game = match self.games.get_game(game_id).await? {
            Some(game) if game.status != GameStatus::Finished => game,
            _ => return Ok(()),
        };

        let winner_id = game.leading_player().map(|id| id.to_string());

        game.status = GameStatus::Finished;
        game.winner_id = winner_id.clone();
        game.finished_at = Some(Utc::now());
        self.games.update_game(&game).await?;

        debug!(
            "Game {} finished {}-{}, winner: {}",
            game.game_id,
            game.player1_score,
            game.player2_score,
            winner_id.as_deref().unwrap_or("none (tie)")
        );

        // The two profile writes below are independent; a failure between
        // them leaves one player's aggregates updated and the other's not.
        let had_winner = winner_id.is_some();
        self.apply_result_to_player(
            &game.player1_id,
            winner_id.as_deref() == Some(game.player1_id.as_str()),
            had_winner,
            game.player1_score,
        )
        .await?;

        if let Some(player2_id) = game.player2_id.clone() {
            self.apply_result_to_player(
                &player2_id,
                winner_id.as_deref() == Some(player2_id.as_str()),
                had_winner,
                game.player2_score,
            )
            .await?;
        }

        Ok(())
    }

    /// A creator abandoning a waiting game removes it; a participant leaving
    /// a playing game forfeits it to the opponent. Forfeits do not touch the
    /// players' win/loss aggregates.
    pub async fn leave_game(&self, game_id: &str, player_id: &str) -> Result<(), GameServiceError> {
        let mut game = match self.games.get_game(game_id).await? {
            Some(game) => game,
            None => return Ok(()),
        };

        if game.status == GameStatus::Waiting && game.player1_id == player_id {
            return self
                .games
                .delete_game(game_id)
                .await
                .map_err(GameServiceError::from);
        }

        if game.status == GameStatus::Playing {
            if !game.is_participant(player_id) {
                return Err(GameServiceError::NotAParticipant);
            }

            let winner_id = if game.player1_id == player_id {
                game.player2_id.clone()
            } else {
                Some(game.player1_id.clone())
            };

            game.status = GameStatus::Finished;
            game.winner_id = winner_id;
            game.finished_at = Some(Utc::now());
            self.games.update_game(&game).await?;

            debug!(
                "Player {} forfeited game {}, winner: {:?}",
                player_id, game.game_id, game.winner_id
            );
        }

        Ok(())
    }

    /// The player's finished games, newest first.
    pub async fn get_recent_games(
        &self,
        player_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<GameView>, GameServiceError> {
        let limit = limit.unwrap_or(RECENT_GAMES_DEFAULT_LIMIT);

        let mut games: Vec<Game> = self
            .games
            .find_games_by_player_one(player_id)
            .await?
            .into_iter()
            .filter(|game| game.status == GameStatus::Finished)
            .take(limit)
            .collect();

        let as_player_two = self
            .games
            .find_finished_games(FINISHED_GAMES_SCAN_LIMIT)
            .await?
            .into_iter()
            .filter(|game| game.player2_id.as_deref() == Some(player_id))
            .take(limit);
        games.extend(as_player_two);

        games.sort_by(|a, b| b.finished_at.cmp(&a.finished_at));
        games.truncate(limit);

        let mut views = Vec::with_capacity(games.len());
        for game in games {
            views.push(self.enrich(game).await?);
        }
        Ok(views)
    }

    pub async fn get_game_events(
        &self,
        game_id: &str,
    ) -> Result<Vec<GameEvent>, GameServiceError> {
        self.events
            .get_events_for_game(game_id, GAME_EVENTS_LIMIT)
            .await
            .map_err(GameServiceError::from)
    }

    /// Join the game with its players' profiles. A missing profile leaves
    /// that slot empty rather than failing the whole query.
    async fn enrich(&self, game: Game) -> Result<GameView, GameServiceError> {
        let player1 = self.fetch_player(&game.player1_id).await?;
        let player2 = match &game.player2_id {
            Some(player2_id) => self.fetch_player(player2_id).await?,
            None => None,
        };

        Ok(GameView {
            game,
            player1,
            player2,
        })
    }

    async fn fetch_player(&self, player_id: &str) -> Result<Option<Player>, GameServiceError> {
        match self.players.get_player(player_id).await {
            Ok(player) => Ok(Some(player)),
            Err(PlayerRepositoryError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn apply_result_to_player(
        &self,
        player_id: &str,
        won: bool,
        had_winner: bool,
        final_score: i32,
    ) -> Result<(), GameServiceError> {
        // A participant without a profile is skipped, not an error.
        let mut player = match self.fetch_player(player_id).await? {
            Some(player) => player,
            None => return Ok(()),
        };

        player.apply_game_result(won, had_winner, final_score);
        self.players
            .update_player(&player)
            .await
            .map_err(GameServiceError::from)
    }
}
