pub mod requests;
pub mod responses;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::player::Player;

/// Regulation length of one match, in seconds.
pub const GAME_DURATION_SECS: u32 = 60;

/// Match status. Transitions are forward-only: a waiting game either starts
/// playing or is deleted by its creator, and a finished game never reopens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

/// One match between two players. `player2_id` is unset while the game sits
/// in the waiting pool; `winner_id` stays unset for ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub game_id: String,
    pub player1_id: String,
    pub player2_id: Option<String>,
    pub player1_score: i32,
    pub player2_score: i32,
    pub status: GameStatus,
    pub winner_id: Option<String>,
    pub time_left: u32,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Game {
    pub fn new(player1_id: &str) -> Self {
        Game {
            game_id: Uuid::new_v4().to_string(),
            player1_id: player1_id.to_string(),
            player2_id: None,
            player1_score: 0,
            player2_score: 0,
            status: GameStatus::Waiting,
            winner_id: None,
            time_left: GAME_DURATION_SECS,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
        }
    }

    pub fn is_participant(&self, player_id: &str) -> bool {
        self.player1_id == player_id || self.player2_id.as_deref() == Some(player_id)
    }

    /// The participant with the strictly higher score, or `None` on a tie.
    pub fn leading_player(&self) -> Option<&str> {
        if self.player1_score > self.player2_score {
            Some(&self.player1_id)
        } else if self.player2_score > self.player1_score {
            self.player2_id.as_deref()
        } else {
            None
        }
    }
}

/// A game joined with its players' profiles, as served to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    #[serde(flatten)]
    pub game: Game,
    pub player1: Option<Player>,
    pub player2: Option<Player>,
}
