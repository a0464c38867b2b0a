pub mod requests;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Jersey colors handed out to new players, one picked at random on creation.
pub const AVATAR_COLORS: [&str; 10] = [
    "#ff6b00", "#00d4ff", "#ffd700", "#ff3366", "#00ff88", "#9933ff", "#ff9500", "#00ccff",
    "#ff0066", "#33ff99",
];

/// A player profile with lifetime stats. One per authenticated identity,
/// created lazily on the first profile request and never deleted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub player_id: String,
    pub user_id: String,
    pub username: String,
    pub avatar_color: String,
    pub wins: u32,
    pub losses: u32,
    pub total_points: i64,
    pub hot_streak: u32,
    pub best_streak: u32,
    pub games_played: u32,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(user_id: &str, email: Option<&str>) -> Self {
        let mut rng = rand::thread_rng();

        let username = match email
            .and_then(|e| e.split('@').next())
            .filter(|local| !local.is_empty())
        {
            Some(local) => local.to_string(),
            None => format!("Player{}", rng.gen_range(0..10_000)),
        };

        let avatar_color = AVATAR_COLORS
            .choose(&mut rng)
            .copied()
            .unwrap_or(AVATAR_COLORS[0])
            .to_string();

        Player {
            player_id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            username,
            avatar_color,
            wins: 0,
            losses: 0,
            total_points: 0,
            hot_streak: 0,
            best_streak: 0,
            games_played: 0,
            created_at: Utc::now(),
        }
    }

    /// Fold one finished game into the lifetime aggregates. A game with no
    /// winner counts toward `games_played` but neither `wins` nor `losses`,
    /// and it always breaks the hot streak.
    pub fn apply_game_result(&mut self, won: bool, had_winner: bool, final_score: i32) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        } else if had_winner {
            self.losses += 1;
        }
        self.total_points += final_score as i64;
        self.hot_streak = if won { self.hot_streak + 1 } else { 0 };
        self.best_streak = self.best_streak.max(self.hot_streak);
    }

    /// Win percentage over games played, 0 for a fresh profile.
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            0
        } else {
            self.wins * 100 / self.games_played
        }
    }
}
