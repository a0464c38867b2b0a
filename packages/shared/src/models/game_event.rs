use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened on the court. Only `Score` carries a point value today; the
/// other kinds are logged by the client for play-by-play display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameEventKind {
    Score,
    Block,
    Steal,
    HotStreak,
}

/// Append-only log entry for a single in-game action. Never mutated or
/// deleted once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub game_id: String,
    pub player_id: String,
    pub kind: GameEventKind,
    pub points: Option<i32>,
    pub timestamp: DateTime<Utc>,
}

impl GameEvent {
    pub fn score(game_id: &str, player_id: &str, points: i32) -> Self {
        GameEvent {
            game_id: game_id.to_string(),
            player_id: player_id.to_string(),
            kind: GameEventKind::Score,
            points: Some(points),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_event_carries_points() {
        let event = GameEvent::score("game-1", "player-1", 2);

        assert_eq!(event.game_id, "game-1");
        assert_eq!(event.player_id, "player-1");
        assert_eq!(event.kind, GameEventKind::Score);
        assert_eq!(event.points, Some(2));
    }

    #[test]
    fn test_event_kind_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&GameEventKind::Score).unwrap(),
            "\"score\""
        );
        assert_eq!(
            serde_json::to_string(&GameEventKind::HotStreak).unwrap(),
            "\"hotStreak\""
        );
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = GameEvent::score("game-2", "player-2", 3);

        let serialized = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.game_id, event.game_id);
        assert_eq!(deserialized.kind, GameEventKind::Score);
        assert_eq!(deserialized.points, Some(3));
    }
}
