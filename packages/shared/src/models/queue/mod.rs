use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ticket in the standalone matchmaking queue table. The table is
/// provisioned alongside the others, but no service consumes these records
/// yet; pairing currently goes through the waiting-game pool instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueTicket {
    pub player_id: String,
    pub joined_at: DateTime<Utc>,
}

impl QueueTicket {
    pub fn new(player_id: &str) -> Self {
        QueueTicket {
            player_id: player_id.to_string(),
            joined_at: Utc::now(),
        }
    }
}
