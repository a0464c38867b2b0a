use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchmakeRequest {
    pub player_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScorePointRequest {
    pub player_id: String,
    pub points: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateGameTimeRequest {
    pub time_left: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeaveGameRequest {
    pub player_id: String,
}
