use std::sync::Arc;

use shared::services::auth_service::AuthService;
use shared::services::game_service::GameService;
use shared::services::matchmaking_service::MatchmakingService;
use shared::services::player_service::PlayerService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub player_service: Arc<PlayerService>,
    pub matchmaking_service: Arc<MatchmakingService>,
    pub game_service: Arc<GameService>,
}
