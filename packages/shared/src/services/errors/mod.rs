pub mod auth_service_errors;
pub mod game_service_errors;
pub mod matchmaking_service_errors;
pub mod player_service_errors;
