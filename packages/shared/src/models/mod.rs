pub mod auth;
pub mod game;
pub mod game_event;
pub mod player;
pub mod queue;
