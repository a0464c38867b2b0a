use axum::{routing::get, Router};
use lambda_http::{run, tracing, Error};
use std::env::set_var;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use shared::repositories::game_event_repository::DynamoDbGameEventRepository;
use shared::repositories::game_repository::DynamoDbGameRepository;
use shared::repositories::player_repository::DynamoDbPlayerRepository;
use shared::services::auth_service::AuthService;
use shared::services::game_service::GameService;
use shared::services::matchmaking_service::MatchmakingService;
use shared::services::player_service::PlayerService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    // Set up services
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);

    let player_repository = Arc::new(DynamoDbPlayerRepository::new(client.clone()));
    let game_repository = Arc::new(DynamoDbGameRepository::new(client.clone()));
    let event_repository = Arc::new(DynamoDbGameEventRepository::new(client.clone()));

    let auth_service = Arc::new(AuthService::new());
    let player_service = Arc::new(PlayerService::new(player_repository.clone()));
    let matchmaking_service = Arc::new(MatchmakingService::new(game_repository.clone()));
    let game_service = Arc::new(GameService::new(
        game_repository,
        player_repository,
        event_repository,
    ));

    let app_state = state::AppState {
        auth_service,
        player_service,
        matchmaking_service,
        game_service,
    };

    // Configure CORS
    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Merge routes
    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::players::routes())
        .merge(routes::games::routes())
        .layer(cors)
        .with_state(app_state);

    run(app).await
}
