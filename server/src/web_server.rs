use axum::{Router, routing::put};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::game_handler::handle_game_state;
use crate::log;
use crate::server_config::ServerConfig;

pub async fn run_web_server(config: ServerConfig) {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/game-state", put(handle_game_state))
        .fallback_service(ServeDir::new(&config.static_files_path))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    log!("Tic-tac-toe server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app)
        .await
        .expect("Web server error");
}
