//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use api_server::telemetry::{TelemetryConfig, init_telemetry};
use api_server::{AppConfig, AppState, BlogServer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blog API Server on {}", config.bind_address());

    let state = AppState::new(config.database.as_ref()).await;

    if config.seed_sample_posts > 0 {
        let seeded =
            blog_infra::seed::seed_posts(state.posts.as_ref(), config.seed_sample_posts).await;
        if let Err(e) = seeded {
            tracing::error!("Failed to seed sample posts: {}", e);
        }
    }

    BlogServer::start(config.bind_address(), state, config.workers)?
        .wait()
        .await
}
