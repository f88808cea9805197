use clarity_auth::TokenService;
use clarity_server::{AppState, build_router, demo, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = clarity_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting clarity-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database pool, migrated
    let pool = clarity_db::database::open(&config.database_path()?).await?;
    info!("Database connection established");

    // validate() guarantees the secret is present
    let secret = config.auth.jwt_secret.as_deref().unwrap_or_default();
    let tokens = TokenService::with_hs256(
        secret.as_bytes(),
        chrono::Duration::days(config.auth.token_ttl_days),
    )?;

    let uploads_dir = config.uploads_path()?;
    std::fs::create_dir_all(&uploads_dir)?;

    let app_state = AppState::new(
        pool,
        tokens,
        uploads_dir,
        config.uploads.max_photo_bytes,
        config.server.cors_origins.clone(),
    );

    demo::ensure_demo_user(&app_state.users, &config.demo).await?;

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
