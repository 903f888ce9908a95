//! # Date Idea Bot Main Entry Point
//!
//! Loads configuration, initializes logging, prepares and seeds the
//! database, then runs the Telegram bot next to the health endpoint.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;

use date_idea_bot::bot::handlers::{BotHandler, BotSettings};
use date_idea_bot::config::Config;
use date_idea_bot::database::connection::DatabaseManager;
use date_idea_bot::database::seed::DEFAULT_IDEAS;
use date_idea_bot::services::health::HealthService;
use date_idea_bot::utils::logging::{init_tracing, log_system_event};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize logging
    let _log_guard = init_tracing(config.log_dir.as_deref());

    info!("Starting Date Idea Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Database: {}, HTTP Port: {}, Idea delay: {:?}",
        config.database_url, config.http_port, config.idea_delay);

    // Initialize database
    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    info!("Running database migrations...");
    db_manager.run_migrations().await?;
    let seeded = db_manager.seed_ideas_if_empty(DEFAULT_IDEAS).await?;
    if seeded > 0 {
        log_system_event("Seeded ideas", Some(&format!("{seeded} rows")));
    }
    let db_arc = Arc::new(db_manager);
    info!("Database initialized successfully");

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(db_arc.as_ref().clone(), BotSettings::from_config(&config));
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(db_arc.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
