mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{
    bot, config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;
    let state = AppState::from_config(&config);

    tracing::info!("Starting guildkeeper");

    let bot_client = bot::start::init_bot(&config, state.clone()).await?;

    // Start Discord bot in a separate task
    let connection = state.connection.clone();
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client, connection).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let listener = startup::bind_http_listener(&config).await?;
    tracing::info!("HTTP API listening on {}", config.http_bind_addr);

    axum::serve(listener, router::router().with_state(state)).await?;

    Ok(())
}
