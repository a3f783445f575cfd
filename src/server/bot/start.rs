use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::{connection::ConnectionTracker, handler::Handler},
    config::Config,
    error::AppError,
    state::AppState,
};

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - The token was rejected or the client could not be built
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Runs the Discord bot until the gateway connection ends.
///
/// This blocks until shutdown and should be called from within a `tokio::spawn`
/// task. The connection state is reset to disconnected when the client stops,
/// whether it returned cleanly or with an error.
pub async fn start_bot(mut client: Client, connection: ConnectionTracker) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");
    connection.connecting().await;

    let result = client.start().await;

    connection.disconnected().await;
    result?;

    Ok(())
}
