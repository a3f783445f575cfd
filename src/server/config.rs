use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HTTP_BIND_ADDR: &str = "0.0.0.0:5000";

/// URLs served by the static-link slash commands.
///
/// Unset links are answered with an ephemeral "not configured" reply instead of
/// a URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkConfig {
    pub apka: Option<String>,
    pub generator: Option<String>,
    pub admin_panel: Option<String>,
    pub panel: Option<String>,
}

pub struct Config {
    pub discord_bot_token: String,
    pub http_bind_addr: SocketAddr,
    pub prune_stale_channels: bool,
    pub links: LinkConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_bot_token = std::env::var("DISCORD_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let bind_addr = optional_var("HTTP_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_HTTP_BIND_ADDR.to_string());
        let http_bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "HTTP_BIND_ADDR".to_string(),
                value: bind_addr.clone(),
            })?;

        let prune_stale_channels = match optional_var("PRUNE_STALE_CHANNELS") {
            Some(value) => parse_bool("PRUNE_STALE_CHANNELS", &value)?,
            None => false,
        };

        Ok(Self {
            discord_bot_token,
            http_bind_addr,
            prune_stale_channels,
            links: LinkConfig {
                apka: optional_var("APKA_URL"),
                generator: optional_var("GENERATOR_URL"),
                admin_panel: optional_var("ADMIN_PANEL_URL"),
                panel: optional_var("PANEL_URL"),
            },
        })
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
