use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError};

/// Binds the HTTP facade's listener.
///
/// # Arguments
/// - `config` - Application configuration containing the bind address
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to `HTTP_BIND_ADDR`
/// - `Err(AppError::IoErr)` - The address is unavailable
pub async fn bind_http_listener(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(config.http_bind_addr).await?;

    Ok(listener)
}
