//! Configuration management for the sporlweb artist browser.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files and turns them into a [`ServerConfig`] that is built once
//! at startup and handed to the server.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, host/port/debug only)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, net::SocketAddr, path::PathBuf};

use crate::error::ConfigError;

/// Default bind address when neither flags nor `SERVER_ADDRESS` provide one.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";

/// Default Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default Spotify token endpoint for the client-credentials grant.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Market used for top-track lookups.
pub const DEFAULT_MARKET: &str = "US";

/// Image shown for artists without any catalog image.
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "http://placecage.com/600/400";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `sporlweb` directory if it doesn't exist. The file itself is
/// optional: every value it can provide also has a default or can come from
/// the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporlweb/.env`
/// - macOS: `~/Library/Application Support/sporlweb/.env`
/// - Windows: `%LOCALAPPDATA%/sporlweb/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the `.env` file
/// exists but cannot be read or parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlweb/.env");
    path
}

/// Client credentials for the Spotify client-credentials grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Everything the catalog client needs to reach the Spotify Web API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_url: String,
    pub token_url: String,
    pub market: String,
    /// `None` sends requests without an `Authorization` header.
    pub credentials: Option<Credentials>,
}

impl CatalogConfig {
    /// Reads the catalog settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = match (
            non_empty_var("SPOTIFY_API_AUTH_CLIENT_ID"),
            non_empty_var("SPOTIFY_API_AUTH_CLIENT_SECRET"),
        ) {
            (Some(client_id), Some(client_secret)) => Some(Credentials {
                client_id,
                client_secret,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteCredentials),
        };

        Ok(Self {
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            market: var_or("SPOTIFY_MARKET", DEFAULT_MARKET),
            credentials,
        })
    }
}

/// Server configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub debug: bool,
    pub catalog: CatalogConfig,
    pub placeholder_image_url: String,
}

impl ServerConfig {
    /// Builds the configuration from command-line overrides and the environment.
    ///
    /// `host` and `port` replace the matching half of `SERVER_ADDRESS` (or of
    /// [`DEFAULT_SERVER_ADDRESS`] when that variable is unset).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = ServerConfig::from_env(None, Some(8080), true).await?;
    /// assert_eq!(config.addr.port(), 8080);
    /// ```
    pub async fn from_env(
        host: Option<String>,
        port: Option<u16>,
        debug: bool,
    ) -> Result<Self, ConfigError> {
        let base = var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS);
        let addr = resolve_addr(&base, host, port).await?;

        Ok(Self {
            addr,
            debug,
            catalog: CatalogConfig::from_env()?,
            placeholder_image_url: var_or("PLACEHOLDER_IMAGE_URL", DEFAULT_PLACEHOLDER_IMAGE_URL),
        })
    }
}

/// Combines a base `host:port` address with optional overrides.
///
/// Host names such as `localhost` are resolved; the first address wins.
pub async fn resolve_addr(
    base: &str,
    host: Option<String>,
    port: Option<u16>,
) -> Result<SocketAddr, ConfigError> {
    let mut addr = lookup(base).await?;
    if let Some(host) = host {
        let candidate = if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, addr.port())
        } else {
            format!("{}:{}", host, addr.port())
        };
        addr = lookup(&candidate).await?;
    }
    if let Some(port) = port {
        addr.set_port(port);
    }
    Ok(addr)
}

async fn lookup(value: &str) -> Result<SocketAddr, ConfigError> {
    let invalid = || ConfigError::InvalidAddress(value.to_string());
    tokio::net::lookup_host(value)
        .await
        .map_err(|_| invalid())?
        .next()
        .ok_or_else(invalid)
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn var_or(key: &str, default: &str) -> String {
    non_empty_var(key).unwrap_or_else(|| default.to_string())
}
