//! Configuration management for the widget relay.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. The lookup order is:
//! 1. Environment variables already set for the process (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Built-in defaults (where applicable)
//!
//! Spotify credentials have no default and are not validated at startup. An
//! empty client id or secret only shows up once Spotify rejects the login
//! redirect or the token exchange.

use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Local development origins the widget is served from.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://127.0.0.1:5500",
    "http://127.0.0.1:8888",
    "http://localhost:5500",
    "http://localhost:8888",
];

/// Loads environment variables from a `.env` file.
///
/// Looks for `sporwidget/.env` in the platform-specific local data directory
/// first and falls back to a `.env` in the current working directory. The
/// data directory is created if it doesn't exist, so users have an obvious
/// place to drop their configuration.
///
/// Variables that are already set in the process environment are never
/// overwritten.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or if
/// neither `.env` file could be loaded. Callers treat this as a warning,
/// since every value may also come straight from the environment.
///
/// # Example
///
/// ```
/// use sporwidget::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration warning: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporwidget/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if dotenv::from_path(&path).is_ok() {
        return Ok(());
    }

    dotenv::dotenv().map(|_| ()).map_err(|e| {
        format!(
            "no .env found at {} or in the working directory: {}",
            path.display(),
            e
        )
    })
}

/// Returns the address the relay listens on (`SERVER_ADDRESS`).
///
/// Defaults to `127.0.0.1:8888`, where the widget front-end expects it.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify client id (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// Empty when unset.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").unwrap_or_default()
}

/// Returns the Spotify client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET`).
///
/// Empty when unset. The secret is only ever sent to the token endpoint and
/// is redacted from `Config`'s debug output.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").unwrap_or_default()
}

/// Returns the OAuth redirect URI (`SPOTIFY_API_REDIRECT_URI`).
///
/// Must match the redirect URI registered for the Spotify application and
/// point at this relay's `/auth/callback`, e.g.
/// `http://127.0.0.1:8888/auth/callback`.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").unwrap_or_default()
}

/// Returns the Spotify authorization URL (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify token exchange URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the timeout applied to every outbound Spotify request
/// (`SPOTIFY_HTTP_TIMEOUT_SECS`).
///
/// Unset, unparsable or zero values fall back to 10 seconds.
pub fn spotify_http_timeout() -> Duration {
    parse_timeout(env::var("SPOTIFY_HTTP_TIMEOUT_SECS").ok().as_deref())
}

/// Turns a timeout in whole seconds into a `Duration`.
///
/// Missing, unparsable or zero values yield the 10 second default.
pub fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns the origins allowed to call the relay (`CORS_ALLOWED_ORIGINS`).
pub fn allowed_origins() -> Vec<String> {
    parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
}

/// Splits a comma separated origin list.
///
/// Blank entries are dropped. An empty list yields the default local
/// development origins.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        return DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|origin| origin.to_string())
            .collect();
    }

    origins
}

/// Snapshot of the relay's configuration, taken once at startup and shared
/// with every handler.
#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub http_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            server_addr: server_addr(),
            client_id: spotify_client_id(),
            client_secret: spotify_client_secret(),
            redirect_uri: spotify_redirect_uri(),
            auth_url: spotify_apiauth_url(),
            token_url: spotify_apitoken_url(),
            api_url: spotify_apiurl(),
            http_timeout: spotify_http_timeout(),
            allowed_origins: allowed_origins(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            allowed_origins: parse_origins(""),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_addr", &self.server_addr)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("http_timeout", &self.http_timeout)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

