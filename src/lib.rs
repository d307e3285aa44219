//! Spotify Widget Relay Library
//!
//! Backend for a browser widget that shows and controls the track currently
//! playing on Spotify. The relay performs the OAuth2 Authorization Code flow,
//! keeps the resulting tokens in memory, and forwards the widget's playback
//! commands to the Spotify Web API.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints used by the widget
//! - `config` - Configuration management and environment variables
//! - `management` - In-memory token store
//! - `server` - Router, CORS policy and listener
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sporwidget::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> sporwidget::Res<()> {
//!     let _ = config::load_env().await;
//!     server::start_api_server(config::Config::from_env(), false).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by startup code where any error simply ends the program. Request
/// handling uses the typed errors in [`api::ApiError`] and
/// [`spotify::SpotifyError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Login URL: {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal startup errors. Request handlers must never call this:
/// they report failures with [`warning!`] and answer the request.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Used for recoverable problems, including every failed Spotify call.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
