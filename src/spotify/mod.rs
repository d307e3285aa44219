//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API the widget relay needs.
//! Every function here performs exactly one upstream call (the play/pause
//! toggle performs two, in sequence) and never retries.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorize URL, code exchange)
//!     └── Player (currently playing, skip, play/pause, volume)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Builds the authorization URL and exchanges an authorization
//!   code for a token pair using client credentials (Basic auth).
//! - [`player`] - Bearer-authenticated calls against `/me/player/*`.
//!
//! ## API Coverage
//!
//! - `GET /authorize` - user redirect, never called directly
//! - `POST /api/token` - authorization code exchange
//! - `GET /me/player/currently-playing`
//! - `GET /me/player`
//! - `POST /me/player/next`, `POST /me/player/previous`
//! - `PUT /me/player/play`, `PUT /me/player/pause`
//! - `PUT /me/player/volume`
//!
//! ## Timeouts
//!
//! All requests go through one shared [`reqwest::Client`] built by
//! [`http_client`], which applies the configured timeout to every call.
//!
//! ## Error Types
//!
//! Every fallible call returns [`SpotifyError`]: either a transport/status
//! error from reqwest or a body that didn't have the expected shape.

use std::{fmt, time::Duration};

use reqwest::Client;

pub mod auth;
pub mod player;

/// Failure talking to Spotify.
#[derive(Debug)]
pub enum SpotifyError {
    /// Network error, timeout or non-2xx status.
    Http(reqwest::Error),
    /// 2xx response whose body could not be understood.
    Malformed(String),
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::Http(e) => {
                let text = describe_chain(e);
                if e.is_timeout() && !text.contains("timed out") {
                    write!(f, "{}: timed out", text)
                } else {
                    write!(f, "{}", text)
                }
            }
            SpotifyError::Malformed(msg) => write!(f, "malformed response from Spotify: {}", msg),
        }
    }
}

// reqwest keeps the cause (timeout, refused connection, ...) in the source chain.
fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

impl std::error::Error for SpotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpotifyError::Http(e) => Some(e),
            SpotifyError::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::Http(err)
    }
}

impl From<serde_json::Error> for SpotifyError {
    fn from(err: serde_json::Error) -> Self {
        SpotifyError::Malformed(err.to_string())
    }
}

/// Builds the HTTP client shared by all upstream calls.
///
/// `timeout` bounds each request from connect to the end of the body.
pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
