//! # API Module
//!
//! HTTP endpoints the browser widget talks to.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - `GET /login`, redirects to Spotify's consent page.
//! - [`callback`] - `GET /auth/callback`, exchanges the authorization code
//!   for tokens and stores them.
//!
//! ### Playback
//!
//! - [`current_song`] - `GET /current-song`
//! - [`skip_next`] - `POST /skip-next`
//! - [`skip_previous`] - `POST /skip-previous`
//! - [`play_pause`] - `POST /play-pause`
//! - [`set_volume`] - `POST /set-volume?volume=<n>`
//!
//! Playback endpoints answer `401` with
//! `{"error": "User not logged in. Please /login first."}` before touching
//! Spotify when no token is stored. Upstream failures become `500` with the
//! error text in `{"error": ...}`; nothing is retried.
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`, status, version and whether a user is logged in.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sporwidget::{config::Config, server::{AppState, router}};
//!
//! let state = AppState::new(Config::from_env())?;
//! let app = router(state);
//! ```

mod callback;
mod error;
mod health;
mod login;
mod player;

pub use callback::{TOKENS_STORED_PAGE, callback};
pub use error::{ApiError, NOT_LOGGED_IN};
pub use health::health;
pub use login::login;
pub use player::{current_song, play_pause, set_volume, skip_next, skip_previous};
