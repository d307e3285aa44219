use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The credentials of the one logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Body returned by Spotify's token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
}

impl From<TokenResponse> for TokenPair {
    fn from(res: TokenResponse) -> Self {
        Self {
            access_token: res.access_token,
            refresh_token: res.refresh_token,
        }
    }
}

/// The only part of `GET /me/player` the relay looks at.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaybackState {
    pub is_playing: Option<bool>,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.is_playing.unwrap_or(false)
    }
}

/// Outcome of the currently-playing lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentlyPlaying {
    /// Spotify's document, passed through untouched.
    Track(Value),
    /// Spotify answered 204: nothing is playing.
    Nothing,
}

/// Which way a play/pause toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Paused,
    Resumed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
