use reqwest::{Client, RequestBuilder, StatusCode, header::CONTENT_LENGTH};
use serde_json::Value;

use crate::{
    spotify::SpotifyError,
    types::{CurrentlyPlaying, PlaybackState, Toggle},
};

/// Client for the `/me/player` family of endpoints.
///
/// Every call takes the access token explicitly; the client itself holds no
/// credentials.
#[derive(Debug, Clone)]
pub struct PlayerClient {
    http: Client,
    api_url: String,
}

impl PlayerClient {
    pub fn new(http: Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { http, api_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/me/player{}", self.api_url, path)
    }

    /// Fetches the track currently playing.
    ///
    /// A `204 No Content` answer (or an empty 200 body) means no active
    /// playback and maps to [`CurrentlyPlaying::Nothing`]. Anything else is
    /// returned as Spotify sent it.
    pub async fn currently_playing(&self, token: &str) -> Result<CurrentlyPlaying, SpotifyError> {
        let res = self
            .http
            .get(self.url("/currently-playing"))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        if res.status() == StatusCode::NO_CONTENT {
            return Ok(CurrentlyPlaying::Nothing);
        }

        let body = res.text().await?;
        if body.trim().is_empty() {
            return Ok(CurrentlyPlaying::Nothing);
        }

        let track: Value = serde_json::from_str(&body)?;
        Ok(CurrentlyPlaying::Track(track))
    }

    /// Fetches the playback state. No active device (204) counts as not playing.
    pub async fn playback_state(&self, token: &str) -> Result<PlaybackState, SpotifyError> {
        let res = self
            .http
            .get(self.url(""))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        if res.status() == StatusCode::NO_CONTENT {
            return Ok(PlaybackState::default());
        }

        let body = res.text().await?;
        if body.trim().is_empty() {
            return Ok(PlaybackState::default());
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn next(&self, token: &str) -> Result<(), SpotifyError> {
        self.send_command(self.http.post(self.url("/next")), token)
            .await
    }

    pub async fn previous(&self, token: &str) -> Result<(), SpotifyError> {
        self.send_command(self.http.post(self.url("/previous")), token)
            .await
    }

    pub async fn play(&self, token: &str) -> Result<(), SpotifyError> {
        self.send_command(self.http.put(self.url("/play")), token)
            .await
    }

    pub async fn pause(&self, token: &str) -> Result<(), SpotifyError> {
        self.send_command(self.http.put(self.url("/pause")), token)
            .await
    }

    /// Sets the device volume. `percent` is expected to be clamped already.
    pub async fn set_volume(&self, token: &str, percent: u8) -> Result<(), SpotifyError> {
        let request = self
            .http
            .put(self.url("/volume"))
            .query(&[("volume_percent", percent)]);
        self.send_command(request, token).await
    }

    /// Pauses if something is playing, resumes otherwise.
    ///
    /// Reads the playback state first and picks the second call from its
    /// `is_playing` flag. If the state lookup fails, no command is sent.
    pub async fn toggle_playback(&self, token: &str) -> Result<Toggle, SpotifyError> {
        let state = self.playback_state(token).await?;

        if state.is_playing() {
            self.pause(token).await?;
            Ok(Toggle::Paused)
        } else {
            self.play(token).await?;
            Ok(Toggle::Resumed)
        }
    }

    // Spotify answers 411 to bodiless POST/PUT without an explicit length.
    async fn send_command(&self, request: RequestBuilder, token: &str) -> Result<(), SpotifyError> {
        request
            .bearer_auth(token)
            .header(CONTENT_LENGTH, "0")
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

