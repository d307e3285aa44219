use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::{Value, json};

use crate::{
    api::ApiError,
    server::AppState,
    types::{CurrentlyPlaying, MessageResponse, Toggle},
    utils::{clamp_volume, parse_volume},
    warning,
};

// Checked before any upstream call.
async fn access_token(state: &AppState) -> Result<String, ApiError> {
    state.tokens.valid_access().await.ok_or(ApiError::NotLoggedIn)
}

/// `GET /current-song`: Spotify's currently-playing document, as is.
pub async fn current_song(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let token = access_token(&state).await?;

    match state.player.currently_playing(&token).await {
        Ok(CurrentlyPlaying::Track(track)) => Ok(Json(track)),
        Ok(CurrentlyPlaying::Nothing) => Ok(Json(json!({
            "message": "No song currently playing"
        }))),
        Err(e) => {
            warning!("Current song lookup failed: {}", e);
            Err(ApiError::Upstream(e.to_string()))
        }
    }
}

pub async fn skip_next(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    let token = access_token(&state).await?;

    state.player.next(&token).await.map_err(|e| {
        warning!("Skip next error: {}", e);
        ApiError::Upstream(format!("Failed to skip to next song: {}", e))
    })?;

    Ok(Json(MessageResponse::new("Skipped to next song")))
}

pub async fn skip_previous(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let token = access_token(&state).await?;

    state.player.previous(&token).await.map_err(|e| {
        warning!("Skip previous error: {}", e);
        ApiError::Upstream(format!("Failed to skip to previous song: {}", e))
    })?;

    Ok(Json(MessageResponse::new("Skipped to previous song")))
}

/// `POST /play-pause`: inverts the current playback state.
pub async fn play_pause(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    let token = access_token(&state).await?;

    let toggled = state.player.toggle_playback(&token).await.map_err(|e| {
        warning!("Play/Pause error: {}", e);
        ApiError::Upstream(format!("Failed to toggle playback: {}", e))
    })?;

    let message = match toggled {
        Toggle::Paused => "Playback paused",
        Toggle::Resumed => "Playback resumed",
    };
    Ok(Json(MessageResponse::new(message)))
}

/// `POST /set-volume?volume=<n>`: `n` is clamped to `0..=100`, never rejected.
pub async fn set_volume(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let token = access_token(&state).await?;

    let requested = params
        .get("volume")
        .and_then(|v| parse_volume(v))
        .ok_or_else(|| ApiError::BadRequest("Missing or invalid volume parameter".to_string()))?;
    let percent = clamp_volume(requested);

    state.player.set_volume(&token, percent).await.map_err(|e| {
        warning!("Volume error: {}", e);
        ApiError::Upstream(format!("Failed to set volume: {}", e))
    })?;

    Ok(Json(MessageResponse::new(format!(
        "Volume set to {}%",
        percent
    ))))
}
