use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::types::ErrorResponse;

pub const NOT_LOGGED_IN: &str = "User not logged in. Please /login first.";

/// Errors a widget endpoint can answer with, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// No usable access token. 401.
    NotLoggedIn,
    /// Missing or unusable query parameter. 400.
    BadRequest(String),
    /// Spotify call failed; carries the text shown to the widget. 500.
    Upstream(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotLoggedIn => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::NotLoggedIn => NOT_LOGGED_IN.to_string(),
            ApiError::BadRequest(msg) | ApiError::Upstream(msg) => msg,
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

