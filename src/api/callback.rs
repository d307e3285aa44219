use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};

use crate::{
    server::AppState,
    spotify, success,
    utils::{escape_html, mask_token},
    warning,
};

pub const TOKENS_STORED_PAGE: &str =
    "Tokens stored. You can now <a href='/current-song'>check the current song</a>.";

/// Completes the Authorization Code flow.
///
/// Spotify redirects here with `?code=` after the user consents (or with
/// `?error=` if they refuse). The code is exchanged for a token pair, which
/// replaces whatever the store held before.
///
/// Failures are reported on the page itself. A failed exchange answers
/// `502 Bad Gateway`; a callback without a code, or one carrying Spotify's
/// `error` parameter, answers `400`.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Html<String>) {
    if let Some(reason) = params.get("error") {
        warning!("Spotify authorization denied: {}", reason);
        return (
            StatusCode::BAD_REQUEST,
            Html(format!(
                "Error occurred: authorization denied: {}",
                escape_html(reason)
            )),
        );
    }

    let Some(code) = params.get("code") else {
        return (
            StatusCode::BAD_REQUEST,
            Html("Missing authorization code.".to_string()),
        );
    };

    match spotify::auth::exchange_code(&state.http, &state.config, code).await {
        Ok(pair) => {
            let masked = mask_token(&pair.access_token);
            let has_refresh = pair.refresh_token.is_some();
            state.tokens.set(pair.access_token, pair.refresh_token).await;
            success!(
                "Tokens stored (access token {}, refresh token {}).",
                masked,
                if has_refresh { "received" } else { "missing" }
            );
            (StatusCode::OK, Html(TOKENS_STORED_PAGE.to_string()))
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Html(format!("Error occurred: {}", escape_html(&e.to_string()))),
            )
        }
    }
}
