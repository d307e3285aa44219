use axum::{
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{server::AppState, spotify};

/// Sends the browser to Spotify's consent page with a `302 Found`.
///
/// Always redirects, whether or not someone is already logged in.
pub async fn login(State(state): State<AppState>) -> Response {
    let url = spotify::auth::authorize_url(&state.config);
    (StatusCode::FOUND, [(LOCATION, url)]).into_response()
}
