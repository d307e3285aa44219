use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::Config,
    spotify::SpotifyError,
    types::{TokenPair, TokenResponse},
};

/// Permissions the widget needs: read the current track and playback state,
/// and control playback.
pub const SCOPES: [&str; 3] = [
    "user-read-currently-playing",
    "user-read-playback-state",
    "user-modify-playback-state",
];

/// Builds the URL the user is redirected to in order to authorize the relay.
///
/// The redirect URI and the space separated scope list are percent-encoded.
/// Nothing is validated: an empty client id or redirect URI produces a URL
/// that Spotify itself will reject.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config);
/// // https://accounts.spotify.com/authorize?client_id=abc&response_type=code&redirect_uri=http%3A%2F%2F...&scope=user-read-currently-playing%20...
/// ```
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = config.auth_url,
        client_id = config.client_id,
        redirect_uri = urlencoding::encode(&config.redirect_uri),
        scope = urlencoding::encode(&SCOPES.join(" ")),
    )
}

/// `base64(client_id:client_secret)` for the token endpoint's Basic auth.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Completes the Authorization Code flow: the code received on the callback
/// is posted, form-encoded, to the token endpoint together with the redirect
/// URI, authenticated with the application's client credentials.
///
/// # Errors
///
/// - [`SpotifyError::Http`] for network failures, timeouts and non-2xx
///   answers (e.g. an expired or already used code)
/// - [`SpotifyError::Malformed`] if the body has no `access_token`
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<TokenPair, SpotifyError> {
    let res = client
        .post(&config.token_url)
        .header(
            AUTHORIZATION,
            format!(
                "Basic {}",
                basic_credentials(&config.client_id, &config.client_secret)
            ),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body = res.text().await?;
    let token: TokenResponse = serde_json::from_str(&body)?;

    Ok(token.into())
}

