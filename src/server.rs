use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use reqwest::Client;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::{
    Res, api,
    config::Config,
    info,
    management::TokenStore,
    spotify::{self, player::PlayerClient},
    success, warning,
};

/// Everything a handler needs, cloned into each request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tokens: TokenStore,
    pub http: Client,
    pub player: PlayerClient,
}

impl AppState {
    /// Builds the state with an empty token store and one HTTP client whose
    /// timeout comes from the configuration.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = spotify::http_client(config.http_timeout)?;
        let player = PlayerClient::new(http.clone(), config.api_url.clone());
        Ok(Self {
            config: Arc::new(config),
            tokens: TokenStore::new(),
            http,
            player,
        })
    }
}

/// Restricts callers to the configured origins, with credentials.
///
/// Browsers refuse a wildcard header list on credentialed requests, so the
/// requested headers are mirrored back instead.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warning!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/auth/callback", get(api::callback))
        .route("/current-song", get(api::current_song))
        .route("/skip-next", post(api::skip_next))
        .route("/skip-previous", post(api::skip_previous))
        .route("/play-pause", post(api::play_pause))
        .route("/set-volume", post(api::set_volume))
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves until the process is stopped.
///
/// With `open_browser` set, the login page is opened in the default browser
/// once the listener is up.
pub async fn start_api_server(config: Config, open_browser: bool) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", config.server_addr, e))?;

    let state = AppState::new(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let login_url = format!("{}/login", base_url);

    success!("Widget relay listening on {}", base_url);
    info!("Login URL:        {}", login_url);
    info!("Current song API: {}/current-song", base_url);
    info!("Health check:     {}/health", base_url);
    info!("Open the login URL to authenticate with Spotify first.");

    if open_browser && webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        )
    }

    axum::serve(listener, app).await?;
    Ok(())
}
