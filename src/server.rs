use std::{sync::Arc, time::Instant};

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::{
    api,
    config::ServerConfig,
    error::AppError,
    error, info,
    spotify::{CatalogClient, SpotifyClient},
    success, warning,
};

/// Per-request handler state. Cloning is cheap and nothing in it is mutable.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogClient>,
    pub placeholder_image_url: String,
    pub debug: bool,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogClient>, config: &ServerConfig) -> Self {
        AppState {
            catalog,
            placeholder_image_url: config.placeholder_image_url.clone(),
            debug: config.debug,
        }
    }

    /// Turns a handler result into a response, rendering errors as pages.
    pub fn respond(&self, result: Result<Html<String>, AppError>) -> Response {
        match result {
            Ok(html) => html.into_response(),
            Err(e) => {
                warning!("Request failed. Err: {}", e);
                e.into_page(self.debug)
            }
        }
    }
}

/// Builds the route table.
///
/// Only `GET` is routed; other methods on known paths fall through to the
/// same not-found page as unknown paths.
pub fn router(state: AppState) -> Router {
    let debug = state.debug;
    let app = Router::new()
        .route("/", get(api::homepage).fallback(api::not_found))
        .route("/search/{name}", get(api::search).fallback(api::not_found))
        .route("/artist/{id}", get(api::artist).fallback(api::not_found))
        .fallback(api::not_found)
        .with_state(state);

    if debug {
        app.layer(middleware::from_fn(log_request))
    } else {
        app
    }
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

/// Starts the web server and serves until Ctrl-C.
///
/// Bind failures are fatal.
pub async fn start(config: ServerConfig) {
    if config.catalog.credentials.is_none() {
        warning!(
            "No Spotify client credentials configured; catalog requests are sent unauthenticated."
        );
    }

    let catalog: Arc<dyn CatalogClient> = Arc::new(SpotifyClient::new(&config.catalog));
    let app = router(AppState::new(catalog, &config));

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", config.addr, e),
    };

    success!("Listening on http://{}", config.addr);
    if config.debug {
        info!("Debug mode: request logging and detailed error pages enabled");
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    }

    info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warning!("Cannot listen for Ctrl-C. Err: {}", e);
        std::future::pending::<()>().await;
    }
}
