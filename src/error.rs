use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views::ErrorView;

/// Failures reported by a [`crate::spotify::CatalogClient`].
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog entry not found: {0}")]
    NotFound(String),

    #[error("Catalog rate limit reached")]
    RateLimited { retry_after: Option<u64> },

    #[error("Catalog rejected our credentials (status {0})")]
    Unauthorized(u16),

    #[error("Catalog responded with status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Catalog unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed catalog response: {0}")]
    Malformed(String),

    #[error("Cannot obtain catalog access token: {0}")]
    Auth(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),

    #[error(
        "SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET must be set together"
    )]
    IncompleteCredentials,
}

/// Errors a route handler can return.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(err) => match err {
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                CatalogError::Network(_)
                | CatalogError::Malformed(_)
                | CatalogError::Upstream { .. } => StatusCode::BAD_GATEWAY,
                CatalogError::Unauthorized(_)
                | CatalogError::Auth(_)
                | CatalogError::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to visitors; internal details stay out of it.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Catalog(CatalogError::NotFound(_)) => {
                "The catalog has no entry for this request."
            }
            AppError::Catalog(CatalogError::RateLimited { .. }) => {
                "The music catalog is busy right now. Please try again shortly."
            }
            AppError::Catalog(CatalogError::Network(_)) => "The music catalog cannot be reached.",
            AppError::Catalog(CatalogError::Malformed(_) | CatalogError::Upstream { .. }) => {
                "The music catalog returned an unexpected response."
            }
            _ => "Something went wrong on our side.",
        }
    }

    fn retry_after(&self) -> Option<u64> {
        match self {
            AppError::Catalog(CatalogError::RateLimited { retry_after }) => *retry_after,
            _ => None,
        }
    }

    /// Builds the error page. `detailed` adds the underlying error text.
    pub fn into_page(self, detailed: bool) -> Response {
        let status = self.status();
        let detail = detailed.then(|| self.to_string());
        let view = ErrorView::new(status, self.public_message(), detail);

        let mut response = error_page(status, &view);
        if let Some(seconds) = self.retry_after() {
            if let Ok(value) = HeaderValue::from_str(&seconds.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }
        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_page(false)
    }
}

/// Renders `view` with `status`, degrading to plain text if the template fails.
pub fn error_page(status: StatusCode, view: &ErrorView) -> Response {
    use askama::Template;

    match view.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(_) => (status, view.message.clone()).into_response(),
    }
}
