use reqwest::{Client, RequestBuilder, Response, StatusCode, Url, header};
use serde::de::DeserializeOwned;

use crate::{config::CatalogConfig, error::CatalogError, management::TokenManager};

/// HTTP client for the Spotify Web API catalog endpoints.
///
/// Holds one `reqwest::Client` for the lifetime of the server so connections
/// are pooled. When credentials are configured every request carries a bearer
/// token from the [`TokenManager`].
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    market: String,
    tokens: Option<TokenManager>,
}

impl SpotifyClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: &CatalogConfig) -> Self {
        SpotifyClient {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            market: config.market.clone(),
            tokens: config
                .credentials
                .clone()
                .map(|creds| TokenManager::new(creds, config.token_url.clone())),
        }
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    /// Appends `segments` to the API base URL, each one percent-encoded as a
    /// single path segment.
    ///
    /// A caller-supplied id can never reach another endpoint: `/`, `?` and `#`
    /// are encoded, and the dot segments `.` and `..` are refused outright.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(CatalogError::NotFound(format!("invalid id {:?}", dots)));
        }

        let mut url = Url::parse(&self.api_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET request and decodes the body into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let request = self.http.get(url).query(query);
        let response = self.authorize(request).await?.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            if let Some(tokens) = &self.tokens {
                tokens.invalidate().await;
            }
        }

        let body = read_success_body(response).await?;
        Ok(serde_json::from_str::<T>(&body)?)
    }

    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, CatalogError> {
        match &self.tokens {
            Some(tokens) => {
                let token = tokens.get_valid_token(&self.http).await?;
                Ok(request.bearer_auth(token))
            }
            None => Ok(request),
        }
    }
}

async fn read_success_body(response: Response) -> Result<String, CatalogError> {
    let status = response.status();
    let retry_after = response
        .headers()
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let url = response.url().to_string();
    let body = response.text().await?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(classify_status(status, retry_after, &url, &body))
    }
}

/// Translates a non-success catalog status into a [`CatalogError`].
pub fn classify_status(
    status: StatusCode,
    retry_after: Option<u64>,
    url: &str,
    body: &str,
) -> CatalogError {
    match status {
        StatusCode::NOT_FOUND => CatalogError::NotFound(url.to_string()),
        StatusCode::TOO_MANY_REQUESTS => CatalogError::RateLimited { retry_after },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CatalogError::Unauthorized(status.as_u16())
        }
        _ => CatalogError::Upstream {
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        },
    }
}
