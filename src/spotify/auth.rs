use chrono::Utc;
use reqwest::Client;

use crate::{
    config::Credentials,
    error::CatalogError,
    types::{Token, TokenResponse},
};

/// Requests an app access token using the client-credentials grant.
///
/// Posts `grant_type=client_credentials` to the token endpoint with the client
/// ID and secret as HTTP basic authentication. App tokens carry no user scope,
/// which is all the read-only catalog endpoints need.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `credentials` - Client ID and secret of the registered application
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token stamped with the time it was obtained
/// - `Err(CatalogError::Auth)` - The endpoint refused the credentials or
///   answered with something other than a token
/// - `Err(CatalogError::Network)` - The endpoint could not be reached
///
/// # Example
///
/// ```ignore
/// let token = request_token(&client, DEFAULT_TOKEN_URL, &credentials).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token, CatalogError> {
    let res = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(CatalogError::Auth(format!(
            "token endpoint responded with {}: {}",
            status, body
        )));
    }

    let json: TokenResponse =
        serde_json::from_str(&body).map_err(|e| CatalogError::Auth(e.to_string()))?;

    Ok(Token {
        access_token: json.access_token,
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
