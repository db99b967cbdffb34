use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{config::Credentials, error::CatalogError, spotify::auth, types::Token};

/// Seconds before expiry at which a token is treated as stale.
const EXPIRY_BUFFER_SECS: u64 = 240;

/// Keeps the current client-credentials token in memory and refreshes it
/// shortly before it expires. Tokens are never written to disk.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    token: Mutex<Option<Token>>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, token_url: String) -> Self {
        TokenManager {
            credentials,
            token_url,
            token: Mutex::new(None),
        }
    }

    pub async fn get_valid_token(&self, client: &Client) -> Result<String, CatalogError> {
        let mut token = self.token.lock().await;

        if let Some(current) = token.as_ref() {
            if !is_expired(current, now()) {
                return Ok(current.access_token.clone());
            }
        }

        let fresh = auth::request_token(client, &self.token_url, &self.credentials).await?;
        let access_token = fresh.access_token.clone();
        *token = Some(fresh);
        Ok(access_token)
    }

    /// Drops the cached token so the next request fetches a new one.
    pub async fn invalidate(&self) {
        self.token.lock().await.take();
    }
}

pub fn is_expired(token: &Token, now: u64) -> bool {
    now + EXPIRY_BUFFER_SECS >= token.obtained_at + token.expires_in
}

fn now() -> u64 {
    Utc::now().timestamp() as u64
}
