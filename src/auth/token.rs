//! OAuth2 client-credentials token management for the USPS APIs.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{Error, Result};

/// OAuth2 credentials issued through the USPS developer portal.
///
/// The consumer key identifies the application; the consumer secret is
/// held behind [`SecretString`] and never appears in debug output.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from a consumer key and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// A bearer token and the instant it stops being usable.
///
/// Replaced wholesale on refresh; never partially updated.
#[derive(Clone)]
pub(crate) struct Token {
    access_token: SecretString,
    expires_at: DateTime<Utc>,
}

impl Token {
    /// Check if the token expires within the given buffer period.
    fn expires_within(&self, buffer: Duration) -> bool {
        Utc::now() + buffer >= self.expires_at
    }
}

/// Owns the client-credentials exchange and the cached access token.
///
/// # Thread Safety
///
/// `TokenManager` is shared by every request the client makes. Refresh
/// is serialized behind a write lock so concurrent calls racing past an
/// expired token perform a single exchange between them.
pub(crate) struct TokenManager {
    http: reqwest::Client,
    token_url: String,
    credentials: Credentials,
    token: RwLock<Option<Token>>,
}

impl TokenManager {
    pub(crate) fn new(http: reqwest::Client, base_url: &str, credentials: Credentials) -> Self {
        Self {
            http,
            token_url: format!("{}/oauth2/v3/token", base_url),
            credentials,
            token: RwLock::new(None),
        }
    }

    /// Return a bearer token, refreshing first when none is held or the
    /// held one is within 60 seconds of expiry.
    ///
    /// The 60-second margin guards against the token expiring between
    /// this check and the moment the server sees the request.
    pub(crate) async fn ensure_valid(&self) -> Result<SecretString> {
        {
            let token = self.token.read().await;
            if let Some(current) = token.as_ref() {
                if !current.expires_within(Duration::seconds(60)) {
                    return Ok(current.access_token.clone());
                }
            }
        }

        let mut token = self.token.write().await;
        // Another call may have refreshed while we waited for the lock
        if let Some(current) = token.as_ref() {
            if !current.expires_within(Duration::seconds(60)) {
                return Ok(current.access_token.clone());
            }
        }

        tracing::debug!("Exchanging client credentials for a fresh access token");
        let fresh = self.exchange().await?;
        let bearer = fresh.access_token.clone();
        *token = Some(fresh);
        Ok(bearer)
    }

    /// Drop the held token so the next call performs a fresh exchange.
    pub(crate) async fn invalidate(&self) {
        *self.token.write().await = None;
    }

    async fn exchange(&self) -> Result<Token> {
        let response = self
            .http
            .post(&self.token_url)
            .json(&serde_json::json!({
                "client_id": self.credentials.client_id,
                "client_secret": self.credentials.client_secret.expose_secret(),
                "grant_type": "client_credentials",
            }))
            .send()
            .await
            .map_err(|e| {
                Error::authentication(format!("Failed to obtain access token: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(Error::authentication(format!(
                "Failed to obtain access token: token endpoint returned status {}",
                status
            )));
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            Error::authentication(format!("Failed to obtain access token: {}", e))
        })?;

        Ok(Token {
            access_token: SecretString::from(token_response.access_token),
            expires_at: Utc::now() + Duration::seconds(token_response.expires_in),
        })
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("token_url", &self.token_url)
            .field("credentials", &self.credentials)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}
