//! HTTP client implementation for the USPS APIs.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, RETRY_AFTER};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::{json, Map, Value};

use crate::api::{
    AddressesService, DomesticPricesService, InternationalPricesService, LocationsService,
    ServiceKind,
};
use crate::auth::{Credentials, TokenManager};
use crate::validation::SchemaValidator;
use crate::{Error, Result};

use super::config::ClientConfig;

/// Rate-limited calls give up once this many attempts have failed.
const MAX_RATE_LIMIT_ATTEMPTS: u32 = 3;

/// Ceiling on any single rate-limit backoff, in seconds.
const MAX_BACKOFF_SECS: u64 = 60;

/// The main client for interacting with the USPS APIs.
///
/// The client owns the OAuth2 token lifecycle, request validation, and
/// the retry policy, and hands out one service facade per API family.
/// Facades are created lazily and memoized: repeated accessor calls
/// return the same instance.
///
/// # Example
///
/// ```no_run
/// use usps_rs::{AddressQuery, Credentials, UspsClient};
///
/// # async fn example() -> usps_rs::Result<()> {
/// let client = UspsClient::new(Credentials::new("consumer-key", "consumer-secret"))?;
///
/// let verified = client
///     .addresses()?
///     .address(&AddressQuery {
///         street_address: "600 Fourth Ave".to_string(),
///         city: Some("Seattle".to_string()),
///         state: "WA".to_string(),
///         ..Default::default()
///     })
///     .await?;
/// println!("{}", verified);
/// # Ok(())
/// # }
/// ```
pub struct UspsClient {
    pub(crate) inner: Arc<ClientInner>,
    services: Arc<Mutex<ServiceRegistry>>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) tokens: TokenManager,
    pub(crate) config: ClientConfig,
}

/// Memoized facade instances, one slot per API family.
#[derive(Default)]
struct ServiceRegistry {
    addresses: Option<Arc<AddressesService>>,
    domestic_prices: Option<Arc<DomesticPricesService>>,
    international_prices: Option<Arc<InternationalPricesService>>,
    locations: Option<Arc<LocationsService>>,
}

/// A facade looked up by family name through [`UspsClient::service`].
#[derive(Clone)]
pub enum ServiceHandle {
    /// Address verification facade
    Addresses(Arc<AddressesService>),
    /// Domestic pricing facade
    DomesticPrices(Arc<DomesticPricesService>),
    /// International pricing facade
    InternationalPrices(Arc<InternationalPricesService>),
    /// Facility lookup facade
    Locations(Arc<LocationsService>),
}

impl std::fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceHandle::Addresses(_) => f.write_str("ServiceHandle::Addresses"),
            ServiceHandle::DomesticPrices(_) => f.write_str("ServiceHandle::DomesticPrices"),
            ServiceHandle::InternationalPrices(_) => {
                f.write_str("ServiceHandle::InternationalPrices")
            }
            ServiceHandle::Locations(_) => f.write_str("ServiceHandle::Locations"),
        }
    }
}

/// How an operation's parameters ride on the request.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Parameters sent as the URL query string
    Query(Value),
    /// Parameters sent as a JSON body
    Json(Value),
    /// No parameters
    Empty,
}

impl UspsClient {
    /// Create a client with default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let tokens = TokenManager::new(http.clone(), config.resolved_base_url(), credentials);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                tokens,
                config,
            }),
            services: Arc::new(Mutex::new(ServiceRegistry::default())),
        })
    }

    /// Get the address verification service.
    pub fn addresses(&self) -> Result<Arc<AddressesService>> {
        let mut services = self.registry();
        if let Some(service) = &services.addresses {
            return Ok(service.clone());
        }
        let service = Arc::new(AddressesService::new(self.inner.clone())?);
        services.addresses = Some(service.clone());
        Ok(service)
    }

    /// Get the domestic pricing service.
    pub fn domestic_prices(&self) -> Result<Arc<DomesticPricesService>> {
        let mut services = self.registry();
        if let Some(service) = &services.domestic_prices {
            return Ok(service.clone());
        }
        let service = Arc::new(DomesticPricesService::new(self.inner.clone())?);
        services.domestic_prices = Some(service.clone());
        Ok(service)
    }

    /// Get the international pricing service.
    pub fn international_prices(&self) -> Result<Arc<InternationalPricesService>> {
        let mut services = self.registry();
        if let Some(service) = &services.international_prices {
            return Ok(service.clone());
        }
        let service = Arc::new(InternationalPricesService::new(self.inner.clone())?);
        services.international_prices = Some(service.clone());
        Ok(service)
    }

    /// Get the facility lookup service.
    pub fn locations(&self) -> Result<Arc<LocationsService>> {
        let mut services = self.registry();
        if let Some(service) = &services.locations {
            return Ok(service.clone());
        }
        let service = Arc::new(LocationsService::new(self.inner.clone())?);
        services.locations = Some(service.clone());
        Ok(service)
    }

    /// Look up a service facade by its family name.
    ///
    /// Known names are `addresses`, `domesticPrices`,
    /// `internationalPrices` and `locations`. The handle wraps the same
    /// memoized instance the typed accessors return.
    pub fn service(&self, name: &str) -> Result<ServiceHandle> {
        match ServiceKind::from_name(name) {
            Some(ServiceKind::Addresses) => Ok(ServiceHandle::Addresses(self.addresses()?)),
            Some(ServiceKind::DomesticPrices) => {
                Ok(ServiceHandle::DomesticPrices(self.domestic_prices()?))
            }
            Some(ServiceKind::InternationalPrices) => Ok(ServiceHandle::InternationalPrices(
                self.international_prices()?,
            )),
            Some(ServiceKind::Locations) => Ok(ServiceHandle::Locations(self.locations()?)),
            None => Err(Error::technical(format!("Service '{}' not found", name))),
        }
    }

    /// Send a raw request through the full pipeline, without schema
    /// validation.
    ///
    /// Escape hatch for endpoints the typed facades do not cover.
    pub async fn send_request(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<Value> {
        self.inner.send(method, path, payload, None).await
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    fn registry(&self) -> MutexGuard<'_, ServiceRegistry> {
        self.services.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Per-call retry bookkeeping for the classification loop in
/// [`ClientInner::send`].
#[derive(Debug, Default)]
struct RetryState {
    auth_retried: bool,
    rate_limit_attempts: u32,
}

impl ClientInner {
    /// The origin requests are sent to.
    pub(crate) fn base_url(&self) -> &str {
        self.config.resolved_base_url()
    }

    /// The single funnel every operation passes through: obtain a
    /// bearer token, validate the request, dispatch it, then classify
    /// the outcome.
    ///
    /// Retries happen inside this loop. A 401 invalidates the held
    /// token and retries exactly once; a 429 backs off and retries
    /// until three attempts have failed. Everything else is terminal on
    /// the first response.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        validator: Option<&SchemaValidator>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url(), path);
        let query = match &payload {
            Payload::Query(params) => Some(query_pairs(params)?),
            _ => None,
        };
        let envelope = json!({
            "method": method.as_str(),
            "path": path,
            "query": match &payload {
                Payload::Query(params) => params.clone(),
                _ => Value::Null,
            },
            "body": match &payload {
                Payload::Json(body) => body.clone(),
                _ => Value::Null,
            },
        });

        let mut state = RetryState::default();
        loop {
            let bearer = self.tokens.ensure_valid().await?;

            if self.config.validate_requests {
                if let Some(validator) = validator {
                    validator.validate(&envelope)?;
                }
            }

            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(AUTHORIZATION, format!("Bearer {}", bearer.expose_secret()));
            if let Some(pairs) = &query {
                request = request.query(pairs);
            }
            if let Payload::Json(body) = &payload {
                request = request.json(body);
            }

            let response = request.send().await?;
            let status = response.status();
            tracing::debug!("{} {} returned {}", method, path, status.as_u16());

            if status.is_success() {
                return Ok(decode_body(response).await);
            }

            let status_code = status.as_u16();
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok());
            let body: Value = response.json().await.unwrap_or_default();

            match status_code {
                401 if !state.auth_retried => {
                    tracing::warn!("Access token rejected, refreshing and retrying");
                    self.tokens.invalidate().await;
                    state.auth_retried = true;
                }
                429 => {
                    state.rate_limit_attempts += 1;
                    if state.rate_limit_attempts >= MAX_RATE_LIMIT_ATTEMPTS {
                        return Err(Error::from_api_response(status_code, body));
                    }
                    let seconds = retry_after
                        .unwrap_or_else(|| 2u64.pow(state.rate_limit_attempts - 1))
                        .min(MAX_BACKOFF_SECS);
                    tracing::warn!("Rate limited, retrying in {}s", seconds);
                    tokio::time::sleep(Duration::from_secs(seconds)).await;
                }
                _ => return Err(Error::from_api_response(status_code, body)),
            }
        }
    }
}

/// Decode a 2xx body, mapping absent, malformed or null JSON to an
/// empty object so callers always receive a structured value.
async fn decode_body(response: reqwest::Response) -> Value {
    match response.json::<Value>().await {
        Ok(Value::Null) | Err(_) => Value::Object(Map::new()),
        Ok(value) => value,
    }
}

/// Flatten a parameter object into query pairs, expanding arrays into
/// repeated keys the way the carrier expects.
fn query_pairs(params: &Value) -> Result<Vec<(String, String)>> {
    let object = match params {
        Value::Object(object) => object,
        _ => return Err(Error::technical("Query parameters must be a JSON object")),
    };

    let mut pairs = Vec::new();
    for (key, value) in object {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar(item)));
                }
            }
            other => pairs.push((key.clone(), scalar(other))),
        }
    }
    Ok(pairs)
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl Clone for UspsClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            services: self.services.clone(),
        }
    }
}

impl std::fmt::Debug for UspsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UspsClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
