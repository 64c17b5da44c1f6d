//! Integration tests for the request pipeline.
//!
//! Every test runs against a local wiremock server standing in for the
//! USPS origin, covering the token lifecycle, request validation,
//! response decoding and the 401/429 retry policy end to end.
//!
//! Run with: cargo test --test pipeline_tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use usps_rs::{AddressQuery, ClientConfig, Credentials, Error, UspsClient};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Create a client pointed at the mock server.
fn test_client(server: &MockServer) -> UspsClient {
    test_client_with(server, |config| config)
}

fn test_client_with(
    server: &MockServer,
    customize: impl FnOnce(ClientConfig) -> ClientConfig,
) -> UspsClient {
    init_logging();
    let config = customize(ClientConfig::default().with_base_url(server.uri()));
    UspsClient::with_config(Credentials::new("test-key", "test-secret"), config).unwrap()
}

/// Mount a token endpoint handing out `test-token` for an hour.
async fn mount_token_endpoint(server: &MockServer) {
    mount_token_endpoint_with(server, "test-token", 3600).await;
}

async fn mount_token_endpoint_with(server: &MockServer, token: &str, expires_in: i64) {
    Mock::given(method("POST"))
        .and(path("/oauth2/v3/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "expires_in": expires_in,
        })))
        .mount(server)
        .await;
}

// ============================================================================
// TOKEN LIFECYCLE TESTS
// ============================================================================

#[tokio::test]
async fn test_bearer_token_is_attached_to_requests() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "city": "SEATTLE", "state": "WA" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.addresses().unwrap().city_state("98104").await.unwrap();

    assert_eq!(result["city"], "SEATTLE");
}

#[tokio::test]
async fn test_token_is_cached_across_calls() {
    let server = MockServer::start().await;
    let exchanges = Arc::new(AtomicUsize::new(0));
    let exchanges_clone = exchanges.clone();

    Mock::given(method("POST"))
        .and(path("/oauth2/v3/token"))
        .respond_with(move |_req: &wiremock::Request| {
            exchanges_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "test-token", "expires_in": 3600 }))
        })
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "city": "SEATTLE" })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let addresses = client.addresses().unwrap();
    addresses.city_state("98104").await.unwrap();
    addresses.city_state("98104").await.unwrap();

    // An hour of validity is well outside the refresh margin
    assert_eq!(exchanges.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_token_inside_refresh_margin_is_reexchanged() {
    let server = MockServer::start().await;
    let exchanges = Arc::new(AtomicUsize::new(0));
    let exchanges_clone = exchanges.clone();

    // 59 seconds of validity is inside the 60 second refresh margin, so
    // the token is already stale when the next call looks at it
    Mock::given(method("POST"))
        .and(path("/oauth2/v3/token"))
        .respond_with(move |_req: &wiremock::Request| {
            exchanges_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "test-token", "expires_in": 59 }))
        })
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "city": "SEATTLE" })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let addresses = client.addresses().unwrap();
    addresses.city_state("98104").await.unwrap();
    addresses.city_state("98104").await.unwrap();

    assert_eq!(exchanges.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_token_exchange() {
    let server = MockServer::start().await;
    let exchanges = Arc::new(AtomicUsize::new(0));
    let exchanges_clone = exchanges.clone();

    // A slow token endpoint widens the window in which every call sees
    // no cached token
    Mock::given(method("POST"))
        .and(path("/oauth2/v3/token"))
        .respond_with(move |_req: &wiremock::Request| {
            exchanges_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "test-token", "expires_in": 3600 }))
                .set_delay(Duration::from_millis(200))
        })
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "city": "SEATTLE" })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let addresses = client.addresses().unwrap();
    let (a, b, c, d) = tokio::join!(
        addresses.city_state("98104"),
        addresses.city_state("98104"),
        addresses.city_state("98104"),
        addresses.city_state("98104"),
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();
    d.unwrap();

    // Refresh is serialized, so the racers piggyback on one exchange
    assert_eq!(exchanges.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_token_exchange_failure_is_an_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/v3/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oauth backend down"))
        .mount(&server)
        .await;

    // The API endpoint must never be reached without a token
    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .addresses()
        .unwrap()
        .city_state("98104")
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert!(err.to_string().contains("Failed to obtain access token"));
}

// ============================================================================
// AUTH RETRY TESTS
// ============================================================================

#[tokio::test]
async fn test_401_refreshes_token_and_retries_once() {
    let server = MockServer::start().await;
    let exchanges = Arc::new(AtomicUsize::new(0));
    let exchanges_clone = exchanges.clone();
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_clone = attempts.clone();

    Mock::given(method("POST"))
        .and(path("/oauth2/v3/token"))
        .respond_with(move |_req: &wiremock::Request| {
            exchanges_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "test-token", "expires_in": 3600 }))
        })
        .mount(&server)
        .await;

    // First attempt is rejected, the retried attempt succeeds
    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(move |_req: &wiremock::Request| {
            let count = attempts_clone.fetch_add(1, Ordering::SeqCst);
            if count == 0 {
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "error": { "message": "Token expired" } }))
            } else {
                ResponseTemplate::new(200).set_body_json(json!({ "city": "SEATTLE" }))
            }
        })
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.addresses().unwrap().city_state("98104").await.unwrap();

    assert_eq!(result["city"], "SEATTLE");
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
    // Invalidation forced a second exchange
    assert_eq!(exchanges.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_second_401_is_terminal() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_clone = attempts.clone();

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(move |_req: &wiremock::Request| {
            attempts_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": { "message": "Token expired" } }))
        })
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .addresses()
        .unwrap()
        .city_state("98104")
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Token expired");
    // One original attempt plus exactly one retry
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

// ============================================================================
// RATE LIMIT RETRY TESTS
// ============================================================================

#[tokio::test]
async fn test_two_429s_then_success_succeeds() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_clone = attempts.clone();

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(move |_req: &wiremock::Request| {
            let count = attempts_clone.fetch_add(1, Ordering::SeqCst);
            if count < 2 {
                ResponseTemplate::new(429)
                    .insert_header("retry-after", "0")
                    .set_body_json(json!({ "error": { "message": "Too many requests" } }))
            } else {
                ResponseTemplate::new(200).set_body_json(json!({ "city": "SEATTLE" }))
            }
        })
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.addresses().unwrap().city_state("98104").await.unwrap();

    assert_eq!(result["city"], "SEATTLE");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_third_429_is_terminal() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_clone = attempts.clone();

    // Always rate limited; a success after the third failure would
    // never be seen because the fourth attempt is never made
    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(move |_req: &wiremock::Request| {
            attempts_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_json(json!({ "error": { "message": "Too many requests" } }))
        })
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .addresses()
        .unwrap()
        .city_state("98104")
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert!(!err.is_auth_error());
    assert_eq!(err.to_string(), "Too many requests");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_429_without_retry_after_uses_backoff() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_clone = attempts.clone();

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(move |_req: &wiremock::Request| {
            let count = attempts_clone.fetch_add(1, Ordering::SeqCst);
            if count == 0 {
                ResponseTemplate::new(429)
                    .set_body_json(json!({ "error": { "message": "Too many requests" } }))
            } else {
                ResponseTemplate::new(200).set_body_json(json!({ "city": "SEATTLE" }))
            }
        })
        .mount(&server)
        .await;

    let client = test_client(&server);
    let start = std::time::Instant::now();
    let result = client.addresses().unwrap().city_state("98104").await.unwrap();

    assert_eq!(result["city"], "SEATTLE");
    // First backoff step with no Retry-After header is one second
    assert!(start.elapsed() >= Duration::from_millis(900));
}

// ============================================================================
// VALIDATION TESTS
// ============================================================================

#[tokio::test]
async fn test_invalid_request_never_reaches_the_wire() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .addresses()
        .unwrap()
        .city_state("not-a-zip")
        .await
        .unwrap_err();

    assert!(err.is_validation_error());
    assert_eq!(err.status(), None);
    assert!(err.to_string().starts_with("Request validation failed"));
}

#[tokio::test]
async fn test_disabling_validation_skips_the_schema_check() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    // The same malformed request goes on the wire once validation is off
    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .and(query_param("ZIPCode", "not-a-zip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "city": "NOWHERE" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with(&server, |config| config.with_validate_requests(false));
    let result = client
        .addresses()
        .unwrap()
        .city_state("not-a-zip")
        .await
        .unwrap();

    assert_eq!(result["city"], "NOWHERE");
}

#[tokio::test]
async fn test_combined_zip_is_split_before_dispatch() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/address"))
        .and(query_param("ZIPCode", "98104"))
        .and(query_param("ZIPPlus4", "1822"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "address": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .addresses()
        .unwrap()
        .address(&AddressQuery {
            street_address: "600 Fourth Ave".to_string(),
            city: Some("Seattle".to_string()),
            state: "WA".to_string(),
            zip_code: Some("98104-1822".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
}

// ============================================================================
// RESPONSE DECODING AND CLASSIFICATION TESTS
// ============================================================================

#[tokio::test]
async fn test_empty_2xx_body_decodes_to_an_empty_object() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.addresses().unwrap().city_state("98104").await.unwrap();

    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn test_malformed_2xx_body_decodes_to_an_empty_object() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.addresses().unwrap().city_state("98104").await.unwrap();

    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn test_remote_400_carries_the_carrier_envelope() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    let envelope = json!({
        "error": {
            "message": "Address not found",
            "errors": [{
                "title": "Invalid Address",
                "detail": "The address could not be matched",
                "code": "010",
                "source": { "parameter": "streetAddress" }
            }]
        },
        "requestId": "abc-123"
    });
    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&envelope))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .addresses()
        .unwrap()
        .city_state("98104")
        .await
        .unwrap_err();

    assert!(err.is_validation_error());
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.details().len(), 1);
    assert_eq!(err.details()[0].parameter.as_deref(), Some("streetAddress"));
    assert_eq!(err.error_field("requestId"), Some(&json!("abc-123")));
    assert_eq!(
        err.to_string(),
        "Address not found\n\
         Invalid Address: The address could not be matched (Code: 010) [Parameter: streetAddress]"
    );
}

#[tokio::test]
async fn test_5xx_is_a_technical_error() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({ "error": { "message": "Service unavailable" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .addresses()
        .unwrap()
        .city_state("98104")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Technical { .. }));
    assert_eq!(err.status(), Some(503));
    assert!(err.is_server_error());
    assert_eq!(err.to_string(), "Service unavailable");
}

#[tokio::test]
async fn test_transport_timeout_is_a_technical_error() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client =
        test_client_with(&server, |config| config.with_timeout(Duration::from_millis(250)));
    let err = client
        .addresses()
        .unwrap()
        .city_state("98104")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Technical { .. }));
    assert!(err.is_retryable());
}

// ============================================================================
// OBSERVABILITY TESTS
// ============================================================================

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
struct CapturedLog(Arc<std::sync::Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_dispatch_and_refresh_emit_debug_events() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/addresses/v3/city-state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "city": "SEATTLE" })))
        .mount(&server)
        .await;

    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("usps_rs=debug"))
        .with_writer(log.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = test_client(&server);
    client.addresses().unwrap().city_state("98104").await.unwrap();

    let output = log.contents();
    assert!(output.contains("Exchanging client credentials for a fresh access token"));
    assert!(output.contains("GET /addresses/v3/city-state returned 200"));
    // Secret material stays out of the log
    assert!(!output.contains("test-secret"));
    assert!(!output.contains("test-token"));
}

// ============================================================================
// SERVICE REGISTRY TESTS
// ============================================================================

#[tokio::test]
async fn test_facades_are_shared_across_lookups() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let first = client.domestic_prices().unwrap();
    let second = client.domestic_prices().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_unknown_service_name_is_rejected() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let err = client.service("tracking").unwrap_err();
    assert!(matches!(err, Error::Technical { .. }));
    assert_eq!(err.to_string(), "Service 'tracking' not found");
}
