//! Error types for the USPS API client.
//!
//! Every failure surfaced by this crate is one of three kinds: a validation
//! failure (local schema check or a remote 400), an authentication failure
//! (token exchange or a 401 that survived the retry), or a technical failure
//! (everything else). Errors raised from a remote response keep the parsed
//! carrier error envelope so callers can inspect field-level sub-errors.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for USPS API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all USPS API operations.
///
/// All variants are terminal from the caller's perspective; the internal
/// auth and rate-limit retries have already run by the time one of these
/// is returned.
#[derive(Error, Debug)]
pub enum Error {
    /// The request failed validation, either against the local schema
    /// document before dispatch or with a 400 from the remote service.
    #[error("{message}")]
    Validation {
        /// Composed human-readable message, one line per sub-error
        message: String,
        /// HTTP status when the failure came from the remote service
        status: Option<u16>,
        /// Parsed field-level sub-errors, in envelope order
        details: Vec<ErrorDetail>,
        /// Raw error payload for programmatic inspection
        body: Option<Value>,
    },

    /// Authentication failed: the token exchange was rejected, or the
    /// service returned 401 on both the original and the retried attempt.
    #[error("{message}")]
    Auth {
        /// Composed human-readable message
        message: String,
        /// HTTP status when the failure came from the remote service
        status: Option<u16>,
        /// Parsed field-level sub-errors, in envelope order
        details: Vec<ErrorDetail>,
        /// Raw error payload for programmatic inspection
        body: Option<Value>,
    },

    /// Catch-all terminal failure: exhausted rate limiting, any other
    /// non-2xx status, transport errors, or a client-side misuse such as
    /// an unknown service name.
    #[error("{message}")]
    Technical {
        /// Composed human-readable message
        message: String,
        /// HTTP status when the failure came from the remote service
        status: Option<u16>,
        /// Parsed field-level sub-errors, in envelope order
        details: Vec<ErrorDetail>,
        /// Raw error payload for programmatic inspection
        body: Option<Value>,
    },
}

/// Finer-grained classification derived from the error variant and the
/// HTTP status it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Local schema check failed, or the service returned 400
    Validation,
    /// Token exchange failed, or 401 survived the retry
    Auth,
    /// 429 after the rate-limit retries were exhausted
    RateLimit,
    /// Any other 4xx from the service
    Client,
    /// A 5xx from the service
    Server,
    /// No HTTP status was produced: transport failures and client-side
    /// misuse such as an unknown service name
    Network,
}

/// One entry from the carrier error envelope's `error.errors` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Short summary of the sub-error
    pub title: Option<String>,
    /// Longer description of what went wrong
    pub detail: Option<String>,
    /// Carrier-defined error code
    pub code: Option<String>,
    /// Pointer to the offending request parameter, when supplied
    pub parameter: Option<String>,
}

impl ErrorDetail {
    fn from_envelope(value: &Value) -> Self {
        Self {
            title: value.get("title").and_then(Value::as_str).map(String::from),
            detail: value.get("detail").and_then(Value::as_str).map(String::from),
            code: value.get("code").and_then(Value::as_str).map(String::from),
            parameter: value
                .pointer("/source/parameter")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (Code: {})",
            self.title.as_deref().unwrap_or("Error"),
            self.detail.as_deref().unwrap_or("No details"),
            self.code.as_deref().unwrap_or("Unknown"),
        )?;
        if let Some(parameter) = &self.parameter {
            write!(f, " [Parameter: {parameter}]")?;
        }
        Ok(())
    }
}

impl Error {
    /// Classify this error by variant and HTTP status.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Auth { .. } => ErrorKind::Auth,
            Error::Technical { status, .. } => match status {
                Some(429) => ErrorKind::RateLimit,
                Some(status) if *status >= 500 => ErrorKind::Server,
                Some(_) => ErrorKind::Client,
                None => ErrorKind::Network,
            },
        }
    }

    /// Returns `true` if this is a validation error (local or remote 400).
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth { .. })
    }

    /// Returns `true` if the call failed because the rate limit stayed
    /// exhausted through all retries.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Technical { status: Some(429), .. })
    }

    /// Returns `true` if this error carries a 4xx status from the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Returns `true` if this error carries a 5xx status from the service.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }

    /// Returns `true` if retrying the whole call later could plausibly
    /// succeed (rate limiting, server errors, transport failures).
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Technical { status, .. } => {
                matches!(status, None | Some(429)) || self.is_server_error()
            }
            _ => false,
        }
    }

    /// The HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Validation { status, .. }
            | Error::Auth { status, .. }
            | Error::Technical { status, .. } => *status,
        }
    }

    /// The parsed field-level sub-errors, in the order the service sent them.
    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            Error::Validation { details, .. }
            | Error::Auth { details, .. }
            | Error::Technical { details, .. } => details,
        }
    }

    /// The raw structured error payload from the service, when one exists.
    pub fn error_body(&self) -> Option<&Value> {
        match self {
            Error::Validation { body, .. }
            | Error::Auth { body, .. }
            | Error::Technical { body, .. } => body.as_ref(),
        }
    }

    /// Look up a top-level field of the raw error payload by name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn inspect(err: usps_rs::Error) {
    /// if let Some(request_id) = err.error_field("requestId") {
    ///     eprintln!("failed request: {request_id}");
    /// }
    /// # }
    /// ```
    pub fn error_field(&self, name: &str) -> Option<&Value> {
        self.error_body().and_then(|body| body.get(name))
    }

    /// Create a typed error from a non-2xx response, classified by status.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let details = parse_details(&body);
        let message = compose_message(&body, &details);
        match status {
            400 => Error::Validation {
                message,
                status: Some(status),
                details,
                body: Some(body),
            },
            401 => Error::Auth {
                message,
                status: Some(status),
                details,
                body: Some(body),
            },
            _ => Error::Technical {
                message,
                status: Some(status),
                details,
                body: Some(body),
            },
        }
    }

    /// Create a validation error from local schema violations.
    pub(crate) fn schema_violations(details: Vec<ErrorDetail>) -> Self {
        let lines: Vec<String> = details.iter().map(ToString::to_string).collect();
        let message = if lines.is_empty() {
            "Request validation failed".to_string()
        } else {
            format!("Request validation failed\n{}", lines.join("\n"))
        };
        Error::Validation {
            message,
            status: None,
            details,
            body: None,
        }
    }

    /// Create an authentication error with no remote payload.
    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
            status: None,
            details: Vec::new(),
            body: None,
        }
    }

    /// Create a technical error with no remote payload.
    pub(crate) fn technical(message: impl Into<String>) -> Self {
        Error::Technical {
            message: message.into(),
            status: None,
            details: Vec::new(),
            body: None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Technical {
            message: format!("HTTP request failed: {err}"),
            status: err.status().map(|status| status.as_u16()),
            details: Vec::new(),
            body: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Technical {
            message: format!("JSON serialization failed: {err}"),
            status: None,
            details: Vec::new(),
            body: None,
        }
    }
}

/// Flatten the carrier error envelope into one human-readable message:
/// the top-level message followed by one line per sub-error.
fn compose_message(body: &Value, details: &[ErrorDetail]) -> String {
    let base = body
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .unwrap_or("Request failed")
        .to_string();

    if details.is_empty() {
        return base;
    }
    let lines: Vec<String> = details.iter().map(ToString::to_string).collect();
    format!("{}\n{}", base, lines.join("\n"))
}

fn parse_details(body: &Value) -> Vec<ErrorDetail> {
    body.pointer("/error/errors")
        .and_then(Value::as_array)
        .map(|errors| errors.iter().map(ErrorDetail::from_envelope).collect())
        .unwrap_or_default()
}
