//! Request validation against the bundled schema documents.
//!
//! Each API family ships with one schema document describing the shape
//! of every request the family can make. Before a request goes out, the
//! fully-built envelope (method, path, query, body) is checked against
//! the family's compiled schema; a violation fails the call locally so
//! malformed requests never reach the remote service. Validation can be
//! switched off wholesale through
//! [`ClientConfig::with_validate_requests`](crate::ClientConfig::with_validate_requests).

use std::sync::Arc;

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::api::ServiceKind;
use crate::error::ErrorDetail;
use crate::{Error, Result};

/// External store for schema documents, consulted before the bundled
/// copies.
///
/// Deployments that already own a persistent cache can hand it to
/// [`ClientConfig::with_schema_cache`](crate::ClientConfig::with_schema_cache);
/// a hit replaces the bundled document for that family, so a document
/// can be pinned or patched without rebuilding the application.
pub trait SchemaCache: Send + Sync {
    /// Fetch a previously stored schema document.
    fn get(&self, key: &str) -> Option<String>;
    /// Store a schema document under the given key.
    fn put(&self, key: &str, document: &str);
}

/// A compiled schema for one API family.
///
/// Compiled once at facade construction; reads are lock-free and safe
/// from concurrent calls.
pub(crate) struct SchemaValidator {
    schema: JSONSchema,
}

impl SchemaValidator {
    /// Compile the schema document for one API family, consulting the
    /// external cache first when one is configured.
    ///
    /// A cached document that fails to parse or compile is replaced by
    /// the bundled copy, which is written back over it.
    pub(crate) fn for_family(
        kind: ServiceKind,
        cache: Option<&Arc<dyn SchemaCache>>,
    ) -> Result<Self> {
        let key = kind.name();
        let embedded = embedded_document(kind);

        if let Some(cache) = cache {
            match cache.get(key) {
                Some(text) => match compile_document(&text) {
                    Ok(schema) => return Ok(Self { schema }),
                    Err(reason) => {
                        tracing::warn!(
                            "Cached schema document for {} is unusable, using the bundled copy: {}",
                            key,
                            reason
                        );
                        cache.put(key, embedded);
                    }
                },
                None => cache.put(key, embedded),
            }
        }

        let schema = compile_document(embedded).map_err(|reason| {
            Error::technical(format!("Invalid schema document for {}: {}", key, reason))
        })?;
        Ok(Self { schema })
    }

    /// Check a fully-built request envelope against the schema,
    /// collecting every violation into one validation error.
    pub(crate) fn validate(&self, request: &Value) -> Result<()> {
        if let Err(violations) = self.schema.validate(request) {
            let details: Vec<ErrorDetail> = violations
                .map(|violation| {
                    let path = violation.instance_path.to_string();
                    ErrorDetail {
                        title: Some("Schema violation".to_string()),
                        detail: Some(violation.to_string()),
                        code: None,
                        parameter: if path.is_empty() { None } else { Some(path) },
                    }
                })
                .collect();
            return Err(Error::schema_violations(details));
        }
        Ok(())
    }
}

fn compile_document(text: &str) -> std::result::Result<JSONSchema, String> {
    let parsed: Value =
        serde_json::from_str(text).map_err(|e| e.to_string())?;
    JSONSchema::compile(&parsed).map_err(|e| e.to_string())
}

/// The schema document bundled with the crate for one API family.
fn embedded_document(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Addresses => include_str!("../../definitions/addresses.json"),
        ServiceKind::DomesticPrices => include_str!("../../definitions/domestic-prices.json"),
        ServiceKind::InternationalPrices => {
            include_str!("../../definitions/international-prices.json")
        }
        ServiceKind::Locations => include_str!("../../definitions/locations.json"),
    }
}
