//! Address verification service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::{ClientInner, Payload};
use crate::models::{AddressQuery, ZipCodeQuery};
use crate::validation::SchemaValidator;
use crate::Result;

use super::{split_combined_zip, ServiceKind};

const BASE_PATH: &str = "/addresses/v3";

/// Service for address verification and standardization.
///
/// # Example
///
/// ```no_run
/// use usps_rs::AddressQuery;
///
/// # async fn example(client: usps_rs::UspsClient) -> usps_rs::Result<()> {
/// let verified = client
///     .addresses()?
///     .address(&AddressQuery {
///         street_address: "475 L'Enfant Plaza SW".to_string(),
///         city: Some("Washington".to_string()),
///         state: "DC".to_string(),
///         ..Default::default()
///     })
///     .await?;
/// println!("{}", verified["address"]);
/// # Ok(())
/// # }
/// ```
pub struct AddressesService {
    inner: Arc<ClientInner>,
    validator: SchemaValidator,
}

impl AddressesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Result<Self> {
        let validator = SchemaValidator::for_family(
            ServiceKind::Addresses,
            inner.config.schema_cache.as_ref(),
        )?;
        Ok(Self { inner, validator })
    }

    /// Verify and standardize an address.
    ///
    /// A combined `"#####-####"` value in the `ZIPCode` field is split
    /// into `ZIPCode` and `ZIPPlus4` before dispatch.
    pub async fn address(&self, query: &AddressQuery) -> Result<Value> {
        let params = split_combined_zip(serde_json::to_value(query)?);
        self.inner
            .send(
                Method::GET,
                &format!("{}/address", BASE_PATH),
                Payload::Query(params),
                Some(&self.validator),
            )
            .await
    }

    /// Look up the city and state for a 5-digit ZIP Code.
    pub async fn city_state(&self, zip_code: &str) -> Result<Value> {
        let params = serde_json::json!({ "ZIPCode": zip_code });
        self.inner
            .send(
                Method::GET,
                &format!("{}/city-state", BASE_PATH),
                Payload::Query(params),
                Some(&self.validator),
            )
            .await
    }

    /// Look up the ZIP Code for a known street address.
    pub async fn zipcode(&self, query: &ZipCodeQuery) -> Result<Value> {
        let params = serde_json::to_value(query)?;
        self.inner
            .send(
                Method::GET,
                &format!("{}/zipcode", BASE_PATH),
                Payload::Query(params),
                Some(&self.validator),
            )
            .await
    }
}
