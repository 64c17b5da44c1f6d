//! Facility lookup service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::{ClientInner, Payload};
use crate::models::{DropoffLocationsQuery, ParcelLockerLocationsQuery, PostOfficeLocationsQuery};
use crate::validation::SchemaValidator;
use crate::Result;

use super::{split_combined_zip, ServiceKind};

const BASE_PATH: &str = "/locations/v3";

/// Service for finding drop-off points, post offices and parcel
/// lockers.
///
/// # Example
///
/// ```no_run
/// use usps_rs::PostOfficeLocationsQuery;
///
/// # async fn example(client: usps_rs::UspsClient) -> usps_rs::Result<()> {
/// let offices = client
///     .locations()?
///     .post_office_locations(&PostOfficeLocationsQuery {
///         zip_code: Some("98104".to_string()),
///         radius: Some(10),
///         passport_appointments_available: Some(true),
///         ..Default::default()
///     })
///     .await?;
/// println!("{}", offices["locations"]);
/// # Ok(())
/// # }
/// ```
pub struct LocationsService {
    inner: Arc<ClientInner>,
    validator: SchemaValidator,
}

impl LocationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Result<Self> {
        let validator = SchemaValidator::for_family(
            ServiceKind::Locations,
            inner.config.schema_cache.as_ref(),
        )?;
        Ok(Self { inner, validator })
    }

    /// Find facilities that accept drop-shipped mail for a destination.
    pub async fn dropoff_locations(&self, query: &DropoffLocationsQuery) -> Result<Value> {
        self.get("dropoff-locations", serde_json::to_value(query)?)
            .await
    }

    /// Search post office facilities by address, coordinates or
    /// offered services.
    pub async fn post_office_locations(&self, query: &PostOfficeLocationsQuery) -> Result<Value> {
        self.get("post-office-locations", serde_json::to_value(query)?)
            .await
    }

    /// List self-service parcel lockers.
    pub async fn parcel_locker_locations(
        &self,
        query: &ParcelLockerLocationsQuery,
    ) -> Result<Value> {
        self.get("parcel-locker-locations", serde_json::to_value(query)?)
            .await
    }

    async fn get(&self, suffix: &str, params: Value) -> Result<Value> {
        let params = split_combined_zip(params);
        self.inner
            .send(
                Method::GET,
                &format!("{}/{}", BASE_PATH, suffix),
                Payload::Query(params),
                Some(&self.validator),
            )
            .await
    }
}
