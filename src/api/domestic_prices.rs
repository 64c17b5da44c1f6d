//! Domestic pricing service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::{ClientInner, Payload};
use crate::models::{
    BaseRatesListQuery, BaseRatesQuery, ExtraServiceRatesQuery, LetterRatesQuery, TotalRatesQuery,
};
use crate::validation::SchemaValidator;
use crate::Result;

use super::ServiceKind;

const BASE_PATH: &str = "/prices/v3";

/// Service for domestic package and letter pricing.
///
/// # Example
///
/// ```no_run
/// use usps_rs::{
///     BaseRatesQuery, DestinationEntryFacilityType, MailClass, PriceType, ProcessingCategory,
///     RateIndicator,
/// };
///
/// # async fn example(client: usps_rs::UspsClient) -> usps_rs::Result<()> {
/// let rates = client
///     .domestic_prices()?
///     .base_rates(&BaseRatesQuery {
///         origin_zip_code: "78701".to_string(),
///         destination_zip_code: "98104".to_string(),
///         weight: 2.5,
///         length: 10.0,
///         width: 6.0,
///         height: 4.0,
///         mail_class: MailClass::PriorityMail,
///         processing_category: ProcessingCategory::Machinable,
///         rate_indicator: RateIndicator::SinglePiece,
///         destination_entry_facility_type: DestinationEntryFacilityType::None,
///         price_type: PriceType::Retail,
///         mailing_date: None,
///         account_type: None,
///         account_number: None,
///     })
///     .await?;
/// println!("{}", rates["totalBasePrice"]);
/// # Ok(())
/// # }
/// ```
pub struct DomesticPricesService {
    inner: Arc<ClientInner>,
    validator: SchemaValidator,
}

impl DomesticPricesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Result<Self> {
        let validator = SchemaValidator::for_family(
            ServiceKind::DomesticPrices,
            inner.config.schema_cache.as_ref(),
        )?;
        Ok(Self { inner, validator })
    }

    /// Quote the base rate for a single mail class and rate indicator.
    pub async fn base_rates(&self, query: &BaseRatesQuery) -> Result<Value> {
        self.post("base-rates/search", serde_json::to_value(query)?)
            .await
    }

    /// Quote extra services for a shipment.
    pub async fn extra_service_rates(&self, query: &ExtraServiceRatesQuery) -> Result<Value> {
        self.post("extra-service-rates/search", serde_json::to_value(query)?)
            .await
    }

    /// List every eligible base rate for a package.
    pub async fn base_rates_list(&self, query: &BaseRatesListQuery) -> Result<Value> {
        self.post("base-rates-list/search", serde_json::to_value(query)?)
            .await
    }

    /// List total rates, combining base rates with extra services.
    pub async fn total_rates(&self, query: &TotalRatesQuery) -> Result<Value> {
        self.post("total-rates/search", serde_json::to_value(query)?)
            .await
    }

    /// Quote rates for a letter.
    pub async fn letter_rates(&self, query: &LetterRatesQuery) -> Result<Value> {
        self.post("letter-rates/search", serde_json::to_value(query)?)
            .await
    }

    async fn post(&self, suffix: &str, body: Value) -> Result<Value> {
        self.inner
            .send(
                Method::POST,
                &format!("{}/{}", BASE_PATH, suffix),
                Payload::Json(body),
                Some(&self.validator),
            )
            .await
    }
}
