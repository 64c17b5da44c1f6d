//! International pricing service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::{ClientInner, Payload};
use crate::models::{
    InternationalBaseRatesListQuery, InternationalBaseRatesQuery,
    InternationalExtraServiceRatesQuery, InternationalLetterRatesQuery,
    InternationalTotalRatesQuery,
};
use crate::validation::SchemaValidator;
use crate::Result;

use super::{split_combined_zip, ServiceKind};

const BASE_PATH: &str = "/international-prices/v3";

/// Service for international package and letter pricing.
///
/// # Example
///
/// ```no_run
/// use usps_rs::{InternationalBaseRatesQuery, MailClass, PriceType, RateIndicator};
///
/// # async fn example(client: usps_rs::UspsClient) -> usps_rs::Result<()> {
/// let rates = client
///     .international_prices()?
///     .base_rates(&InternationalBaseRatesQuery {
///         origin_zip_code: "98104".to_string(),
///         foreign_postal_code: None,
///         destination_country_code: "CA".to_string(),
///         weight: 3.0,
///         length: Some(12.0),
///         width: Some(8.0),
///         height: Some(5.0),
///         mail_class: MailClass::PriorityMailInternational,
///         processing_category: None,
///         rate_indicator: RateIndicator::SinglePiece,
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
pub struct InternationalPricesService {
    inner: Arc<ClientInner>,
    validator: SchemaValidator,
}

impl InternationalPricesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Result<Self> {
        let validator = SchemaValidator::for_family(
            ServiceKind::InternationalPrices,
            inner.config.schema_cache.as_ref(),
        )?;
        Ok(Self { inner, validator })
    }

    /// Quote the base rate for one international mail class.
    pub async fn base_rates(&self, query: &InternationalBaseRatesQuery) -> Result<Value> {
        let body = split_combined_zip(serde_json::to_value(query)?);
        self.post("base-rates/search", body).await
    }

    /// Quote extra services for an international shipment.
    pub async fn extra_service_rates(
        &self,
        query: &InternationalExtraServiceRatesQuery,
    ) -> Result<Value> {
        let body = split_combined_zip(serde_json::to_value(query)?);
        self.post("extra-service-rates/search", body).await
    }

    /// List every eligible base rate for an international package.
    pub async fn base_rates_list(&self, query: &InternationalBaseRatesListQuery) -> Result<Value> {
        let body = split_combined_zip(serde_json::to_value(query)?);
        self.post("base-rates-list/search", body).await
    }

    /// List total international rates, combining base rates with extra
    /// services.
    pub async fn total_rates(&self, query: &InternationalTotalRatesQuery) -> Result<Value> {
        let body = split_combined_zip(serde_json::to_value(query)?);
        self.post("total-rates/search", body).await
    }

    /// Quote rates for an international letter.
    pub async fn letter_rates(&self, query: &InternationalLetterRatesQuery) -> Result<Value> {
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
