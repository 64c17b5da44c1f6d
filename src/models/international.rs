//! International pricing parameter models.
//!
//! These mirror the domestic shapes but swap the destination ZIP for a
//! country code and optional foreign postal code.

use chrono::NaiveDate;
use serde::Serialize;

use super::enums::{
    ExtraService, MailClass, PaymentAccountType, PriceType, ProcessingCategory, RateIndicator,
};

/// Request body for a single international base rate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalBaseRatesQuery {
    /// Origination 5-digit ZIP Code
    #[serde(rename = "originZIPCode")]
    pub origin_zip_code: String,
    /// Destination postal code, where the country uses one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_postal_code: Option<String>,
    /// ISO two-letter destination country code
    pub destination_country_code: String,
    /// Package weight in pounds
    pub weight: f64,
    /// Package length in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Package width in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Package height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Mail class for the quote
    pub mail_class: MailClass,
    /// Processing category of the piece
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_category: Option<ProcessingCategory>,
    /// Rate ingredient describing packaging and entry
    pub rate_indicator: RateIndicator,
    /// Published, commercial or contract pricing
    pub price_type: PriceType,
    /// Anticipated mailing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_date: Option<NaiveDate>,
    /// Payment account type, when quoting against an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<PaymentAccountType>,
    /// Payment account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// Request body for pricing extra services on an international shipment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalExtraServiceRatesQuery {
    /// Mail class the services attach to
    pub mail_class: MailClass,
    /// Published, commercial or contract pricing
    pub price_type: PriceType,
    /// Origination 5-digit ZIP Code
    #[serde(rename = "originZIPCode", skip_serializing_if = "Option::is_none")]
    pub origin_zip_code: Option<String>,
    /// ISO two-letter destination country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_country_code: Option<String>,
    /// Package weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Extra service codes to quote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_services: Option<Vec<ExtraService>>,
    /// Declared item value in dollars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_value: Option<f64>,
    /// Anticipated mailing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_date: Option<NaiveDate>,
    /// Payment account type, when quoting against an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<PaymentAccountType>,
    /// Payment account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// Request body for listing eligible international base rates.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalBaseRatesListQuery {
    /// Origination 5-digit ZIP Code
    #[serde(rename = "originZIPCode")]
    pub origin_zip_code: String,
    /// Destination postal code, where the country uses one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_postal_code: Option<String>,
    /// ISO two-letter destination country code
    pub destination_country_code: String,
    /// Package weight in pounds
    pub weight: f64,
    /// Package length in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Package width in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Package height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Restrict results to one mail class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_class: Option<MailClass>,
    /// Restrict results to a set of mail classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_classes: Option<Vec<MailClass>>,
    /// Published, commercial or contract pricing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
    /// Anticipated mailing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_date: Option<NaiveDate>,
    /// Payment account type, when quoting against an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<PaymentAccountType>,
    /// Payment account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// Request body for international total (base plus extras) listings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalTotalRatesQuery {
    /// Origination 5-digit ZIP Code
    #[serde(rename = "originZIPCode")]
    pub origin_zip_code: String,
    /// Destination postal code, where the country uses one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_postal_code: Option<String>,
    /// ISO two-letter destination country code
    pub destination_country_code: String,
    /// Package weight in pounds
    pub weight: f64,
    /// Package length in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Package width in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Package height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Restrict results to one mail class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_class: Option<MailClass>,
    /// Restrict results to a set of mail classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_classes: Option<Vec<MailClass>>,
    /// Published, commercial or contract pricing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
    /// Declared item value in dollars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_value: Option<f64>,
    /// Extra service codes to include in the total
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_services: Option<Vec<ExtraService>>,
    /// Anticipated mailing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_date: Option<NaiveDate>,
    /// Payment account type, when quoting against an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<PaymentAccountType>,
    /// Payment account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// Request body for international letter rate quotes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalLetterRatesQuery {
    /// ISO two-letter destination country code
    pub destination_country_code: String,
    /// Letter weight in ounces
    pub weight: f64,
    /// Letter length in inches
    pub length: f64,
    /// Letter height in inches
    pub height: f64,
    /// Letter thickness in inches
    pub thickness: f64,
    /// Processing category, normally letters
    pub processing_category: ProcessingCategory,
    /// Rate ingredient describing packaging and entry
    pub rate_indicator: RateIndicator,
    /// Published, commercial or contract pricing
    pub price_type: PriceType,
    /// Anticipated mailing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_date: Option<NaiveDate>,
    /// Payment account type, when quoting against an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<PaymentAccountType>,
    /// Payment account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}
