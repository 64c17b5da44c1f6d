//! Domestic pricing parameter models.
//!
//! Each struct maps onto one of the `/prices/v3/*/search` request
//! bodies. Field names serialize in the carrier's camelCase form with
//! ZIP fields keeping their all-caps prefixes.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::enums::{
    DestinationEntryFacilityType, ExtraService, MailClass, PaymentAccountType, PriceType,
    ProcessingCategory, RateIndicator,
};

/// Request body for a single domestic base rate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRatesQuery {
    /// Origination 5-digit ZIP Code
    #[serde(rename = "originZIPCode")]
    pub origin_zip_code: String,
    /// Destination 5-digit ZIP Code
    #[serde(rename = "destinationZIPCode")]
    pub destination_zip_code: String,
    /// Package weight in pounds
    pub weight: f64,
    /// Package length in inches
    pub length: f64,
    /// Package width in inches
    pub width: f64,
    /// Package height in inches
    pub height: f64,
    /// Mail class for the quote
    pub mail_class: MailClass,
    /// Processing category of the piece
    pub processing_category: ProcessingCategory,
    /// Rate ingredient describing packaging and entry
    pub rate_indicator: RateIndicator,
    /// Destination entry facility, if the piece is dropped at one
    pub destination_entry_facility_type: DestinationEntryFacilityType,
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

/// Request body for pricing extra services on a domestic shipment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraServiceRatesQuery {
    /// Mail class the services attach to
    pub mail_class: MailClass,
    /// Published, commercial or contract pricing
    pub price_type: PriceType,
    /// Extra service codes to quote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_services: Option<Vec<ExtraService>>,
    /// Declared item value in dollars, for insurance-bearing services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_value: Option<f64>,
    /// Package weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Origination 5-digit ZIP Code
    #[serde(rename = "originZIPCode", skip_serializing_if = "Option::is_none")]
    pub origin_zip_code: Option<String>,
    /// Destination 5-digit ZIP Code
    #[serde(
        rename = "destinationZIPCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_zip_code: Option<String>,
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

/// Request body for listing eligible base rates across mail classes.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRatesListQuery {
    /// Origination 5-digit ZIP Code
    #[serde(rename = "originZIPCode")]
    pub origin_zip_code: String,
    /// Destination 5-digit ZIP Code
    #[serde(rename = "destinationZIPCode")]
    pub destination_zip_code: String,
    /// Package weight in pounds
    pub weight: f64,
    /// Package length in inches
    pub length: f64,
    /// Package width in inches
    pub width: f64,
    /// Package height in inches
    pub height: f64,
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

/// Request body for total (base plus extra services) rate listings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRatesQuery {
    /// Origination 5-digit ZIP Code
    #[serde(rename = "originZIPCode")]
    pub origin_zip_code: String,
    /// Destination 5-digit ZIP Code
    #[serde(rename = "destinationZIPCode")]
    pub destination_zip_code: String,
    /// Package weight in pounds
    pub weight: f64,
    /// Package length in inches
    pub length: f64,
    /// Package width in inches
    pub width: f64,
    /// Package height in inches
    pub height: f64,
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

/// Request body for letter rate quotes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterRatesQuery {
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
    /// Anticipated mailing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_date: Option<NaiveDate>,
    /// Flags such as `isPolybagged` that make a letter non-machinable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_machinable_indicators: Option<Value>,
    /// Extra service codes to quote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_services: Option<Vec<ExtraService>>,
    /// Declared item value in dollars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_value: Option<f64>,
}
