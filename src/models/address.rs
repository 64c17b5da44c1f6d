//! Address lookup parameter models.

use serde::Serialize;

/// Parameters for verifying and standardizing a single address.
///
/// `street_address` and `state` are required by the service; everything
/// else narrows the match.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressQuery {
    /// Firm or company name at the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firm: Option<String>,
    /// Street number and name
    pub street_address: String,
    /// Apartment, suite or other secondary designator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_address: Option<String>,
    /// City name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Urbanization name (Puerto Rico addresses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urbanization: Option<String>,
    /// Two-letter state abbreviation
    pub state: String,
    /// 5-digit ZIP Code; the combined `#####-####` form is accepted and
    /// split before dispatch
    #[serde(rename = "ZIPCode", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// 4-digit ZIP Code extension
    #[serde(rename = "ZIPPlus4", skip_serializing_if = "Option::is_none")]
    pub zip_plus4: Option<String>,
}

/// Parameters for looking up the ZIP Code of a known address.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipCodeQuery {
    /// Street number and name
    pub street_address: String,
    /// City name
    pub city: String,
    /// Two-letter state abbreviation
    pub state: String,
    /// Firm or company name at the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firm: Option<String>,
}
