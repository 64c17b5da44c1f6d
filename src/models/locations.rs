//! Facility lookup parameter models.
//!
//! The post office search carries a long tail of amenity filters; the
//! carrier spells several of them in unusual casings (`LAT`, `LONG`,
//! `PO-LOBBY_AFTER_HOURS`, `POBoxAvailable`) which the serde renames
//! preserve exactly.

use chrono::NaiveDate;
use serde::Serialize;

use super::enums::{DestinationEntryFacilityType, MailClass, ProcessingCategory};

/// Parameters for finding drop-off facilities for a shipment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropoffLocationsQuery {
    /// Destination 5-digit ZIP Code
    #[serde(rename = "destinationZIPCode")]
    pub destination_zip_code: String,
    /// Destination 4-digit ZIP Code extension
    #[serde(
        rename = "destinationZIPPlus4",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_zip_plus4: Option<String>,
    /// Mail class the shipment will travel under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_class: Option<MailClass>,
    /// Processing category of the piece
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_category: Option<ProcessingCategory>,
    /// Entry facility type to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_entry_facility_type: Option<DestinationEntryFacilityType>,
    /// Whether the shipment arrives palletized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palletized: Option<bool>,
    /// Anticipated mailing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_date: Option<NaiveDate>,
}

/// Parameters for searching post office facilities by address, by
/// coordinates or by offered services.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOfficeLocationsQuery {
    /// Street number and name to search near
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    /// Apartment, suite or other secondary designator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_address: Option<String>,
    /// City name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter state abbreviation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// 5-digit ZIP Code
    #[serde(rename = "ZIPCode", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// 4-digit ZIP Code extension
    #[serde(rename = "ZIPPlus4", skip_serializing_if = "Option::is_none")]
    pub zip_plus4: Option<String>,
    /// Latitude to search around
    #[serde(rename = "LAT", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude to search around
    #[serde(rename = "LONG", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Search radius in miles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    /// Facility types to include, such as `PO` or `CPO`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_office_type: Option<Vec<String>>,
    /// Only facilities whose lobby stays open after window hours
    #[serde(
        rename = "PO-LOBBY_AFTER_HOURS",
        skip_serializing_if = "Option::is_none"
    )]
    pub po_lobby_after_hours: Option<bool>,
    /// Required mail service hours, as `DAY:HH:MM-HH:MM` ranges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_service_hours: Option<Vec<String>>,
    /// Only facilities offering carrier pickup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_pickup_available: Option<bool>,
    /// Only facilities accepting accountable mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accountable_mail_available: Option<bool>,
    /// Only facilities accepting business mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_mail_acceptance_available: Option<bool>,
    /// Required business mail acceptance hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_mail_acceptance_hours: Option<Vec<String>>,
    /// Only facilities accepting bulk mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_mail_acceptance_available: Option<bool>,
    /// Required bulk mail acceptance hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_mail_acceptance_hours: Option<Vec<String>>,
    /// Only facilities with PO Boxes
    #[serde(rename = "POBoxAvailable", skip_serializing_if = "Option::is_none")]
    pub po_box_available: Option<bool>,
    /// Only facilities with a package deposit slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_deposit_available: Option<bool>,
    /// Required package deposit hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_deposit_hours: Option<Vec<String>>,
    /// Only facilities taking passport appointments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_appointments_available: Option<bool>,
    /// Only facilities offering passport photos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_photo_service_available: Option<bool>,
    /// Only facilities with notary service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notary_service_available: Option<bool>,
    /// Only facilities serving carrier routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_route_available: Option<bool>,
    /// Only facilities offering general delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_delivery_available: Option<bool>,
    /// Only facilities selling money orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_orders_available: Option<bool>,
    /// Only facilities selling stamped envelopes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamped_envelope_available: Option<bool>,
    /// Only facilities selling stamped cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamped_card_available: Option<bool>,
    /// Only facilities with a parcel locker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_locker_available: Option<bool>,
    /// Maximum package length the locker must take, in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_locker_package_max_length: Option<u32>,
    /// Maximum package width the locker must take, in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_locker_package_max_width: Option<u32>,
    /// Maximum package height the locker must take, in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_locker_package_max_height: Option<u32>,
    /// Result page offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Parameters for listing self-service parcel lockers.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelLockerLocationsQuery {
    /// City name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter state abbreviation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// 5-digit ZIP Code
    #[serde(rename = "ZIPCode", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Result page offset
    pub offset: u32,
    /// Maximum number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
