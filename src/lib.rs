//! # usps-rs
//!
//! A Rust client for the USPS APIs.
//!
//! This crate covers address verification, domestic and international
//! pricing, and facility lookup, handling OAuth2 token exchange,
//! request validation, and retries behind one client type.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 client-credentials flow with automatic
//!   token refresh
//! - **Request validation**: requests are checked against bundled
//!   schema documents before they go on the wire
//! - **Retry policy**: one forced token refresh on 401, bounded backoff
//!   on 429
//! - **Typed parameters**: strongly-typed request structs and carrier
//!   code tables
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use usps_rs::{AddressQuery, Credentials, UspsClient};
//!
//! #[tokio::main]
//! async fn main() -> usps_rs::Result<()> {
//!     let client = UspsClient::new(Credentials::new(
//!         std::env::var("USPS_CLIENT_ID").unwrap(),
//!         std::env::var("USPS_CLIENT_SECRET").unwrap(),
//!     ))?;
//!
//!     // Verify and standardize an address
//!     let verified = client
//!         .addresses()?
//!         .address(&AddressQuery {
//!             street_address: "475 L'Enfant Plaza SW".to_string(),
//!             city: Some("Washington".to_string()),
//!             state: "DC".to_string(),
//!             zip_code: Some("20260-0004".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("{}", verified["address"]);
//!
//!     // Look up the city and state for a ZIP Code
//!     let city_state = client.addresses()?.city_state("98104").await?;
//!     println!("{} {}", city_state["city"], city_state["state"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pricing Example
//!
//! ```rust,no_run
//! use usps_rs::{MailClass, PriceType, TotalRatesQuery};
//!
//! #[tokio::main]
//! async fn main() -> usps_rs::Result<()> {
//!     # let client = usps_rs::UspsClient::new(usps_rs::Credentials::new("k", "s"))?;
//!     let rates = client
//!         .domestic_prices()?
//!         .total_rates(&TotalRatesQuery {
//!             origin_zip_code: "78701".to_string(),
//!             destination_zip_code: "98104".to_string(),
//!             weight: 2.5,
//!             length: 10.0,
//!             width: 6.0,
//!             height: 4.0,
//!             mail_class: Some(MailClass::PriorityMail),
//!             price_type: Some(PriceType::Retail),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     if let Some(options) = rates["rateOptions"].as_array() {
//!         for option in options {
//!             println!("{}", option["totalPrice"]);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Test Environment
//!
//! USPS runs a separate test environment with its own credentials.
//! Flip [`ClientConfig::with_test_mode`] to route calls there:
//!
//! ```rust,no_run
//! use usps_rs::{ClientConfig, Credentials, UspsClient};
//!
//! # fn main() -> usps_rs::Result<()> {
//! let client = UspsClient::with_config(
//!     Credentials::new("test-key", "test-secret"),
//!     ClientConfig::default().with_test_mode(true),
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod validation;

// Re-export primary types at crate root for convenience
pub use api::{
    AddressesService, DomesticPricesService, InternationalPricesService, LocationsService,
    ServiceKind,
};
pub use auth::Credentials;
pub use client::{ClientConfig, Payload, ServiceHandle, UspsClient};
pub use error::{Error, ErrorDetail, ErrorKind, Result};
pub use models::{
    AddressQuery, BaseRatesListQuery, BaseRatesQuery, DestinationEntryFacilityType,
    DropoffLocationsQuery, ExtraService, ExtraServiceRatesQuery, InternationalBaseRatesListQuery,
    InternationalBaseRatesQuery, InternationalExtraServiceRatesQuery,
    InternationalLetterRatesQuery, InternationalTotalRatesQuery, LetterRatesQuery, MailClass,
    ParcelLockerLocationsQuery, PaymentAccountType, PostOfficeLocationsQuery, PriceType,
    ProcessingCategory, RateIndicator, TotalRatesQuery, ZipCodeQuery,
};
pub use reqwest::Method;
pub use validation::SchemaCache;

/// Prelude module for convenient imports.
///
/// ```rust
/// use usps_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, Payload, ServiceHandle, UspsClient};
    pub use crate::error::{Error, ErrorDetail, ErrorKind, Result};
    pub use crate::models::{
        // Enums
        DestinationEntryFacilityType, ExtraService, MailClass, PaymentAccountType, PriceType,
        ProcessingCategory, RateIndicator,
        // Address parameters
        AddressQuery, ZipCodeQuery,
        // Domestic pricing parameters
        BaseRatesListQuery, BaseRatesQuery, ExtraServiceRatesQuery, LetterRatesQuery,
        TotalRatesQuery,
        // International pricing parameters
        InternationalBaseRatesListQuery, InternationalBaseRatesQuery,
        InternationalExtraServiceRatesQuery, InternationalLetterRatesQuery,
        InternationalTotalRatesQuery,
        // Facility parameters
        DropoffLocationsQuery, ParcelLockerLocationsQuery, PostOfficeLocationsQuery,
    };
    pub use crate::validation::SchemaCache;
}
