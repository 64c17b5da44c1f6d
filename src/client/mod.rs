//! HTTP client and service layer for the USPS APIs.
//!
//! This module provides the main entry point [`UspsClient`] for
//! interacting with the USPS APIs.
//!
//! # Example
//!
//! ```no_run
//! use usps_rs::{Credentials, UspsClient, ZipCodeQuery};
//!
//! # async fn example() -> usps_rs::Result<()> {
//! let client = UspsClient::new(Credentials::new("consumer-key", "consumer-secret"))?;
//!
//! // Look up the ZIP Code for an address
//! let result = client
//!     .addresses()?
//!     .zipcode(&ZipCodeQuery {
//!         street_address: "600 Fourth Ave".to_string(),
//!         city: "Seattle".to_string(),
//!         state: "WA".to_string(),
//!         firm: None,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::{Payload, ServiceHandle, UspsClient};
pub(crate) use http::ClientInner;
