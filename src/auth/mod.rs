//! OAuth2 authentication for the USPS APIs.
//!
//! USPS issues consumer key/secret pairs through its developer portal;
//! the client exchanges them for short-lived bearer tokens using the
//! OAuth2 client-credentials flow. Token caching and refresh happen
//! automatically inside the client, so the only type most applications
//! touch here is [`Credentials`]:
//!
//! ```no_run
//! use usps_rs::{Credentials, UspsClient};
//!
//! # fn example() -> usps_rs::Result<()> {
//! let client = UspsClient::new(Credentials::new(
//!     std::env::var("USPS_CLIENT_ID").unwrap(),
//!     std::env::var("USPS_CLIENT_SECRET").unwrap(),
//! ))?;
//! # Ok(())
//! # }
//! ```
//!
//! Tokens are refreshed 60 seconds before their reported expiry, and a
//! request that still comes back `401` triggers one forced refresh and
//! a single retry before the failure is surfaced.

mod token;

pub use token::Credentials;
pub(crate) use token::TokenManager;
