//! Data models for the USPS APIs.
//!
//! This module contains the strongly-typed parameter structures sent to
//! the carrier. Models are organized by API family:
//!
//! - [`enums`] - Mail classes, rate indicators, extra services, etc.
//! - [`address`] - Address verification and ZIP lookup parameters
//! - [`prices`] - Domestic pricing request bodies
//! - [`international`] - International pricing request bodies
//! - [`locations`] - Facility search parameters

pub mod enums;
pub mod address;
pub mod prices;
pub mod international;
pub mod locations;

// Re-export commonly used types
pub use enums::*;
pub use address::*;
pub use prices::*;
pub use international::*;
pub use locations::*;
