//! API service modules for the USPS endpoints.
//!
//! Each service provides methods for one API family. All of them share
//! the client's token lifecycle, request validation, and retry policy.

use serde_json::Value;

mod addresses;
mod domestic_prices;
mod international_prices;
mod locations;

pub use addresses::AddressesService;
pub use domestic_prices::DomesticPricesService;
pub use international_prices::InternationalPricesService;
pub use locations::LocationsService;

/// The API families this client knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// Address verification and standardization
    Addresses,
    /// Domestic package and letter pricing
    DomesticPrices,
    /// International package and letter pricing
    InternationalPrices,
    /// Facility lookup
    Locations,
}

impl ServiceKind {
    /// The family name used for dynamic lookup and schema cache keys.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Addresses => "addresses",
            ServiceKind::DomesticPrices => "domesticPrices",
            ServiceKind::InternationalPrices => "internationalPrices",
            ServiceKind::Locations => "locations",
        }
    }

    /// Resolve a family name back to its kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "addresses" => Some(ServiceKind::Addresses),
            "domesticPrices" => Some(ServiceKind::DomesticPrices),
            "internationalPrices" => Some(ServiceKind::InternationalPrices),
            "locations" => Some(ServiceKind::Locations),
            _ => None,
        }
    }
}

/// Split combined `"#####-####"` ZIP values into separate fields.
///
/// Walks the parameter structure recursively. A `ZIPCode` entry whose
/// value contains a hyphen is truncated to the part before the first
/// hyphen, with the remainder moved into `ZIPPlus4` unless that field
/// is already present. Running the transform twice yields the same
/// result.
pub(crate) fn split_combined_zip(value: Value) -> Value {
    match value {
        Value::Object(mut object) => {
            let mut split = None;
            if let Some(Value::String(zip)) = object.get("ZIPCode") {
                if let Some((prefix, suffix)) = zip.split_once('-') {
                    split = Some((prefix.to_string(), suffix.to_string()));
                }
            }
            if let Some((prefix, suffix)) = split {
                object.insert("ZIPCode".to_string(), Value::String(prefix));
                if !object.contains_key("ZIPPlus4") {
                    object.insert("ZIPPlus4".to_string(), Value::String(suffix));
                }
            }
            Value::Object(
                object
                    .into_iter()
                    .map(|(key, value)| (key, split_combined_zip(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(split_combined_zip).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_combined_zip_is_split() {
        let params = json!({ "ZIPCode": "98104-1822", "state": "WA" });
        let processed = split_combined_zip(params);

        assert_eq!(
            processed,
            json!({ "ZIPCode": "98104", "ZIPPlus4": "1822", "state": "WA" })
        );
    }

    #[test]
    fn test_split_is_idempotent() {
        let params = json!({ "ZIPCode": "98104-1822" });
        let once = split_combined_zip(params);
        let twice = split_combined_zip(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_existing_plus4_is_not_overwritten() {
        let params = json!({ "ZIPCode": "98104-9999", "ZIPPlus4": "1822" });
        let processed = split_combined_zip(params);

        assert_eq!(
            processed,
            json!({ "ZIPCode": "98104", "ZIPPlus4": "1822" })
        );
    }

    #[test]
    fn test_split_recurses_into_nested_structures() {
        let params = json!({
            "packages": [
                { "destination": { "ZIPCode": "20260-0004" } },
                { "destination": { "ZIPCode": "98104" } }
            ]
        });
        let processed = split_combined_zip(params);

        assert_eq!(
            processed,
            json!({
                "packages": [
                    { "destination": { "ZIPCode": "20260", "ZIPPlus4": "0004" } },
                    { "destination": { "ZIPCode": "98104" } }
                ]
            })
        );
    }

    #[test]
    fn test_split_only_touches_the_exact_key() {
        // Prefixed fields like originZIPCode keep their combined form
        let params = json!({ "originZIPCode": "78701-2024" });
        let processed = split_combined_zip(params.clone());

        assert_eq!(processed, params);
    }

    #[test]
    fn test_non_string_zip_is_left_alone() {
        let params = json!({ "ZIPCode": 98104 });
        let processed = split_combined_zip(params.clone());

        assert_eq!(processed, params);
    }

    #[test]
    fn test_service_kind_name_roundtrip() {
        for kind in [
            ServiceKind::Addresses,
            ServiceKind::DomesticPrices,
            ServiceKind::InternationalPrices,
            ServiceKind::Locations,
        ] {
            assert_eq!(ServiceKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ServiceKind::from_name("tracking"), None);
    }
}
