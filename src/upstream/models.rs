// upstream/models.rs
//
// Realty-in-US payloads, as far as we read them.
//
// auto-complete
//  └── autocomplete[0]
//       ├── _id / mpr_id
//       ├── area_type        ("address", "city", ...)
//       ├── line, city, state_code, postal_code
//
// properties/v2/detail, list-for-sale
//  └── properties[]
//       ├── address
//       │    ├── line
//       │    ├── city
//       │    ├── state_code
//       │    └── postal_code
//       ├── price / list_price / estimate.estimate
//       ├── beds(_min|_max), baths(_min|_max), sqft(_min|_max)
//       ├── year_built, prop_type, prop_status
//       ├── tax_assessed_value, tax_amount
//       ├── lot_sqft, hoa_fee, days_on_market
//       └── description
//
// Shapes drift between endpoints, so records stay as `serde_json::Value`
// and are copied into canonical alias keys by table.

use crate::domain::format::value_as_text;
use crate::domain::normalize::{reshape, resolve_alias};
use crate::domain::RawRecord;
use serde_json::{Map, Value};

/// `(target key, provider keys)` for the detail endpoint.
pub const DETAIL_FIELDS: &[(&str, &[&str])] = &[
    ("price", &["price", "list_price", "estimate.estimate"]),
    ("bedrooms", &["beds", "beds_max", "beds_min"]),
    ("bathrooms", &["baths", "baths_max", "baths_min"]),
    ("livingArea", &["sqft", "sqft_max", "sqft_min"]),
    ("yearBuilt", &["year_built"]),
    ("propertyType", &["prop_type", "property_type"]),
    ("taxAssessment", &["tax_assessed_value"]),
    ("propertyTax", &["tax_amount", "annual_tax"]),
    ("status", &["prop_status", "status"]),
    ("mlsNumber", &["listing_id", "mls.id"]),
    ("daysOnMarket", &["days_on_market"]),
    ("description", &["description"]),
    ("lotSize", &["lot_sqft"]),
    ("hoaFee", &["hoa_fee"]),
];

/// `(target key, provider keys)` for list-for-sale entries.
pub const LISTING_FIELDS: &[(&str, &[&str])] = &[
    ("price", &["price", "list_price"]),
    ("bedrooms", &["beds"]),
    ("bathrooms", &["baths"]),
    ("livingArea", &["sqft"]),
    ("yearBuilt", &["year_built"]),
    ("propertyType", &["prop_type"]),
    ("status", &["prop_status"]),
    ("daysOnMarket", &["days_on_market"]),
];

/// Address components: `(target, keys in provider address, top-level keys, suggestion keys)`.
const ADDRESS_COMPONENTS: &[(&str, &[&str], &[&str], &[&str])] = &[
    ("streetAddress", &["line", "streetAddress", "street"], &["street"], &["line"]),
    ("city", &["city"], &["city"], &["city"]),
    ("state", &["state_code", "state"], &["state_code"], &["state_code"]),
    ("zipcode", &["postal_code", "zipcode", "zip"], &["postal_code"], &["postal_code"]),
];

/// Builds the address of a provider property.
///
/// A string address passes through. Otherwise each component comes from the
/// provider's address object, then the property's top level, then the
/// autocomplete suggestion that led to it.
pub fn shape_address(property: &Value, suggestion: &Value) -> Option<Value> {
    if let Some(Value::String(line)) = property.get("address") {
        if !line.trim().is_empty() {
            return Some(Value::String(line.clone()));
        }
    }

    let nested = property.get("address").filter(|v| v.is_object());
    let components: Map<String, Value> = ADDRESS_COMPONENTS
        .iter()
        .filter_map(|(target, in_address, top_level, in_suggestion)| {
            nested
                .and_then(|a| resolve_alias(a, in_address))
                .or_else(|| resolve_alias(property, top_level))
                .or_else(|| resolve_alias(suggestion, in_suggestion))
                .map(|v| (target.to_string(), v.clone()))
        })
        .collect();

    (!components.is_empty()).then_some(Value::Object(components))
}

/// Maps a detail-endpoint property onto canonical alias keys.
pub fn shape_detail(property: &Value, suggestion: &Value) -> RawRecord {
    shape(property, suggestion, DETAIL_FIELDS)
}

/// Maps one list-for-sale entry onto canonical alias keys.
pub fn shape_listing(property: &Value) -> RawRecord {
    shape(property, &Value::Null, LISTING_FIELDS)
}

fn shape(property: &Value, suggestion: &Value, table: &[(&str, &[&str])]) -> RawRecord {
    let mut record = reshape(property, table);
    if let Some(address) = shape_address(property, suggestion) {
        record.insert("address".to_string(), address);
    }
    Value::Object(record)
}

/// Property id of an autocomplete suggestion, when it points at a single property.
pub fn suggestion_property_id(suggestion: &Value) -> Option<String> {
    let is_address = suggestion.get("area_type").and_then(Value::as_str) == Some("address");
    if !is_address && resolve_alias(suggestion, &["_id"]).is_none() {
        return None;
    }
    resolve_alias(suggestion, &["_id", "mpr_id"]).and_then(value_as_text)
}

/// City and state code of an autocomplete suggestion, for list queries.
pub fn suggestion_city_state(suggestion: &Value) -> (String, String) {
    let text = |key: &str| {
        suggestion
            .get(key)
            .and_then(value_as_text)
            .unwrap_or_default()
    };
    (text("city"), text("state_code"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{format_address, normalize};
    use serde_json::json;

    #[test]
    fn detail_is_mapped_to_canonical_keys() {
        let property = json!({
            "address": {
                "line": "1600 Pennsylvania Ave NW",
                "city": "Washington",
                "state_code": "DC",
                "postal_code": "20500"
            },
            "list_price": 100000000,
            "estimate": { "estimate": 1 },
            "beds_max": 16,
            "baths": 35,
            "sqft": 55000,
            "year_built": 1800,
            "prop_type": "single_family",
            "tax_assessed_value": 90000000,
            "annual_tax": 0,
            "prop_status": "off_market",
            "mls": { "id": "DC-1" },
            "lot_sqft": 784080,
            "hoa_fee": null
        });

        let record = shape_detail(&property, &Value::Null);
        assert_eq!(record["price"], json!(100000000));
        assert_eq!(record["bedrooms"], json!(16));
        assert_eq!(record["mlsNumber"], json!("DC-1"));
        assert!(record.get("hoaFee").is_none());

        let p = normalize(&record);
        assert_eq!(p.address, "1600 Pennsylvania Ave NW, Washington, DC, 20500");
        assert_eq!(p.price, "$100,000,000");
        assert_eq!(p.living_area_sq_ft, "55,000");
        assert_eq!(p.year_built, "1800");
        assert_eq!(p.annual_property_tax, "$0");
        assert_eq!(p.lot_size_sq_ft, "784,080 sq ft");
        assert_eq!(p.hoa_fee_monthly, "N/A");
    }

    #[test]
    fn missing_address_falls_back_to_suggestion() {
        let property = json!({ "city": "Denver", "price": 1 });
        let suggestion = json!({
            "line": "10 Blake St",
            "city": "Ignored",
            "state_code": "CO",
            "postal_code": "80202"
        });

        let record = shape_detail(&property, &suggestion);
        assert_eq!(format_address(&record), "10 Blake St, Denver, CO, 80202");
    }

    #[test]
    fn string_address_passes_through() {
        let record = shape_listing(&json!({ "address": "5 Main St, Reno, NV" }));
        assert_eq!(record["address"], json!("5 Main St, Reno, NV"));
    }

    #[test]
    fn listing_without_any_address_has_no_address_key() {
        let record = shape_listing(&json!({ "price": 5 }));
        assert!(record.get("address").is_none());
        assert_eq!(format_address(&record), "Address not available");
    }

    #[test]
    fn listing_uses_the_short_table() {
        let record = shape_listing(&json!({
            "address": { "line": "2 Oak Ave", "city": "Tulsa", "state_code": "OK" },
            "list_price": 189000,
            "beds": 2,
            "baths": 1,
            "sqft": 900,
            "prop_status": "for_sale",
            "thumbnail": "http://img/1.jpg",
            "tax_amount": 999
        }));

        assert_eq!(record["status"], json!("for_sale"));
        assert!(record.get("propertyTax").is_none());
        assert!(record.get("thumbnail").is_none());
        assert_eq!(format_address(&record), "2 Oak Ave, Tulsa, OK");
    }

    #[test]
    fn property_ids_only_for_address_suggestions() {
        assert_eq!(
            suggestion_property_id(&json!({ "area_type": "address", "mpr_id": 123 })),
            Some("123".to_string())
        );
        assert_eq!(
            suggestion_property_id(&json!({ "_id": "addr:9", "mpr_id": "x" })),
            Some("addr:9".to_string())
        );
        assert_eq!(
            suggestion_property_id(&json!({ "area_type": "city", "city": "Miami" })),
            None
        );
        assert_eq!(suggestion_property_id(&json!({ "area_type": "address" })), None);
    }

    #[test]
    fn null_or_blank_id_does_not_mark_a_property() {
        assert_eq!(
            suggestion_property_id(&json!({ "area_type": "city", "_id": null, "mpr_id": 5 })),
            None
        );
        assert_eq!(
            suggestion_property_id(&json!({ "area_type": "city", "_id": "  ", "mpr_id": 5 })),
            None
        );
    }

    #[test]
    fn city_state_of_suggestion() {
        let (city, state) = suggestion_city_state(&json!({ "city": "Miami", "state_code": "FL" }));
        assert_eq!(city, "Miami");
        assert_eq!(state, "FL");
        assert_eq!(suggestion_city_state(&json!({})), (String::new(), String::new()));
    }
}
