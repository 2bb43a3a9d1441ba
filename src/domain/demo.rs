// domain/demo.rs
//
// Fixed records shown when live data is unavailable.

use crate::domain::property::RawRecord;
use serde_json::json;

/// The two demo properties. A property search shows the first one,
/// a neighborhood search shows both.
pub fn demo_records() -> Vec<RawRecord> {
    vec![
        json!({
            "address": "123 Main Street, Miami, FL 33101",
            "price": 450000,
            "bedrooms": 3,
            "bathrooms": 2,
            "livingArea": 1850,
            "yearBuilt": 2018,
            "propertyType": "Single Family",
            "taxAssessment": 425000,
            "propertyTax": 5200,
            "status": "For Sale",
            "description": "Beautiful modern home with updated kitchen and spacious backyard."
        }),
        json!({
            "address": "456 Ocean Drive, Miami Beach, FL 33139",
            "price": 1250000,
            "bedrooms": 4,
            "bathrooms": 3,
            "livingArea": 2400,
            "yearBuilt": 2020,
            "propertyType": "Condo",
            "taxAssessment": 1150000,
            "propertyTax": 14500,
            "status": "For Sale",
            "description": "Luxury oceanfront condo with stunning views and premium amenities."
        }),
    ]
}

pub fn demo_property() -> RawRecord {
    demo_records().swap_remove(0)
}

/// Returned when the provider answered but had no property for the address.
pub fn no_match_property(address: &str) -> RawRecord {
    json!({
        "address": address,
        "price": 450000,
        "bedrooms": 3,
        "bathrooms": 2,
        "livingArea": 1850,
        "yearBuilt": 2018,
        "propertyType": "Single Family",
        "taxAssessment": 425000,
        "propertyTax": 5200,
        "status": "Demo Data",
        "description": "Demo property - API connection established but no matching property found."
    })
}

/// Returned when the provider could not resolve the location at all.
pub fn no_match_listings(location: &str) -> Vec<RawRecord> {
    vec![json!({
        "address": format!("123 Main St, {location}"),
        "price": 450000,
        "bedrooms": 3,
        "bathrooms": 2,
        "livingArea": 1850,
        "status": "Demo Data"
    })]
}
