// domain/property.rs

use serde::Serialize;

/// An untyped record as returned by the upstream provider. No shape is assumed.
pub type RawRecord = serde_json::Value;

/// Shown for any field without a usable value.
pub const PLACEHOLDER: &str = "N/A";
pub const ADDRESS_PLACEHOLDER: &str = "Address not available";

/// A property normalized into display-ready text.
/// Every field except `description` always carries a value, real or placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProperty {
    pub address: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub living_area_sq_ft: String,
    pub year_built: String,
    pub property_type: String,
    pub tax_assessment: String,
    pub annual_property_tax: String,
    pub lot_size_sq_ft: String,
    pub status: String,
    pub mls_number: String,
    pub days_on_market: String,
    pub hoa_fee_monthly: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The reduced card used for neighborhood listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub address: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub living_area_sq_ft: String,
    pub status: String,
}
