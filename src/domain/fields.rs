// domain/fields.rs
//
// Ordered alias lists per canonical field. The first populated alias wins.
// Both the detail card and the listing card read from these constants.

/// How a resolved value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Year,
    Currency,
    /// Number followed by `" sq ft"`.
    Area,
    /// Currency followed by `"/mo"`.
    MonthlyCurrency,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
}

pub const PRICE: FieldSpec = FieldSpec {
    name: "price",
    aliases: &["price", "listPrice", "estimatedValue", "zestimate"],
    kind: FieldKind::Currency,
};

pub const BEDROOMS: FieldSpec = FieldSpec {
    name: "bedrooms",
    aliases: &["bedrooms", "beds", "bedroomCount"],
    kind: FieldKind::Number,
};

pub const BATHROOMS: FieldSpec = FieldSpec {
    name: "bathrooms",
    aliases: &["bathrooms", "baths", "bathroomCount"],
    kind: FieldKind::Number,
};

pub const LIVING_AREA: FieldSpec = FieldSpec {
    name: "livingAreaSqFt",
    aliases: &["livingArea", "sqft", "squareFeet", "finishedSqFt"],
    kind: FieldKind::Number,
};

pub const YEAR_BUILT: FieldSpec = FieldSpec {
    name: "yearBuilt",
    aliases: &["yearBuilt", "year_built"],
    kind: FieldKind::Year,
};

pub const PROPERTY_TYPE: FieldSpec = FieldSpec {
    name: "propertyType",
    aliases: &["propertyType", "homeType", "property_type"],
    kind: FieldKind::Text,
};

pub const TAX_ASSESSMENT: FieldSpec = FieldSpec {
    name: "taxAssessment",
    aliases: &["taxAssessment", "taxAssessedValue", "tax_assessment"],
    kind: FieldKind::Currency,
};

pub const ANNUAL_PROPERTY_TAX: FieldSpec = FieldSpec {
    name: "annualPropertyTax",
    aliases: &["propertyTax", "annualTax", "property_tax", "taxAnnualAmount"],
    kind: FieldKind::Currency,
};

pub const LOT_SIZE: FieldSpec = FieldSpec {
    name: "lotSizeSqFt",
    aliases: &["lotSize", "lot_size", "lotAreaValue"],
    kind: FieldKind::Area,
};

pub const STATUS: FieldSpec = FieldSpec {
    name: "status",
    aliases: &["status", "listingStatus", "homeStatus"],
    kind: FieldKind::Text,
};

pub const MLS_NUMBER: FieldSpec = FieldSpec {
    name: "mlsNumber",
    aliases: &["mlsNumber", "mls", "listing_id"],
    kind: FieldKind::Text,
};

pub const DAYS_ON_MARKET: FieldSpec = FieldSpec {
    name: "daysOnMarket",
    aliases: &["daysOnMarket", "days_on_market", "timeOnZillow"],
    kind: FieldKind::Number,
};

pub const HOA_FEE: FieldSpec = FieldSpec {
    name: "hoaFeeMonthly",
    aliases: &["hoaFee"],
    kind: FieldKind::MonthlyCurrency,
};

pub const DESCRIPTION_ALIASES: &[&str] = &["description"];

pub const STREET_ALIASES: &[&str] = &["streetAddress", "street"];
pub const CITY_ALIASES: &[&str] = &["city"];
pub const STATE_ALIASES: &[&str] = &["state"];
pub const ZIP_ALIASES: &[&str] = &["zipcode", "zip"];
