// domain/normalize.rs

//! Tolerant normalization of provider records.
//!
//! Provider responses come in several shapes: nested or flat addresses,
//! camelCase or snake_case keys, numbers as numbers or as decorated strings.
//! Everything here resolves a field through its ordered alias list and
//! degrades to a placeholder rather than failing.

use crate::domain::fields::{self, FieldKind, FieldSpec};
use crate::domain::format::{
    format_currency, format_number, format_plain_integer, parse_number, value_as_text,
};
use crate::domain::property::{
    CanonicalProperty, PropertySummary, RawRecord, ADDRESS_PLACEHOLDER, PLACEHOLDER,
};
use serde_json::{Map, Value};
use tracing::debug;

/// Follows a dotted path (`"estimate.estimate"`) through nested objects.
pub fn lookup_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |current, key| current.as_object()?.get(key))
}

/// Returns the first alias whose value is present, non-null and not a blank string.
pub fn resolve_alias<'a>(record: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|alias| lookup_path(record, alias))
        .find(|value| is_populated(value))
}

fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Resolves one field to display text, or the placeholder.
///
/// A value that is present but cannot be read as the field's kind is
/// treated as absent. Resolution does not move on to the next alias.
pub fn resolve_field(record: &RawRecord, spec: &FieldSpec) -> String {
    let Some(value) = resolve_alias(record, spec.aliases) else {
        return PLACEHOLDER.to_string();
    };

    let rendered = match spec.kind {
        FieldKind::Text => value_as_text(value),
        FieldKind::Number => parse_number(value).map(format_number),
        FieldKind::Year => parse_number(value).map(format_plain_integer),
        FieldKind::Currency => parse_number(value).map(format_currency),
        FieldKind::Area => parse_number(value).map(|n| format!("{} sq ft", format_number(n))),
        FieldKind::MonthlyCurrency => parse_number(value).map(|n| format!("{}/mo", format_currency(n))),
    };

    rendered.unwrap_or_else(|| {
        debug!(field = spec.name, ?value, "unparsable field value, using placeholder");
        PLACEHOLDER.to_string()
    })
}

/// Builds a single address line from whichever shape the record uses.
///
/// Shapes, first match wins: a string at `address` (returned verbatim),
/// an object at `address`, then street/city/state/zip keys at the top level.
pub fn format_address(record: &RawRecord) -> String {
    match record.get("address") {
        Some(Value::String(line)) => line.clone(),
        Some(nested @ Value::Object(_)) => join_address_parts(nested),
        _ if resolve_alias(record, fields::STREET_ALIASES).is_some() => {
            join_address_parts(record)
        }
        _ => ADDRESS_PLACEHOLDER.to_string(),
    }
}

fn join_address_parts(source: &Value) -> String {
    let parts: Vec<String> = [
        fields::STREET_ALIASES,
        fields::CITY_ALIASES,
        fields::STATE_ALIASES,
        fields::ZIP_ALIASES,
    ]
    .iter()
    .filter_map(|aliases| resolve_alias(source, aliases))
    .filter_map(value_as_text)
    .map(|part| part.trim().to_string())
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        ADDRESS_PLACEHOLDER.to_string()
    } else {
        parts.join(", ")
    }
}

pub fn normalize(record: &RawRecord) -> CanonicalProperty {
    CanonicalProperty {
        address: format_address(record),
        price: resolve_field(record, &fields::PRICE),
        bedrooms: resolve_field(record, &fields::BEDROOMS),
        bathrooms: resolve_field(record, &fields::BATHROOMS),
        living_area_sq_ft: resolve_field(record, &fields::LIVING_AREA),
        year_built: resolve_field(record, &fields::YEAR_BUILT),
        property_type: resolve_field(record, &fields::PROPERTY_TYPE),
        tax_assessment: resolve_field(record, &fields::TAX_ASSESSMENT),
        annual_property_tax: resolve_field(record, &fields::ANNUAL_PROPERTY_TAX),
        lot_size_sq_ft: resolve_field(record, &fields::LOT_SIZE),
        status: resolve_field(record, &fields::STATUS),
        mls_number: resolve_field(record, &fields::MLS_NUMBER),
        days_on_market: resolve_field(record, &fields::DAYS_ON_MARKET),
        hoa_fee_monthly: resolve_field(record, &fields::HOA_FEE),
        description: resolve_alias(record, fields::DESCRIPTION_ALIASES).and_then(value_as_text),
    }
}

pub fn normalize_summary(record: &RawRecord) -> PropertySummary {
    PropertySummary {
        address: format_address(record),
        price: resolve_field(record, &fields::PRICE),
        bedrooms: resolve_field(record, &fields::BEDROOMS),
        bathrooms: resolve_field(record, &fields::BATHROOMS),
        living_area_sq_ft: resolve_field(record, &fields::LIVING_AREA),
        status: resolve_field(record, &fields::STATUS),
    }
}

pub fn normalize_list(records: &[RawRecord]) -> Vec<PropertySummary> {
    records.iter().map(normalize_summary).collect()
}

/// Copies fields from a provider record into a new record under canonical
/// alias keys. Each entry is `(target key, provider aliases in priority order)`.
/// Unresolved entries are left out so the normalizer sees them as absent.
pub fn reshape(record: &Value, table: &[(&str, &[&str])]) -> Map<String, Value> {
    table
        .iter()
        .filter_map(|(target, aliases)| {
            resolve_alias(record, aliases).map(|v| (target.to_string(), v.clone()))
        })
        .collect()
}
