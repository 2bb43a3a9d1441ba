//! Free-text search classification.
//!
//! Decides whether a query asks about one property or an area, and pulls
//! out the address or location. Rules are checked in a fixed order and the
//! first match wins; a query that matches nothing is searched as an address.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParsedQuery {
    #[serde(rename = "property")]
    PropertySearch { address: String },
    #[serde(rename = "neighborhood")]
    NeighborhoodSearch { location: String },
}

/// Phrases that mark an area search. Checked against the lowercased query.
const NEIGHBORHOOD_PHRASES: &[&str] = &[
    "homes for sale",
    "houses for sale",
    "properties in",
    "real estate in",
];

/// One address-extraction rule: the pattern and which capture holds the address.
struct AddressRule {
    pattern: Regex,
    group: usize,
}

// ============================================================================
// Regex Patterns
// ============================================================================

static LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:in|near)\s+([^,]+(?:,\s*[^,]+)?)").expect("Invalid regex")
});

static ADDRESS_RULES: LazyLock<Vec<AddressRule>> = LazyLock::new(|| {
    vec![
        // House number, street, then up to two clauses for city and state.
        AddressRule {
            pattern: Regex::new(r"\d+\s+[^,]+(?:,\s*[^,]+)?(?:,\s*[^,]+)?")
                .expect("Invalid regex"),
            group: 0,
        },
        AddressRule {
            pattern: Regex::new(r"(?i)show\s+me\s+(.+)").expect("Invalid regex"),
            group: 1,
        },
        AddressRule {
            pattern: Regex::new(
                r"(?i)property\s+(?:information|info|details)\s+(?:for|about|on)\s+(.+)",
            )
            .expect("Invalid regex"),
            group: 1,
        },
        AddressRule {
            pattern: Regex::new(
                r"(?i)what\s+(?:is|are)\s+(?:the\s+)?(?:details|information)\s+(?:for|about|on)\s+(.+)",
            )
            .expect("Invalid regex"),
            group: 1,
        },
    ]
});

static LEADING_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:show\s+me|property\s+(?:information|info|details)\s+(?:for|about|on)|what\s+(?:is|are)\s+(?:the\s+)?(?:details|information)\s+(?:for|about|on))\s+",
    )
    .expect("Invalid regex")
});

/// Classify a search query. Never fails.
///
/// Callers are expected to reject empty input before calling.
pub fn classify(query: &str) -> ParsedQuery {
    let lower = query.to_lowercase();

    if NEIGHBORHOOD_PHRASES.iter().any(|p| lower.contains(p)) {
        if let Some(location) = extract_location(query) {
            return ParsedQuery::NeighborhoodSearch { location };
        }
    }

    if let Some(address) = extract_address(query) {
        return ParsedQuery::PropertySearch { address };
    }

    ParsedQuery::PropertySearch {
        address: query.trim().to_string(),
    }
}

fn extract_location(query: &str) -> Option<String> {
    let caps = LOCATION_PATTERN.captures(query)?;
    let location = caps.get(1)?.as_str().trim();
    (!location.is_empty()).then(|| location.to_string())
}

fn extract_address(query: &str) -> Option<String> {
    ADDRESS_RULES.iter().find_map(|rule| {
        let caps = rule.pattern.captures(query)?;
        let captured = caps.get(rule.group)?.as_str();
        let address = LEADING_PHRASE.replace(captured, "").trim().to_string();
        (!address.is_empty()).then_some(address)
    })
}

impl ParsedQuery {
    /// The address or location being searched.
    pub fn target(&self) -> &str {
        match self {
            ParsedQuery::PropertySearch { address } => address,
            ParsedQuery::NeighborhoodSearch { location } => location,
        }
    }
}
