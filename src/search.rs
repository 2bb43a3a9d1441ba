// search.rs

//! One user search, end to end: classify, fetch, fall back, normalize.

use crate::domain::demo::{demo_property, demo_records};
use crate::domain::{normalize, normalize_list, CanonicalProperty, PropertySummary};
use crate::query::{classify, ParsedQuery};
use crate::upstream::{PropertySource, UpstreamError};
use serde::Serialize;
use tracing::warn;

pub const NO_RESULTS_MESSAGE: &str = "No properties found in this area";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum SearchResults {
    Property(CanonicalProperty),
    Neighborhood(Vec<PropertySummary>),
}

/// Everything the display layer needs for one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub query: ParsedQuery,
    pub results: SearchResults,
    /// Non-fatal notice shown above the results, e.g. when demo data is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The warning shown when live data could not be fetched.
pub fn fallback_warning(err: &UpstreamError) -> String {
    format!("Unable to fetch live data: {err}. Showing demo data instead.")
}

/// Runs a search. Never fails: upstream errors are replaced by demo data
/// and reported through `warning`.
///
/// `query` must already be trimmed and non-empty.
pub fn run_search(source: &dyn PropertySource, query: &str, limit: usize) -> SearchOutcome {
    let parsed = classify(query);

    let (results, warning) = match &parsed {
        ParsedQuery::PropertySearch { address } => {
            let (record, warning) = match source.lookup_property_by_address(address) {
                Ok(record) => (record, None),
                Err(e) => {
                    warn!(address = %address, error = %e, "property lookup failed, using demo data");
                    (demo_property(), Some(fallback_warning(&e)))
                }
            };
            (SearchResults::Property(normalize(&record)), warning)
        }
        ParsedQuery::NeighborhoodSearch { location } => {
            let (records, warning) = match source.list_properties_by_location(location, limit) {
                Ok(records) => (records, None),
                Err(e) => {
                    warn!(location = %location, error = %e, "listing lookup failed, using demo data");
                    (demo_records(), Some(fallback_warning(&e)))
                }
            };
            let summaries = normalize_list(&records);
            let warning = match warning {
                None if summaries.is_empty() => Some(NO_RESULTS_MESSAGE.to_string()),
                other => other,
            };
            (SearchResults::Neighborhood(summaries), warning)
        }
    };

    SearchOutcome {
        query: parsed,
        results,
        warning,
    }
}
