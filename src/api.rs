// api.rs
//
// JSON endpoints under /api. Every handler answers with JSON, including errors.

use crate::domain::{normalize, normalize_list, PropertySummary};
use crate::errors::ServerError;
use crate::responses::cors::preflight_response;
use crate::responses::{json_error, json_response, ResultResp};
use crate::router::AppState;
use crate::search::run_search;
use crate::upstream::UpstreamError;
use serde::Serialize;
use std::collections::HashMap;
use tracing::error;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct PropertyList {
    properties: Vec<PropertySummary>,
}

pub fn handle(
    method: &str,
    path: &str,
    params: &HashMap<String, String>,
    state: &AppState,
) -> ResultResp {
    match (method, path) {
        ("OPTIONS", _) => preflight_response(),
        ("GET", "/api/health") => json_response(
            200,
            &Health {
                status: "OK",
                message: "REBA API is running",
            },
        ),
        ("GET", "/api/property") => property(params, state),
        ("GET", "/api/properties/list") => property_list(params, state),
        ("GET", "/api/search") => search(params, state),
        _ => Err(ServerError::NotFound),
    }
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn property(params: &HashMap<String, String>, state: &AppState) -> ResultResp {
    let Some(address) = required(params, "address") else {
        return json_error(400, "Address is required", None);
    };

    match state.source.lookup_property_by_address(address) {
        Ok(record) => json_response(200, &normalize(&record)),
        Err(e) => upstream_failure(&e, "Failed to fetch property data"),
    }
}

fn property_list(params: &HashMap<String, String>, state: &AppState) -> ResultResp {
    let Some(location) = required(params, "location") else {
        return json_error(400, "Location is required", None);
    };

    let limit = match required(params, "limit") {
        None => state.config.list_limit,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return json_error(400, "Limit must be a positive integer", None),
        },
    };

    match state.source.list_properties_by_location(location, limit) {
        Ok(records) => json_response(
            200,
            &PropertyList {
                properties: normalize_list(&records),
            },
        ),
        Err(e) => upstream_failure(&e, "Failed to fetch properties list"),
    }
}

fn search(params: &HashMap<String, String>, state: &AppState) -> ResultResp {
    let Some(query) = required(params, "q") else {
        return json_error(400, "Query is required", None);
    };

    json_response(200, &run_search(state.source.as_ref(), query, state.config.list_limit))
}

fn upstream_failure(err: &UpstreamError, context: &str) -> ResultResp {
    error!(error = %err, "{context}");

    if err.is_auth_failure() {
        json_error(403, &err.to_string(), None)
    } else {
        json_error(502, context, Some(err.to_string()))
    }
}
