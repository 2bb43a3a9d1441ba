// upstream/realty.rs
use crate::config::Config;
use crate::domain::demo::{no_match_listings, no_match_property};
use crate::domain::RawRecord;
use crate::upstream::models::{
    shape_detail, shape_listing, suggestion_city_state, suggestion_property_id,
};
use crate::upstream::{PropertySource, UpstreamError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("reba/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an error body kept in `UpstreamError::Status`.
const MAX_ERROR_BODY: usize = 300;

/// Client for the Realty-in-US provider on RapidAPI.
pub struct RealtyClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    api_host: String,
}

impl RealtyClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.realty_base_url.trim_end_matches('/').to_string(),
            api_key: config.rapidapi_key.clone(),
            api_host: config.rapidapi_host.clone(),
        })
    }

    fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;
        let url = format!("{}{}", self.base_url, path);
        let start = Instant::now();

        let resp = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(params)
            .send()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        debug!(path, %status, elapsed = ?start.elapsed(), "provider responded");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(path, %status, body = %text, "provider rejected API key");
            return Err(UpstreamError::Unauthorized);
        }

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        serde_json::from_str(&text).map_err(|e| UpstreamError::MalformedBody(e.to_string()))
    }

    /// First autocomplete suggestion for free-text input, if any.
    fn first_suggestion(&self, input: &str) -> Result<Option<Value>, UpstreamError> {
        let body = self.get_json(
            "/locations/v2/auto-complete",
            &[("input", input.to_string()), ("limit", "1".to_string())],
        )?;

        Ok(body
            .pointer("/autocomplete/0")
            .filter(|v| v.is_object())
            .cloned())
    }
}

impl PropertySource for RealtyClient {
    fn lookup_property_by_address(&self, address: &str) -> Result<RawRecord, UpstreamError> {
        info!(address, "searching for property");

        let Some(suggestion) = self.first_suggestion(address)? else {
            info!(address, "no property found, returning demo data");
            return Ok(no_match_property(address));
        };

        let Some(property_id) = suggestion_property_id(&suggestion) else {
            info!(address, "suggestion is not a property, returning demo data");
            return Ok(no_match_property(address));
        };

        let detail = self.get_json("/properties/v2/detail", &[("property_id", property_id)])?;
        let property = detail.pointer("/properties/0").cloned().unwrap_or(detail);

        Ok(shape_detail(&property, &suggestion))
    }

    fn list_properties_by_location(
        &self,
        location: &str,
        limit: usize,
    ) -> Result<Vec<RawRecord>, UpstreamError> {
        info!(location, limit, "searching for properties");

        let Some(suggestion) = self.first_suggestion(location)? else {
            info!(location, "location not recognized, returning demo data");
            return Ok(no_match_listings(location));
        };

        let (city, state_code) = suggestion_city_state(&suggestion);
        let body = self.get_json(
            "/properties/v2/list-for-sale",
            &[
                ("city", city),
                ("state_code", state_code),
                ("offset", "0".to_string()),
                ("limit", limit.to_string()),
                ("sort", "newest".to_string()),
            ],
        )?;

        let listings: Vec<RawRecord> = body
            .get("properties")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().map(shape_listing).collect())
            .unwrap_or_default();

        info!(location, count = listings.len(), "properties list received");
        Ok(listings)
    }
}
