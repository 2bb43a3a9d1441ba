use crate::config::Config;
use crate::domain::RawRecord;
use crate::router::AppState;
use crate::upstream::{PropertySource, UpstreamError};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// In-memory stand-in for the provider. `None` means the call fails.
#[derive(Default)]
pub struct StubSource {
    pub property: Option<RawRecord>,
    pub listings: Option<Vec<RawRecord>>,
    /// Fail with an auth error instead of a network error.
    pub unauthorized: bool,
}

impl StubSource {
    fn failure(&self) -> UpstreamError {
        if self.unauthorized {
            UpstreamError::Unauthorized
        } else {
            UpstreamError::Network("stubbed outage".into())
        }
    }
}

impl PropertySource for StubSource {
    fn lookup_property_by_address(&self, _address: &str) -> Result<RawRecord, UpstreamError> {
        self.property.clone().ok_or_else(|| self.failure())
    }

    fn list_properties_by_location(
        &self,
        _location: &str,
        limit: usize,
    ) -> Result<Vec<RawRecord>, UpstreamError> {
        self.listings
            .as_ref()
            .map(|all| all.iter().take(limit).cloned().collect())
            .ok_or_else(|| self.failure())
    }
}

pub fn test_state(source: StubSource) -> AppState {
    AppState::new(Config::default(), source)
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri, None)
}

pub fn request(method: Method, uri: &str, origin: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(origin) = origin {
        builder = builder.header("Origin", origin);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).expect("response body is JSON")
}
