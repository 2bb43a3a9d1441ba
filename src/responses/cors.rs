// responses/cors.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, VARY,
};
use http::HeaderValue;

/// Adds CORS headers when `origin` is one of the allowed origins.
/// Other origins get no CORS headers, so browsers block the response.
pub fn apply_cors(resp: &mut Response, origin: Option<&str>, allowed: &[String]) {
    let Some(origin) = origin.filter(|o| allowed.iter().any(|a| a == o)) else {
        return;
    };
    let Ok(value) = HeaderValue::from_str(origin) else {
        return;
    };

    let headers = resp.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.append(VARY, HeaderValue::from_static("Origin"));
}

/// Answer to an `OPTIONS` preflight. Origin headers are added by `apply_cors`.
pub fn preflight_response() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .header(ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS")
        .header(ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
