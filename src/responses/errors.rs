use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

/// Error body returned by every `/api` route.
#[derive(Debug, Serialize)]
pub struct ErrorPayload<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub fn json_error(status: u16, error: &str, details: Option<String>) -> ResultResp {
    json_response(status, &ErrorPayload { error, details })
}

/// Convert a ServerError into a JSON error response
pub fn json_error_response(err: ServerError) -> Response {
    json_error(err.status(), &err.message(), None).unwrap_or_else(|_| {
        ResponseBuilder::new()
            .status(500)
            .body(Body::from("Internal Server Error"))
            .unwrap_or_else(|_| Response::new(Body::empty()))
    })
}
