use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic (routing, bad input).
/// Upstream failures never reach here on the search path: they are
/// recovered with demo data before rendering.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }

    /// The human-readable message without the status prefix.
    pub fn message(&self) -> String {
        match self {
            ServerError::BadRequest(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
