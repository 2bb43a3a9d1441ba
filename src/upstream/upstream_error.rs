use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("API key is invalid or expired. Please check your RapidAPI key.")]
    Unauthorized,
    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed provider response: {0}")]
    MalformedBody(String),
    #[error("RAPIDAPI_KEY environment variable not set")]
    MissingApiKey,
}

impl UpstreamError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, UpstreamError::Unauthorized | UpstreamError::MissingApiKey)
    }
}
