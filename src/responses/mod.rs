pub mod cors;
pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use errors::{json_error, json_error_response};
pub use html::{css_response, html_response};
pub use json::json_response;
