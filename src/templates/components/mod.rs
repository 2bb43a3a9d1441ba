use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod search_box;

pub use card::{property_card, summary_card};
pub use error::html_error_response;
pub use search_box::search_box;

/// Non-fatal notice shown above results.
pub fn warning_banner(message: &str) -> Markup {
    html! {
        div class="error-message" role="alert" { (message) }
    }
}
