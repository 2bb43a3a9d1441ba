// templates/pages/home.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};
use url::form_urlencoded::byte_serialize;

const EXAMPLE_QUERIES: &[&str] = &[
    "123 Main Street, Miami",
    "Homes for sale in Beverly Hills",
    "Show me properties in Manhattan",
];

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        "",
        html! {
            div class="welcome" {
                h2 { "Welcome to REBA" }
                p { "Your AI-powered real estate assistant" }
                p class="welcome-hint" { "Try searching for:" }
                ul {
                    @for example in EXAMPLE_QUERIES {
                        li {
                            a href={ "/search?q=" (byte_serialize(example.as_bytes()).collect::<String>()) } {
                                "\u{201c}" (example) "\u{201d}"
                            }
                        }
                    }
                }
            }
        },
    )
}
