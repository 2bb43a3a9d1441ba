use crate::search::{SearchOutcome, SearchResults};
use crate::templates::components::{property_card, summary_card, warning_banner};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn results_page(raw_query: &str, outcome: &SearchOutcome) -> Markup {
    desktop_layout(
        raw_query,
        raw_query,
        html! {
            @if let Some(warning) = &outcome.warning {
                (warning_banner(warning))
            }

            @match &outcome.results {
                SearchResults::Property(property) => {
                    (property_card(property))
                }
                SearchResults::Neighborhood(listings) => {
                    @if !listings.is_empty() {
                        p class="results-count" {
                            (listings.len()) " properties near "
                            strong { (outcome.query.target()) }
                        }
                    }
                    @for listing in listings {
                        (summary_card(listing))
                    }
                }
            }
        },
    )
}
