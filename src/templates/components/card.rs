use crate::domain::{CanonicalProperty, PropertySummary};
use maud::{html, Markup};

fn detail_item(label: &str, value: &str) -> Markup {
    html! {
        div class="detail-item" {
            div class="detail-label" { (label) }
            div class="detail-value" { (value) }
        }
    }
}

fn card_header(address: &str, price: &str) -> Markup {
    html! {
        div class="property-header" {
            h2 class="property-address" { (address) }
            div class="property-price" { (price) }
        }
    }
}

/// Full detail card for a single property lookup.
pub fn property_card(p: &CanonicalProperty) -> Markup {
    html! {
        div class="property-card" {
            (card_header(&p.address, &p.price))

            div class="property-details" {
                (detail_item("Bedrooms", &p.bedrooms))
                (detail_item("Bathrooms", &p.bathrooms))
                (detail_item("Square Feet", &p.living_area_sq_ft))
                (detail_item("Year Built", &p.year_built))
                (detail_item("Property Type", &p.property_type))
                (detail_item("Tax Assessment", &p.tax_assessment))
                (detail_item("Annual Taxes", &p.annual_property_tax))
                (detail_item("Lot Size", &p.lot_size_sq_ft))
                (detail_item("Status", &p.status))
                (detail_item("MLS #", &p.mls_number))
                (detail_item("Days on Market", &p.days_on_market))
                (detail_item("HOA Fees", &p.hoa_fee_monthly))
            }

            @if let Some(description) = &p.description {
                div class="property-description" {
                    h3 { "Description" }
                    p { (description) }
                }
            }
        }
    }
}

/// Compact card used in neighborhood listings.
pub fn summary_card(p: &PropertySummary) -> Markup {
    html! {
        div class="property-card" {
            (card_header(&p.address, &p.price))

            div class="property-details" {
                (detail_item("Bedrooms", &p.bedrooms))
                (detail_item("Bathrooms", &p.bathrooms))
                (detail_item("Square Feet", &p.living_area_sq_ft))
                (detail_item("Status", &p.status))
            }
        }
    }
}
