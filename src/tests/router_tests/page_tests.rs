use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state, StubSource};
use serde_json::json;

#[test]
fn home_page_shows_search_box_and_examples() {
    let state = test_state(StubSource::default());
    let resp = handle(get("/"), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Welcome to REBA"));
    assert!(body.contains(r#"name="q""#));
    assert!(body.contains("/search?q=Homes+for+sale+in+Beverly+Hills"));
}

#[test]
fn property_search_renders_detail_card() {
    let state = test_state(StubSource {
        property: Some(json!({
            "address": "456 Ocean Drive, Miami Beach, FL 33139",
            "price": 1250000,
            "hoaFee": 300,
            "description": "Ocean views & more"
        })),
        ..StubSource::default()
    });

    let resp = handle(get("/search?q=show+me+456+Ocean+Drive"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("456 Ocean Drive, Miami Beach, FL 33139"));
    assert!(body.contains("$1,250,000"));
    assert!(body.contains("$300/mo"));
    assert!(body.contains("Ocean views &amp; more"));
    assert!(!body.contains("Unable to fetch live data"));
}

#[test]
fn description_section_is_omitted_when_absent() {
    let state = test_state(StubSource {
        property: Some(json!({ "address": "1 Plain Rd" })),
        ..StubSource::default()
    });

    let body = body_string(handle(get("/search?q=1+Plain+Rd"), &state).unwrap());
    assert!(body.contains("1 Plain Rd"));
    assert!(!body.contains("property-description"));
}

#[test]
fn outage_shows_warning_and_demo_property() {
    let state = test_state(StubSource::default());
    let body = body_string(handle(get("/search?q=123+Main+Street%2C+Miami"), &state).unwrap());

    assert!(body.contains("Unable to fetch live data: Network error: stubbed outage"));
    assert!(body.contains("123 Main Street, Miami, FL 33101"));
    assert!(body.contains("$450,000"));
}

#[test]
fn neighborhood_search_renders_summary_cards() {
    let state = test_state(StubSource {
        listings: Some(vec![
            json!({ "address": { "street": "1 A St", "city": "Reno" }, "sqft": 1200 }),
            json!({ "address": { "street": "2 B St", "city": "Reno" } }),
        ]),
        ..StubSource::default()
    });

    let body = body_string(handle(get("/search?q=homes+for+sale+in+Reno"), &state).unwrap());
    assert!(body.contains("1 A St, Reno"));
    assert!(body.contains("2 B St, Reno"));
    assert!(body.contains("1,200"));
    assert!(!body.contains("Year Built"));
}

#[test]
fn blank_search_is_bad_request() {
    let state = test_state(StubSource::default());
    let result = handle(get("/search?q=+++"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_page_is_not_found() {
    let state = test_state(StubSource::default());
    let result = handle(get("/nowhere"), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state(StubSource::default());
    let resp = handle(get("/static/main.css"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn error_page_carries_status() {
    let resp = crate::templates::html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}
