// tests/router_tests/api_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_json, get, request, test_state, StubSource};
use http::Method;
use serde_json::json;

fn live_source() -> StubSource {
    StubSource {
        property: Some(json!({
            "address": { "streetAddress": "9 Elm St", "city": "Salem", "state": "MA" },
            "listPrice": "$512,000",
            "beds": 3
        })),
        listings: Some(vec![
            json!({ "address": "1 A St", "price": 100000, "status": "for_sale" }),
            json!({ "address": "2 B St", "price": 200000 }),
            json!({ "address": "3 C St", "price": 300000 }),
        ]),
        unauthorized: false,
    }
}

#[test]
fn health_reports_ok() {
    let state = test_state(StubSource::default());
    let resp = handle(get("/api/health"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        body_json(resp),
        json!({ "status": "OK", "message": "REBA API is running" })
    );
}

#[test]
fn property_lookup_returns_canonical_record() {
    let state = test_state(live_source());
    let resp = handle(get("/api/property?address=9%20Elm%20St"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body = body_json(resp);
    assert_eq!(body["address"], "9 Elm St, Salem, MA");
    assert_eq!(body["price"], "$512,000");
    assert_eq!(body["bedrooms"], "3");
    assert_eq!(body["yearBuilt"], "N/A");
    assert!(body.get("description").is_none());
}

#[test]
fn property_lookup_requires_address() {
    let state = test_state(live_source());

    for uri in ["/api/property", "/api/property?address=%20%20"] {
        let resp = handle(get(uri), &state).unwrap();
        assert_eq!(resp.status(), 400);
        assert_eq!(body_json(resp), json!({ "error": "Address is required" }));
    }
}

#[test]
fn upstream_outage_is_reported_as_bad_gateway() {
    let state = test_state(StubSource::default());
    let resp = handle(get("/api/property?address=1+Main+St"), &state).unwrap();

    assert_eq!(resp.status(), 502);
    let body = body_json(resp);
    assert_eq!(body["error"], "Failed to fetch property data");
    assert!(body["details"].as_str().unwrap().contains("stubbed outage"));
}

#[test]
fn rejected_api_key_is_forbidden() {
    let state = test_state(StubSource {
        unauthorized: true,
        ..StubSource::default()
    });
    let resp = handle(get("/api/properties/list?location=Miami"), &state).unwrap();

    assert_eq!(resp.status(), 403);
    assert!(body_json(resp)["error"]
        .as_str()
        .unwrap()
        .contains("API key is invalid or expired"));
}

#[test]
fn list_respects_limit_and_uses_summary_fields() {
    let state = test_state(live_source());
    let resp = handle(get("/api/properties/list?location=Salem&limit=2"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_json(resp);
    let properties = body["properties"].as_array().unwrap();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0]["price"], "$100,000");
    assert_eq!(properties[0]["status"], "for_sale");
    assert_eq!(properties[1]["status"], "N/A");
    assert!(properties[0].get("yearBuilt").is_none());
}

#[test]
fn list_validates_parameters() {
    let state = test_state(live_source());

    let resp = handle(get("/api/properties/list"), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["error"], "Location is required");

    let resp = handle(get("/api/properties/list?location=Salem&limit=0"), &state).unwrap();
    assert_eq!(resp.status(), 400);

    let resp = handle(get("/api/properties/list?location=Salem&limit=ten"), &state).unwrap();
    assert_eq!(resp.status(), 400);
}

#[test]
fn search_endpoint_falls_back_to_demo_data() {
    let state = test_state(StubSource::default());
    let resp = handle(
        get("/api/search?q=Homes+for+sale+in+Beverly+Hills"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_json(resp);
    assert_eq!(
        body["query"],
        json!({ "type": "neighborhood", "location": "Beverly Hills" })
    );
    assert_eq!(body["results"]["kind"], "neighborhood");
    assert_eq!(body["results"]["data"].as_array().unwrap().len(), 2);
    assert!(body["warning"]
        .as_str()
        .unwrap()
        .starts_with("Unable to fetch live data: "));
}

#[test]
fn unknown_api_route_is_json_404() {
    let state = test_state(StubSource::default());
    let resp = handle(get("/api/nope"), &state).unwrap();

    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp), json!({ "error": "Not Found" }));
}

#[test]
fn cors_headers_only_for_allowed_origins() {
    let state = test_state(StubSource::default());

    let resp = handle(
        request(Method::GET, "/api/health", Some("https://rebaapp.com")),
        &state,
    )
    .unwrap();
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "https://rebaapp.com"
    );
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Credentials").unwrap(),
        "true"
    );

    let resp = handle(
        request(Method::GET, "/api/health", Some("https://evil.example")),
        &state,
    )
    .unwrap();
    assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
}

#[test]
fn preflight_is_answered() {
    let state = test_state(StubSource::default());
    let resp = handle(
        request(
            Method::OPTIONS,
            "/api/property",
            Some("http://localhost:3000"),
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 204);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Methods").unwrap(),
        "GET, OPTIONS"
    );
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "http://localhost:3000"
    );
}
