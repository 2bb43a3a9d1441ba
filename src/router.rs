use crate::api;
use crate::config::Config;
use crate::errors::ServerError;
use crate::responses::cors::apply_cors;
use crate::responses::{css_response, html_response, json_error_response, ResultResp};
use crate::search::run_search;
use crate::templates::pages;
use crate::upstream::PropertySource;
use astra::Request;
use std::collections::HashMap;
use tracing::debug;

const STYLESHEET: &str = include_str!("../static/main.css");

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub config: Config,
    pub source: Box<dyn PropertySource>,
}

impl AppState {
    pub fn new(config: Config, source: impl PropertySource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    debug!(method, path, "request");

    // API routes always answer in JSON, errors included.
    if path.starts_with("/api/") {
        let origin = req.headers().get("Origin").and_then(|v| v.to_str().ok());
        let mut resp = api::handle(method, path, &params, state).unwrap_or_else(json_error_response);
        apply_cors(&mut resp, origin, &state.config.allowed_origins);
        return Ok(resp);
    }

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/search") => search_page(&params, state),
        ("GET", "/static/main.css") => css_response(STYLESHEET),
        _ => Err(ServerError::NotFound),
    }
}

fn search_page(params: &HashMap<String, String>, state: &AppState) -> ResultResp {
    let query = params.get("q").map(|q| q.trim()).unwrap_or_default();
    if query.is_empty() {
        return Err(ServerError::BadRequest("Search query is required".into()));
    }

    let outcome = run_search(state.source.as_ref(), query, state.config.list_limit);
    html_response(pages::results_page(query, &outcome))
}

/// Decoded query-string parameters. Later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
