use crate::config::Config;
use crate::router::{handle, AppState};
use crate::upstream::RealtyClient;
use astra::Server;
use tracing::{error, info};

mod api;
mod config;
mod domain;
mod errors;
mod logging;
mod query;
mod responses;
mod router;
mod search;
mod templates;
mod upstream;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load .env and start logging
    dotenv::dotenv().ok();
    logging::init_logging();

    // 2️⃣ Read configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Build the upstream client
    let source = match RealtyClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Upstream client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    info!(
        api_key_configured = config.rapidapi_key.is_some(),
        "REBA server starting at http://{addr}"
    );

    // 4️⃣ Serve requests, passing shared state into closure
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = AppState::new(config, source);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
