use astra::Server;
use nhood_pulse::cache::QueryCache;
use nhood_pulse::config::AppConfig;
use nhood_pulse::fetcher::{Fetcher, OpenDataClient};
use nhood_pulse::logging;
use nhood_pulse::responses::error_to_response;
use nhood_pulse::router::handle;
use std::sync::Arc;

fn main() {
    // 1️⃣ Read settings from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    logging::init(config.log_level.as_deref());

    // 2️⃣ Build the open-data client and the shared cache
    let client = match OpenDataClient::new(
        &config.api_base,
        config.http_timeout,
        config.app_token.clone(),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Could not build the open-data client: {e}");
            std::process::exit(1);
        }
    };

    let fetcher = Fetcher::new(client, config.page_size);
    let cache = Arc::new(QueryCache::new(fetcher, config.cache_policy()));

    // 3️⃣ Start the server
    tracing::info!(
        addr = %config.bind_addr,
        api_base = %config.api_base,
        workers = config.max_workers,
        "starting server"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, sharing the cache across workers
    let result = server.serve(move |req, _info| match handle(req, cache.as_ref()) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
