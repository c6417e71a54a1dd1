use crate::client::HttpListingsService;
use crate::config::Config;
use crate::responses::error_response;
use crate::router::handle;
use crate::view::ViewController;
use anyhow::{Context, Result};
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;
mod view;


fn main() -> Result<()> {
    // 1️⃣ Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,schoolprop_listings=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2️⃣ Configuration + listings service client
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(backend = %config.backend_url, policy = ?config.fetch_policy, "configuration loaded");

    let service = HttpListingsService::new(&config.backend_url, config.http_timeout)
        .context("Failed to build listings client")?;
    let view = Arc::new(ViewController::new(service, config.fetch_policy));

    // Initial (empty) filter, same as any other filter change.
    view.refresh();

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &view) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            error_response(&err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
