#![cfg(feature = "server")]

pub mod atmo;
pub mod config;
pub mod proxy;

#[cfg(test)]
mod fake_upstream;

use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

pub use atmo::ATMO;
pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Serves the proxy route next to the Dioxus app and its server functions.
pub async fn serve(app: fn() -> Element) -> Result<()> {
    let atmo = ATMO.clone();
    if atmo.config().api_token.is_none() {
        warn!("[server] ATMO_API_TOKEN not set; every air quality request will fail");
    }

    let address = dioxus::cli_config::fullstack_address_or_localhost();
    let serve_config = ServeConfig::new().map_err(|e| anyhow!("loading index.html: {e:?}"))?;
    let router = axum::Router::new()
        .merge(proxy::router(atmo))
        .serve_dioxus_application(serve_config, app);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!("[server] listening on http://{address}");
    axum::serve(listener, router.into_make_service())
        .await
        .context("serving")?;
    Ok(())
}
