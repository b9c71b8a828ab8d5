//! `Cloud City Sluggers` Website
//!
//! Public website for the Cloud City Sluggers - your hometown baseball team.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "sluggers_site=debug,tower_http=debug".parse().expect("valid filter")))
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Cloud City Sluggers website server");

    let config = sluggers_site::SiteConfig::from_env();

    if let Err(err) = sluggers_site::run(config).await {
        tracing::error!("server exited with error: {err}");
        std::process::exit(1);
    }
}
