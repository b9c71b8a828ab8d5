//! `Cloud City Sluggers` Website Library
//!
//! Core library for the Cloud City Sluggers team website.

pub mod config;
pub mod db;
#[cfg(debug_assertions)]
pub mod dev_tools;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;
pub mod tokens;

#[cfg(test)]
mod tests;

use tokio::net::TcpListener;
use tracing::info;

pub use crate::config::SiteConfig;
pub use crate::error::{SiteError, SiteResult};

use crate::{router::create_router, state::AppState};

/// Run the website server.
pub async fn run(config: SiteConfig) -> SiteResult<()> {
    // The schema is declared and migrated when a database is configured,
    // but no page reads from it yet. Content management lands in a later
    // phase.
    let db = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::create_pool(url)?;
            db::run_migrations(&pool)?;
            info!("Database schema ready at {url}");
            Some(pool)
        }
        None => None,
    };

    let state = AppState::new(&config, db);

    #[cfg(debug_assertions)]
    let state = {
        let state_with_reloader = state.with_reloader();
        dev_tools::spawn_file_watcher(state_with_reloader.clone(), &config);
        state_with_reloader
    };

    let app = create_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| SiteError::BindFailed { addr: config.bind_addr, source })?;

    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
    info!("Shutting down gracefully...");
}
