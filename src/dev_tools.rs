//! Development Tools
//!
//! Hot reload via SSE for development.

use std::path::PathBuf;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::{config::SiteConfig, state::AppState};

/// SSE endpoint for live reload.
pub async fn livereload_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let (tx, rx) = mpsc::channel::<Result<Event, std::convert::Infallible>>(16);

    if let Some(reloader) = state.reloader() {
        let mut receiver = reloader.subscribe();

        tokio::spawn(async move {
            while receiver.recv().await.is_ok() {
                if tx.send(Ok(Event::default().data("reload"))).await.is_err() {
                    break;
                }
            }
        });
    }

    Sse::new(tokio_stream::wrappers::ReceiverStream::new(rx)).keep_alive(KeepAlive::default())
}

/// Spawn a file watcher that notifies connected browsers on any change
/// to the templates or static assets.
pub fn spawn_file_watcher(state: AppState, config: &SiteConfig) {
    let watch_dirs = vec![PathBuf::from("templates"), config.assets_dir.clone()];

    std::thread::spawn(move || {
        let (tx, rx) = std::sync::mpsc::channel();

        let mut watcher = match RecommendedWatcher::new(tx, notify::Config::default()) {
            Ok(watcher) => watcher,
            Err(e) => {
                error!("Failed to create file watcher: {e}");
                return;
            }
        };

        for dir in watch_dirs.iter().filter(|dir| dir.exists()) {
            match watcher.watch(dir, RecursiveMode::Recursive) {
                Ok(()) => info!("Watching {} for changes", dir.display()),
                Err(e) => error!("Failed to watch {}: {e}", dir.display()),
            }
        }

        for event in rx {
            match event {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove() => {
                    debug!("File change detected: {:?}", event.paths);
                    if let Some(reloader) = state.reloader() {
                        let _ = reloader.send(());
                    }
                }
                Ok(_) => {}
                Err(e) => error!("Watch error: {e:?}"),
            }
        }
    });
}
