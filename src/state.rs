//! Application State
//!
//! Arc-wrapped state shared across handlers.

use std::sync::Arc;

use chrono::Datelike;

#[cfg(debug_assertions)]
use tokio::sync::broadcast;

use crate::config::SiteConfig;
use crate::db::DbPool;
use crate::templates::Chrome;
use crate::tokens::DesignTokens;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    site_name: String,
    tokens_css: String,
    db: Option<DbPool>,
    #[cfg(debug_assertions)]
    reloader: Option<broadcast::Sender<()>>,
}

impl AppState {
    /// Create a new `AppState` from the site configuration.
    ///
    /// Design tokens render to CSS once here; no page touches the
    /// `design_tokens` table.
    pub fn new(config: &SiteConfig, db: Option<DbPool>) -> Self {
        Self {
            inner: Arc::new(InnerState {
                site_name: config.site_name.clone(),
                tokens_css: DesignTokens::default().to_css(),
                db,
                #[cfg(debug_assertions)]
                reloader: None,
            }),
        }
    }

    /// Create a new `AppState` with hot reload channel (debug only).
    #[cfg(debug_assertions)]
    pub fn with_reloader(self) -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            inner: Arc::new(InnerState {
                site_name: self.inner.site_name.clone(),
                tokens_css: self.inner.tokens_css.clone(),
                db: self.inner.db.clone(),
                reloader: Some(tx),
            }),
        }
    }

    /// Get the configured site name.
    pub fn site_name(&self) -> &str {
        &self.inner.site_name
    }

    /// Get the database pool, if one is configured.
    pub fn db(&self) -> Option<&DbPool> {
        self.inner.db.as_ref()
    }

    /// Build the shared layout data for a page with the given title.
    pub fn chrome(&self, title: impl Into<String>) -> Chrome {
        Chrome {
            title: title.into(),
            site_name: self.inner.site_name.clone(),
            tokens_css: self.inner.tokens_css.clone(),
            year: chrono::Local::now().year(),
            cart_count: 0,
            version: env!("BUILD_VERSION"),
        }
    }

    /// Get the reloader channel (debug only).
    #[cfg(debug_assertions)]
    pub fn reloader(&self) -> Option<&broadcast::Sender<()>> {
        self.inner.reloader.as_ref()
    }
}
