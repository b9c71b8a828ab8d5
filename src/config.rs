//! Site configuration.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site name shown in the navigation brand and page titles.
    pub site_name: String,
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Directory served under /assets.
    pub assets_dir: PathBuf,
    /// SQLite database path. None leaves the schema unwired.
    pub database_url: Option<String>,
}

impl SiteConfig {
    /// Creates a configuration with the default site name and bind address.
    pub fn new() -> Self {
        Self {
            site_name: "Cloud City Sluggers".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            assets_dir: PathBuf::from("public"),
            database_url: None,
        }
    }

    /// Builds a configuration from the environment.
    ///
    /// Recognized variables: `SITE_NAME`, `SITE_ADDR`, `SITE_ASSETS_DIR`
    /// and `DATABASE_URL`. Anything unset keeps its default.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(name) = env::var("SITE_NAME") {
            config.site_name = name;
        }
        if let Ok(addr) = env::var("SITE_ADDR") {
            match addr.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(_) => warn!("Ignoring unparsable SITE_ADDR: {addr}"),
            }
        }
        if let Ok(dir) = env::var("SITE_ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Ok(url) = env::var("DATABASE_URL") {
            config.database_url = Some(url);
        }

        config
    }

    /// Sets the site name.
    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    /// Sets the bind address.
    pub fn with_bind_addr(mut self, addr: impl Into<SocketAddr>) -> Self {
        self.bind_addr = addr.into();
        self
    }

    /// Sets the static asset directory.
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Sets the SQLite database path.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}
