//! Settings loaded from defaults, an optional TOML file and the environment
//!
//! Environment keys use the `MOTORMATE_` prefix and `__` between sections,
//! e.g. `MOTORMATE_ADMIN__API_URL` or `MOTORMATE_STORE__FETCH_ORDERING`.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use motormate_client::{ErrorPolicy, HttpClientConfig};
use serde::Deserialize;

use crate::error::Result;
use crate::slice::FetchOrdering;

pub const ENV_PREFIX: &str = "MOTORMATE";

/// Which front end a client is built for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum App {
    Admin,
    Storefront,
}

impl App {
    pub fn error_policy(&self) -> ErrorPolicy {
        match self {
            App::Admin => ErrorPolicy::Admin,
            App::Storefront => ErrorPolicy::Storefront,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppSettings {
    pub api_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HttpSettings {
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StoreSettings {
    /// Default page size of every list
    pub page_size: u32,
    pub fetch_ordering: FetchOrdering,
    /// Directory of the persisted user
    pub storage_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub admin: AppSettings,
    pub storefront: AppSettings,
    pub http: HttpSettings,
    pub store: StoreSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Load settings; a given `path` must exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("admin.api_url", "http://localhost:5000/")?
            .set_default("storefront.api_url", "http://localhost:5000/")?
            .set_default("http.connect_timeout_ms", 5_000i64)?
            .set_default("http.read_timeout_ms", 30_000i64)?
            .set_default("store.page_size", 5i64)?
            .set_default("store.fetch_ordering", "last_resolved_wins")?
            .set_default("store.storage_dir", ".motormate")?
            .set_default("log.level", "info")?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn app(&self, app: App) -> &AppSettings {
        match app {
            App::Admin => &self.admin,
            App::Storefront => &self.storefront,
        }
    }

    /// HTTP client config for one front end
    pub fn http_config(&self, app: App) -> HttpClientConfig {
        HttpClientConfig::new(self.app(app).api_url.clone())
            .with_timeouts(self.http.connect_timeout_ms, self.http.read_timeout_ms)
            .with_error_policy(app.error_policy())
    }
}
