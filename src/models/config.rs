//! Configuration model loaded from external sources.

use std::env;
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

use crate::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_MS};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings shared by the HTTP client and the stores.
pub struct ClientConfig {
    /// Base endpoint every request path is appended to.
    pub api_base_url: String,
    /// Fixed timeout applied to every outbound request.
    pub request_timeout_ms: u64,
    /// Number of operadoras requested per page.
    pub page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api_base_url", DEFAULT_API_BASE_URL)?
        .set_default("request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS)?
        .set_default("page_size", DEFAULT_PAGE_SIZE as u64)
}

impl ClientConfig {
    /// Loads `.env`, `config/default.yaml`, `config/{APP_ENV}.yaml` and
    /// `APP_*` environment variables, later sources overriding earlier ones.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        builder_with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    /// Loads a single YAML file on top of the built-in defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        builder_with_defaults()?
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
