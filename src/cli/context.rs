//! Command execution context
//!
//! One `RunContext` is constructed per invocation and passed to every
//! pipeline stage, replacing the module-level config/token globals the
//! original scripts shared between steps.

use crate::client::{PlatformClient, auth};
use crate::config::Config;
use crate::error::Result;

/// Context for one run: validated configuration and an authenticated client.
pub struct RunContext {
    /// Authenticated API client holding the expanded endpoint configuration
    pub client: PlatformClient,
}

impl RunContext {
    /// Create a context with full initialization.
    ///
    /// Loads the configuration (from `config_path` or the default
    /// location), validates it, resolves the bearer credential, and builds
    /// the API client. Any failure here aborts the run before output is
    /// written.
    pub async fn new(config_path: Option<&str>) -> Result<Self> {
        let config = Config::load_at(config_path)?;
        config.validate()?;

        let http = PlatformClient::http_client()?;
        let credential = auth::resolve(&http, &config).await?;

        Ok(Self {
            client: PlatformClient::new(http, config, credential),
        })
    }

    /// The loaded configuration
    pub fn config(&self) -> &Config {
        self.client.config()
    }
}
