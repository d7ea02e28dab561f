use std::sync::Arc;

use govpulse_core::config::{AppConfig, ConfigError, LoadOptions};
use govpulse_mcp::{FixtureDataSource, TenantDataSource};
use thiserror::Error;
use tracing::info;

use crate::routes::AppState;

pub struct Application {
    pub config: AppConfig,
    pub data_source: Arc<dyn TenantDataSource>,
    pub http: reqwest::Client,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    Ok(bootstrap_with_config(config))
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    Application {
        config,
        data_source: Arc::new(FixtureDataSource::new()),
        http: reqwest::Client::new(),
    }
}

impl Application {
    pub fn into_state(self) -> AppState {
        AppState::new(self.config, self.data_source, self.http)
    }
}
