use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use govpulse_core::config::AppConfig;
use govpulse_mcp::TenantDataSource;
use govpulse_slack::signature::SignatureVerifier;

use crate::{health, slash};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub verifier: Option<Arc<SignatureVerifier>>,
    pub data_source: Arc<dyn TenantDataSource>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        data_source: Arc<dyn TenantDataSource>,
        http: reqwest::Client,
    ) -> Self {
        let verifier = if config.slack.verify_signatures {
            config.slack.signing_secret.as_ref().map(|secret| {
                Arc::new(SignatureVerifier::new(
                    secret.clone(),
                    config.slack.timestamp_tolerance_secs,
                ))
            })
        } else {
            None
        };

        Self { config: Arc::new(config), verifier, data_source, http }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/test", get(health::test))
        .route("/slack/atlan-setup", post(slash::atlan_setup))
        .route("/api/slack/atlan-setup", post(slash::atlan_setup))
        .route("/slack/interactive", post(slash::interactive))
        .with_state(state)
}
