use crate::config::AppConfig;
use crate::provider::{BreachProvider, LeakCheckProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub provider: Arc<dyn BreachProvider>,
}

impl AppState {
    pub fn init(config: AppConfig) -> Result<AppState, reqwest::Error> {
        // One client for the life of the process
        let provider = LeakCheckProvider::new(config.provider_url.clone(), config.provider_timeout)?;

        Ok(AppState::with_provider(config, Arc::new(provider)))
    }

    pub fn with_provider(config: AppConfig, provider: Arc<dyn BreachProvider>) -> AppState {
        AppState { config, provider }
    }
}
