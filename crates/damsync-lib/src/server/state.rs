use crate::config::Config;
use reqwest::Client;
use std::sync::Arc;

/// Shared state for the trigger API. One HTTP client is reused across all
/// runs for connection pooling.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}
