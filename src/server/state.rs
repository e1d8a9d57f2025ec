use crate::config::Config;
use reqwest::{Client, redirect};
use std::sync::Arc;
use std::time::Duration;

/// Client identifier sent on upstream resolution requests.
const USER_AGENT: &str = concat!("pureurl/", env!("CARGO_PKG_VERSION"));

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Shared HTTP client for connection pooling. Never follows redirects:
    /// the upstream's raw 3xx must stay observable.
    pub http_client: Client,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: Config) -> Self {
        let http_client = Client::builder()
            .redirect(redirect::Policy::none())
            .user_agent(USER_AGENT)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config: Arc::new(config),
            http_client,
        }
    }
}
