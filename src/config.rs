use std::env;

/// Route dispatch mode
#[derive(Clone, Debug, PartialEq)]
pub enum RoutingMode {
    /// First path segment selects the provider route (canonical)
    Routed,
    /// Entire path is the b23 link token, no route prefix (legacy deployments)
    Bare,
}

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Base URL of the short-link provider the service resolves against
    pub upstream_url: String,
    pub routing_mode: RoutingMode,
    pub is_dev: bool,
}

impl Config {
    /// Load configuration from environment variables
    /// In DEV mode, provides sensible defaults. In PROD mode, PORT is required.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Check if running in dev mode
        let is_dev = env::var("DEV_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        // Port: required in prod, defaults to 3000 in dev
        let port = if is_dev {
            env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?
        } else {
            env::var("PORT")
                .map_err(|_| "PORT is required in production")?
                .parse()?
        };

        // Upstream provider: fixed host in production, overridable for tests
        let upstream_url =
            env::var("UPSTREAM_URL").unwrap_or_else(|_| "https://b23.tv".to_string());

        // Routing mode: routed (default) or bare
        let routing_mode = match env::var("ROUTING_MODE")
            .unwrap_or_else(|_| "routed".to_string())
            .to_lowercase()
            .as_str()
        {
            "bare" => RoutingMode::Bare,
            _ => RoutingMode::Routed,
        };

        Ok(Config {
            port,
            upstream_url,
            routing_mode,
            is_dev,
        })
    }
}
