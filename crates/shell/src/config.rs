//! Environment configuration.

/// Externally supplied endpoints.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the REST backend.
    pub api_base_url: String,
    /// URL of the realtime-notification server (message shapes are out of
    /// scope here; only the address is carried).
    pub realtime_url: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to dev
    /// defaults with a warning.
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("OPSDESK_API_URL").unwrap_or_else(|_| {
            tracing::warn!("OPSDESK_API_URL not set; using local dev default");
            "http://localhost:8080/api".to_string()
        });
        let realtime_url = std::env::var("OPSDESK_REALTIME_URL").unwrap_or_else(|_| {
            tracing::warn!("OPSDESK_REALTIME_URL not set; using local dev default");
            "ws://localhost:8081".to_string()
        });

        tracing::info!(%api_base_url, %realtime_url, "configuration loaded");
        Self {
            api_base_url,
            realtime_url,
        }
    }
}
