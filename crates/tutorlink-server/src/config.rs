//! Relay service configuration.
//!
//! All configuration is read from environment variables once at startup and
//! passed into the Axum handlers via [`axum::extract::State`]; request
//! handling never consults the environment directly.

/// Production completion endpoint of the GLM provider.
const DEFAULT_API_URL: &str = "https://open.bigmodel.cn/api/paas/v4/chat/completions";

/// Global configuration shared across all handlers.
///
/// Constructed once at startup and passed as Axum shared state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Provider credential of the form `"<id>.<secret>"`, if configured.
    ///
    /// Kept optional so the service can start without it and report a
    /// configuration error per request instead of refusing to boot.
    pub credential: Option<String>,
    /// Completion endpoint the relay forwards to.
    pub api_url: String,
    /// Port to listen on (default `3002`).
    pub listen_port: u16,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable        | Default                                                  | Description          |
    /// |-----------------|----------------------------------------------------------|----------------------|
    /// | `RELAY_PORT`    | `3002`                                                   | HTTP listen port     |
    /// | `ZHIPU_API_KEY` | *(unset)*                                                | Provider credential  |
    /// | `ZHIPU_API_URL` | `https://open.bigmodel.cn/api/paas/v4/chat/completions`  | Completion endpoint  |
    pub fn from_env() -> Self {
        let listen_port: u16 = std::env::var("RELAY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3002);

        let credential = std::env::var("ZHIPU_API_KEY")
            .ok()
            .filter(|v| !v.is_empty());

        let api_url =
            std::env::var("ZHIPU_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self {
            credential,
            api_url,
            listen_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_port() {
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.listen_port, 3002);
    }

    #[test]
    fn default_api_url_is_the_production_endpoint() {
        let cfg = AppConfig::from_env();
        assert!(cfg.api_url.contains("open.bigmodel.cn"));
        assert!(cfg.api_url.ends_with("/chat/completions"));
    }
}
