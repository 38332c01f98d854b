use std::env;
use std::time::Duration;

pub const DEFAULT_HUB_URL: &str = "https://hub.docker.com/v2";
pub const DEFAULT_AUTH_URL: &str = "https://auth.docker.io";
pub const DEFAULT_REGISTRY_URL: &str = "https://registry-1.docker.io";

/// Endpoint and transport settings shared by the Hub and registry clients.
///
/// Every field can be overridden through environment variables so tests can
/// point the clients at a local stand-in:
/// - `DOCKHUB_HUB_URL`
/// - `DOCKHUB_AUTH_URL`
/// - `DOCKHUB_REGISTRY_URL`
/// - `DOCKHUB_TIMEOUT_SECS`
#[derive(Clone, Debug)]
pub struct HubConfig {
    pub hub_base_url: String,
    pub auth_base_url: String,
    pub registry_base_url: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub default_page_size: u32,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            hub_base_url: DEFAULT_HUB_URL.to_string(),
            auth_base_url: DEFAULT_AUTH_URL.to_string(),
            registry_base_url: DEFAULT_REGISTRY_URL.to_string(),
            user_agent: concat!("dockhub/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            default_page_size: 25,
        }
    }
}

impl HubConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = get_env_optional("DOCKHUB_HUB_URL") {
            config.hub_base_url = trim_base_url(&url);
        }
        if let Some(url) = get_env_optional("DOCKHUB_AUTH_URL") {
            config.auth_base_url = trim_base_url(&url);
        }
        if let Some(url) = get_env_optional("DOCKHUB_REGISTRY_URL") {
            config.registry_base_url = trim_base_url(&url);
        }
        if let Some(secs) = get_env_optional("DOCKHUB_TIMEOUT_SECS")
            .and_then(|value| value.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(secs);
        }
        config
    }
}

pub fn get_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_docker_endpoints() {
        let config = HubConfig::default();
        assert_eq!(config.hub_base_url, DEFAULT_HUB_URL);
        assert_eq!(config.registry_base_url, DEFAULT_REGISTRY_URL);
        assert_eq!(config.default_page_size, 25);
    }

    #[test]
    fn env_overrides_trim_trailing_slash() {
        env::set_var("DOCKHUB_HUB_URL", "http://localhost:8080/v2/");
        let config = HubConfig::from_env();
        assert_eq!(config.hub_base_url, "http://localhost:8080/v2");
        env::remove_var("DOCKHUB_HUB_URL");
    }
}
