use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:1317";

/// Settings for the data layer, read once when the server starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Serve static fixtures and never contact the REST API.
    pub demo_mode: bool,
    /// Base URL of the Cosmos-SDK style REST API, without a trailing slash.
    pub base_url: String,
    /// Simulated latency for demo responses.
    pub demo_delay: Duration,
}

impl ApiConfig {
    /// Creates an `ApiConfig` from environment variables.
    ///
    /// # Environment Variables
    /// - `CIPHERMINT_DEMO_MODE`: "true" (any case) or "1" enables demo mode.
    ///   defaults to false
    /// - `CIPHERMINT_API_BASE_URL`: REST API base. defaults to `http://localhost:1317`
    /// - `CIPHERMINT_DEMO_DELAY_MS`: demo latency in milliseconds. defaults to 0
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`ApiConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let demo_mode = lookup("CIPHERMINT_DEMO_MODE")
            .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
            .unwrap_or(false);

        let base_url = lookup("CIPHERMINT_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let demo_delay = lookup("CIPHERMINT_DEMO_DELAY_MS")
            .and_then(|ms| ms.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or_default();

        Self {
            demo_mode,
            base_url,
            demo_delay,
        }
    }

    pub fn demo() -> Self {
        Self {
            demo_mode: true,
            ..Self::default()
        }
    }

    pub fn live(base_url: impl Into<String>) -> Self {
        Self {
            demo_mode: false,
            base_url: base_url.into(),
            demo_delay: Duration::ZERO,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::live(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ApiConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_live_localhost() {
        let config = config_from(&[]);
        assert_eq!(config, ApiConfig::default());
        assert!(!config.demo_mode);
        assert_eq!(config.base_url, "http://localhost:1317");
        assert_eq!(config.demo_delay, Duration::ZERO);
    }

    #[test]
    fn demo_mode_flag() {
        assert!(config_from(&[("CIPHERMINT_DEMO_MODE", "TRUE")]).demo_mode);
        assert!(config_from(&[("CIPHERMINT_DEMO_MODE", "1")]).demo_mode);
        assert!(!config_from(&[("CIPHERMINT_DEMO_MODE", "yes")]).demo_mode);
        assert!(!config_from(&[("CIPHERMINT_DEMO_MODE", "false")]).demo_mode);
    }

    #[test]
    fn base_url_is_normalized() {
        let config = config_from(&[("CIPHERMINT_API_BASE_URL", "https://lcd.ciphermint.io/")]);
        assert_eq!(config.base_url, "https://lcd.ciphermint.io");

        let config = config_from(&[("CIPHERMINT_API_BASE_URL", "  ")]);
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn demo_delay() {
        let config = config_from(&[("CIPHERMINT_DEMO_DELAY_MS", "250")]);
        assert_eq!(config.demo_delay, Duration::from_millis(250));

        let config = config_from(&[("CIPHERMINT_DEMO_DELAY_MS", "soon")]);
        assert_eq!(config.demo_delay, Duration::ZERO);
    }
}
