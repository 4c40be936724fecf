//! Where dashboard data comes from.
//!
//! A [`ChainSource`] is chosen once from [`ApiConfig`]: fixtures in demo mode,
//! the REST API otherwise. Callers never branch on the mode themselves.

mod fixture;
mod rest;

pub use fixture::FixtureSource;
pub use rest::RestSource;

use tokio::sync::OnceCell;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::AppInfo;
use crate::model::ChainStatus;
use crate::model::Coin;
use crate::model::Transaction;

/// A provider of chain status, balances and transaction history.
pub trait DataSource {
    async fn fetch_chain_status(&self) -> Result<ChainStatus, FetchError>;

    async fn fetch_balances(&self, address: &str) -> Result<Vec<Coin>, FetchError>;

    /// Newest first, at most `limit` entries.
    async fn fetch_recent_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, FetchError>;
}

/// The data source selected at startup.
#[derive(Debug, Clone)]
pub enum ChainSource {
    Fixture(FixtureSource),
    Rest(RestSource),
}

impl ChainSource {
    pub fn from_config(config: &ApiConfig) -> Self {
        if config.demo_mode {
            Self::Fixture(FixtureSource::new(config.demo_delay))
        } else {
            Self::Rest(RestSource::new(config.base_url.clone()))
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Fixture(_))
    }
}

impl DataSource for ChainSource {
    async fn fetch_chain_status(&self) -> Result<ChainStatus, FetchError> {
        match self {
            Self::Fixture(s) => s.fetch_chain_status().await,
            Self::Rest(s) => s.fetch_chain_status().await,
        }
    }

    async fn fetch_balances(&self, address: &str) -> Result<Vec<Coin>, FetchError> {
        match self {
            Self::Fixture(s) => s.fetch_balances(address).await,
            Self::Rest(s) => s.fetch_balances(address).await,
        }
    }

    async fn fetch_recent_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, FetchError> {
        match self {
            Self::Fixture(s) => s.fetch_recent_transactions(address, limit).await,
            Self::Rest(s) => s.fetch_recent_transactions(address, limit).await,
        }
    }
}

/// Server-side configuration together with the source built from it.
#[derive(Debug)]
pub struct Backend {
    pub config: ApiConfig,
    pub source: ChainSource,
}

impl Backend {
    pub fn new(config: ApiConfig) -> Self {
        let source = ChainSource::from_config(&config);
        Self { config, source }
    }

    pub fn app_info(&self) -> AppInfo {
        AppInfo {
            demo_mode: self.config.demo_mode,
            api_base_url: self.config.base_url.clone(),
        }
    }
}

/// The process-wide backend, configured from the environment on first use.
pub async fn backend() -> &'static Backend {
    static BACKEND: OnceCell<Backend> = OnceCell::const_new();

    BACKEND
        .get_or_init(|| async {
            let config = ApiConfig::from_env();
            dioxus_logger::tracing::info!(
                "data source: {}",
                if config.demo_mode {
                    "demo fixtures".to_string()
                } else {
                    format!("REST API at {}", config.base_url)
                }
            );
            Backend::new(config)
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn source_follows_config() {
        assert!(ChainSource::from_config(&ApiConfig::demo()).is_demo());
        assert!(!ChainSource::from_config(&ApiConfig::default()).is_demo());
    }

    #[test]
    fn app_info_reflects_config() {
        let info = Backend::new(ApiConfig::live("https://lcd.example")).app_info();
        assert!(!info.demo_mode);
        assert_eq!(info.api_base_url, "https://lcd.example");
    }

    #[tokio::test]
    async fn demo_source_never_touches_the_network() {
        // The base URL points nowhere; demo mode must not care.
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ApiConfig::demo()
        };
        let source = ChainSource::from_config(&config);

        let status = source.fetch_chain_status().await.unwrap();
        assert_eq!(status, fixtures::chain_status());
        let balances = source.fetch_balances(fixtures::DEMO_ADDRESS).await.unwrap();
        assert_eq!(balances, fixtures::balances(fixtures::DEMO_ADDRESS));
    }
}
