use std::time::Duration;

use super::DataSource;
use crate::error::FetchError;
use crate::fixtures;
use crate::model::ChainStatus;
use crate::model::Coin;
use crate::model::Transaction;

/// Serves the static demo fixtures, optionally after a simulated delay.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    delay: Duration,
}

impl FixtureSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl DataSource for FixtureSource {
    async fn fetch_chain_status(&self) -> Result<ChainStatus, FetchError> {
        self.simulate_latency().await;
        Ok(fixtures::chain_status())
    }

    async fn fetch_balances(&self, address: &str) -> Result<Vec<Coin>, FetchError> {
        self.simulate_latency().await;
        Ok(fixtures::balances(address))
    }

    async fn fetch_recent_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, FetchError> {
        self.simulate_latency().await;
        Ok(fixtures::transactions(address)
            .into_iter()
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::fixtures::DEMO_ADDRESS;
    use crate::fixtures::DEMO_WALLETS;

    #[tokio::test]
    async fn chain_status_is_the_fixture() {
        let status = FixtureSource::default().fetch_chain_status().await.unwrap();
        assert_eq!(status.chain_id, "ciphermint-demo-1");
        assert_eq!(status.latest_block_height, 18235);
    }

    #[tokio::test]
    async fn unknown_address_fallbacks() {
        let source = FixtureSource::default();
        let balances = source.fetch_balances("ciphermint1unknown").await.unwrap();
        assert_eq!(balances, fixtures::balances(DEMO_ADDRESS));

        let txs = source
            .fetch_recent_transactions("ciphermint1unknown", 20)
            .await
            .unwrap();
        assert!(txs.is_empty());
    }

    #[tokio::test]
    async fn transactions_respect_limit() {
        let source = FixtureSource::default();
        let txs = source
            .fetch_recent_transactions(DEMO_WALLETS[0].address, 2)
            .await
            .unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].hash, "A2F4F1DEMO1234567890ABCDEF");

        let none = source
            .fetch_recent_transactions(DEMO_WALLETS[0].address, 0)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn delay_is_applied() {
        let source = FixtureSource::new(Duration::from_millis(30));
        let started = Instant::now();
        source.fetch_chain_status().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
