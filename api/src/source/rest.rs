//! Reads from a Cosmos-SDK style REST API.
//!
//! Responses have no enforced schema, so every field is optional and falls
//! back to `0`, `"unknown"` or an empty string.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use reqwest::Url;
use serde_json::Value;

use super::DataSource;
use crate::error::FetchError;
use crate::error::Operation;
use crate::model::ChainStatus;
use crate::model::Coin;
use crate::model::Transaction;

/// One GET per call against `base_url`. No retries.
#[derive(Debug, Clone)]
pub struct RestSource {
    client: reqwest::Client,
    base_url: String,
}

impl RestSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, operation: Operation, segments: &[&str]) -> Result<Url, FetchError> {
        let invalid = || FetchError::InvalidBaseUrl {
            operation,
            base_url: self.base_url.clone(),
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, operation: Operation, url: Url) -> Result<Value, FetchError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| {
                warn!("{operation} request to {url} failed: {source}");
                FetchError::Transport { operation, source }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{operation} request to {url} returned {status}");
            return Err(FetchError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| FetchError::Transport { operation, source })
    }
}

impl DataSource for RestSource {
    async fn fetch_chain_status(&self) -> Result<ChainStatus, FetchError> {
        let url = self.endpoint(Operation::ChainStatus, &["status"])?;
        let data = self.get_json(Operation::ChainStatus, url).await?;
        Ok(parse_chain_status(&data))
    }

    async fn fetch_balances(&self, address: &str) -> Result<Vec<Coin>, FetchError> {
        let url = self.endpoint(
            Operation::Balances,
            &["cosmos", "bank", "v1beta1", "balances", address],
        )?;
        let data = self.get_json(Operation::Balances, url).await?;
        Ok(parse_balances(&data))
    }

    async fn fetch_recent_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, FetchError> {
        let mut url = self.endpoint(Operation::Transactions, &["txs"])?;
        url.query_pairs_mut()
            .append_pair("message.sender", address)
            .append_pair("limit", &limit.to_string());
        let data = self.get_json(Operation::Transactions, url).await?;
        Ok(parse_transactions(&data))
    }
}

/// Maps a `/status` response. A Tendermint RPC `result` wrapper is unwrapped.
pub(crate) fn parse_chain_status(data: &Value) -> ChainStatus {
    let data = data.get("result").unwrap_or(data);
    ChainStatus {
        chain_id: string_or(data.pointer("/node_info/network"), "unknown"),
        latest_block_height: lenient_u64(data.pointer("/sync_info/latest_block_height")),
        latest_block_time: string_or(data.pointer("/sync_info/latest_block_time"), ""),
        node_version: string_or(data.pointer("/node_info/version"), "unknown"),
    }
}

pub(crate) fn parse_balances(data: &Value) -> Vec<Coin> {
    array(data, "balances")
        .map(|b| Coin {
            denom: string_or(b.get("denom"), ""),
            amount: match b.get("amount") {
                Some(Value::Number(n)) => n.to_string(),
                other => string_or(other, "0"),
            },
        })
        .collect()
}

/// Maps `txs[]`. Only a result code of zero is a success.
pub(crate) fn parse_transactions(data: &Value) -> Vec<Transaction> {
    array(data, "txs")
        .map(|tx| {
            Transaction::from_code(
                string_or(tx.get("txhash"), ""),
                lenient_u64(tx.get("height")),
                string_or(tx.get("timestamp"), ""),
                result_code(tx.get("code")),
            )
        })
        .collect()
}

fn array<'a>(data: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    data.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn string_or(value: Option<&Value>, default: &str) -> String {
    value.and_then(Value::as_str).unwrap_or(default).to_string()
}

/// Heights arrive as strings or numbers. Anything unreadable is 0.
fn lenient_u64(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// The tx result code, when it is an integer. Unlike heights, an unreadable
/// code stays unknown instead of becoming 0.
fn result_code(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::TxStatus;

    #[test]
    fn chain_status_fields() {
        let status = parse_chain_status(&json!({
            "node_info": { "network": "ciphermint-1", "version": "v0.47.3" },
            "sync_info": {
                "latest_block_height": "18235",
                "latest_block_time": "2025-11-26T11:14:10Z"
            }
        }));
        assert_eq!(
            status,
            ChainStatus {
                chain_id: "ciphermint-1".to_string(),
                latest_block_height: 18235,
                latest_block_time: "2025-11-26T11:14:10Z".to_string(),
                node_version: "v0.47.3".to_string(),
            }
        );
    }

    #[test]
    fn chain_status_inside_rpc_result() {
        let status = parse_chain_status(&json!({
            "result": { "sync_info": { "latest_block_height": 42 } }
        }));
        assert_eq!(status.latest_block_height, 42);
    }

    #[test]
    fn chain_status_defaults() {
        let status = parse_chain_status(&json!({}));
        assert_eq!(status.chain_id, "unknown");
        assert_eq!(status.node_version, "unknown");
        assert_eq!(status.latest_block_height, 0);
        assert_eq!(status.latest_block_time, "");

        let status = parse_chain_status(&json!({
            "sync_info": { "latest_block_height": "not-a-number" }
        }));
        assert_eq!(status.latest_block_height, 0);
    }

    #[test]
    fn balances_mapping() {
        let coins = parse_balances(&json!({
            "balances": [
                { "denom": "ucmint", "amount": "125000000" },
                { "denom": "urackd" },
                { "amount": 7 }
            ],
            "pagination": { "next_key": null, "total": "3" }
        }));
        assert_eq!(
            coins,
            vec![
                Coin::new("ucmint", "125000000"),
                Coin::new("urackd", "0"),
                Coin::new("", "7"),
            ]
        );
        assert!(parse_balances(&json!({ "balances": null })).is_empty());
        assert!(parse_balances(&json!([])).is_empty());
    }

    #[test]
    fn transactions_mapping() {
        let txs = parse_transactions(&json!({
            "txs": [
                { "txhash": "AAA", "height": "10", "timestamp": "2025-11-26T11:14:10Z", "code": 0 },
                { "txhash": "BBB", "height": 9, "code": 5 },
                { "txhash": "CCC" }
            ]
        }));
        assert_eq!(txs.len(), 3);

        assert_eq!(txs[0].height, 10);
        assert_eq!(txs[0].status, TxStatus::Success);
        assert!(txs[0].success);

        assert_eq!(txs[1].height, 9);
        assert_eq!(txs[1].status, TxStatus::Failed);
        assert!(!txs[1].success);
        assert_eq!(txs[1].timestamp, "");

        assert_eq!(txs[2].height, 0);
        assert!(!txs[2].success);
        assert_eq!(txs[2].status, TxStatus::Failed);
    }

    #[test]
    fn only_an_integer_zero_code_is_a_success() {
        let txs = parse_transactions(&json!({
            "txs": [
                { "txhash": "MISSING" },
                { "txhash": "FLOAT", "code": 5.0 },
                { "txhash": "FLOAT_ZERO", "code": 0.0 },
                { "txhash": "NEGATIVE", "code": -1 },
                { "txhash": "GARBAGE", "code": "oops" },
                { "txhash": "NULL", "code": null },
                { "txhash": "STRING_ZERO", "code": "0" },
                { "txhash": "ZERO", "code": 0 }
            ]
        }));
        let outcomes: Vec<(&str, bool, TxStatus)> = txs
            .iter()
            .map(|tx| (tx.hash.as_str(), tx.success, tx.status))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                ("MISSING", false, TxStatus::Failed),
                ("FLOAT", false, TxStatus::Failed),
                ("FLOAT_ZERO", false, TxStatus::Failed),
                ("NEGATIVE", false, TxStatus::Failed),
                ("GARBAGE", false, TxStatus::Failed),
                ("NULL", false, TxStatus::Failed),
                ("STRING_ZERO", true, TxStatus::Success),
                ("ZERO", true, TxStatus::Success),
            ]
        );
    }

    #[test]
    fn endpoints_are_encoded() {
        let source = RestSource::new("http://localhost:1317/lcd/");
        let url = source
            .endpoint(Operation::Balances, &["balances", "a b/c"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:1317/lcd/balances/a%20b%2Fc");
    }

    #[tokio::test]
    async fn bad_base_url_is_an_error() {
        let source = RestSource::new("not a url");
        let err = source.fetch_chain_status().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch chain status from API");
    }
}
