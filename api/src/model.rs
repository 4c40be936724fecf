//! Records shared between the data sources, the server functions and the UI.
//!
//! Every record is an immutable snapshot: a fetch produces a fresh value that
//! replaces whatever the UI held before.

use serde::Deserialize;
use serde::Serialize;

use crate::display;

/// A snapshot of network health at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStatus {
    pub chain_id: String,
    pub latest_block_height: u64,
    /// RFC 3339 time of the latest block. Empty when the node did not report one.
    pub latest_block_time: String,
    pub node_version: String,
}

/// A token balance. `amount` is a decimal string in the denomination's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Human readable amount, e.g. "125" for `125000000ucmint`.
    pub fn display_amount(&self) -> String {
        display::display_amount(&self.denom, &self.amount)
    }

    /// Ticker style label, e.g. "CMINT" for `ucmint`.
    pub fn label(&self) -> String {
        display::denom_label(&self.denom)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
)]
pub enum TxStatus {
    #[default]
    Success,
    Failed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub height: u64,
    /// RFC 3339 timestamp. Empty when unknown.
    pub timestamp: String,
    pub status: TxStatus,
    pub success: bool,
}

impl Transaction {
    /// Builds a settled transaction from the node's result code.
    ///
    /// Only a code of exactly zero is a success; a missing code is a failure.
    pub fn from_code(hash: String, height: u64, timestamp: String, code: Option<i64>) -> Self {
        let success = code == Some(0);
        Self {
            hash,
            height,
            timestamp,
            status: if success {
                TxStatus::Success
            } else {
                TxStatus::Failed
            },
            success,
        }
    }
}

/// A wallet from the static demo set. Never derived from a live source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DemoWallet {
    pub id: &'static str,
    pub label: &'static str,
    pub address: &'static str,
    pub description: &'static str,
}

/// What the UI needs to know about how the server was configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub demo_mode: bool,
    pub api_base_url: String,
}
