//! This crate contains the data layer and all shared fullstack server functions.

pub mod config;
pub mod display;
pub mod error;
pub mod fixtures;
pub mod model;
#[cfg(not(target_arch = "wasm32"))]
pub mod source;
pub mod transfer;

use dioxus::prelude::*;
use model::AppInfo;
use model::ChainStatus;
use model::Coin;
use model::Transaction;
use transfer::TransferRequest;

pub type ApiError = anyhow::Error;

/// How many transactions are requested when the caller does not say.
pub const DEFAULT_TX_LIMIT: usize = 20;

/// Reports whether the server runs on fixtures or against a live node.
#[post("/api/app_info")]
pub async fn app_info() -> Result<AppInfo, ApiError> {
    Ok(source::backend().await.app_info())
}

#[post("/api/chain_status")]
pub async fn fetch_chain_status() -> Result<ChainStatus, ApiError> {
    use crate::source::DataSource;

    let status = source::backend().await.source.fetch_chain_status().await?;
    Ok(status)
}

/// Balances for `address`. Demo mode falls back to the primary demo wallet.
#[post("/api/balances")]
pub async fn fetch_balances(address: String) -> Result<Vec<Coin>, ApiError> {
    use crate::source::DataSource;

    let balances = source::backend()
        .await
        .source
        .fetch_balances(&address)
        .await?;
    Ok(balances)
}

/// Recent transactions for `address`, newest first.
#[post("/api/recent_transactions")]
pub async fn fetch_recent_transactions(
    address: String,
    limit: Option<usize>,
) -> Result<Vec<Transaction>, ApiError> {
    use crate::source::DataSource;

    let txs = source::backend()
        .await
        .source
        .fetch_recent_transactions(&address, limit.unwrap_or(DEFAULT_TX_LIMIT))
        .await?;
    Ok(txs)
}

/// Simulates a send. Only available in demo mode; nothing leaves the server.
#[post("/api/demo_transfer")]
pub async fn demo_transfer(
    request: TransferRequest,
    latest_height: Option<u64>,
) -> Result<Transaction, ApiError> {
    let demo_mode = source::backend().await.config.demo_mode;
    let tx = transfer::record_demo_transfer(&request, latest_height, demo_mode)?;
    dioxus_logger::tracing::info!("demo transfer {} to {}", tx.hash, request.to);
    Ok(tx)
}
