//! Static demo data. In demo mode nothing else is ever returned.

use crate::model::ChainStatus;
use crate::model::Coin;
use crate::model::DemoWallet;
use crate::model::Transaction;
use crate::model::TxStatus;

pub const DEMO_WALLETS: [DemoWallet; 3] = [
    DemoWallet {
        id: "primary",
        label: "Main CipherMint Wallet",
        address: "ciphermint1demoaddressxyz",
        description: "Primary wallet for ecosystem activity.",
    },
    DemoWallet {
        id: "gamer",
        label: "Gamer Earnings Wallet",
        address: "ciphermint1gamerxyz000001",
        description: "In-game rewards and drops.",
    },
    DemoWallet {
        id: "creator",
        label: "Creator Royalty Wallet",
        address: "ciphermint1creatorxyz0001",
        description: "Payouts from creator economies.",
    },
];

/// The wallet every unknown demo address falls back to.
pub const DEFAULT_WALLET: DemoWallet = DEMO_WALLETS[0];

pub const DEMO_ADDRESS: &str = DEFAULT_WALLET.address;

pub const DEMO_CHAIN_ID: &str = "ciphermint-demo-1";
pub const DEMO_CHAIN_HEIGHT: u64 = 18235;

pub fn demo_wallet(address: &str) -> Option<DemoWallet> {
    DEMO_WALLETS.iter().copied().find(|w| w.address == address)
}

pub fn chain_status() -> ChainStatus {
    ChainStatus {
        chain_id: DEMO_CHAIN_ID.to_string(),
        latest_block_height: DEMO_CHAIN_HEIGHT,
        latest_block_time: "2025-11-26T11:14:10Z".to_string(),
        node_version: "CipherMintd demo-node v0.1.0".to_string(),
    }
}

/// Balances for `address`, or the default wallet's balances when the address is unknown.
pub fn balances(address: &str) -> Vec<Coin> {
    let wallet = demo_wallet(address).unwrap_or(DEFAULT_WALLET);
    let coins: &[(&str, &str)] = match wallet.id {
        "gamer" => &[
            ("ucmint", "42000000"),
            ("urackd", "125000000"),
            ("uxp", "230000000"),
        ],
        "creator" => &[
            ("ucmint", "220000000"),
            ("urackd", "32000000"),
            ("uroyal", "99000000"),
        ],
        _ => &[
            ("ucmint", "125000000"),
            ("urackd", "84500000"),
            ("ugame", "56000000"),
        ],
    };
    coins
        .iter()
        .map(|(denom, amount)| Coin::new(*denom, *amount))
        .collect()
}

/// Recent transactions for `address`, newest first. Unknown addresses have none.
pub fn transactions(address: &str) -> Vec<Transaction> {
    let Some(wallet) = demo_wallet(address) else {
        return vec![];
    };
    let rows: &[(&str, u64, &str, TxStatus)] = match wallet.id {
        "primary" => &[
            ("A2F4F1DEMO1234567890ABCDEF", 18235, "2025-11-26T11:14:10Z", TxStatus::Success),
            ("B9E0DEMO0987654321FEDCBA", 18210, "2025-11-26T10:39:10Z", TxStatus::Success),
            ("C7D9DEMOFF00112233445566", 18180, "2025-11-26T09:58:10Z", TxStatus::Failed),
        ],
        "gamer" => &[
            ("GAMERDEMO1122334455667788", 18200, "2025-11-25T21:14:10Z", TxStatus::Success),
            ("GAMERDROP9988776655443322", 18170, "2025-11-25T20:01:10Z", TxStatus::Success),
        ],
        "creator" => &[
            ("CRE8PAY0000111122223333", 18100, "2025-11-24T15:14:10Z", TxStatus::Success),
            ("CRE8FAIL9999888877776666", 18090, "2025-11-24T14:55:10Z", TxStatus::Failed),
        ],
        _ => &[],
    };
    rows.iter()
        .map(|(hash, height, timestamp, status)| Transaction {
            hash: hash.to_string(),
            height: *height,
            timestamp: timestamp.to_string(),
            status: *status,
            success: status.is_success(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_address_falls_back_to_default_wallet_balances() {
        assert_eq!(balances("ciphermint1nobody"), balances(DEMO_ADDRESS));
        assert_eq!(balances("")[0], Coin::new("ucmint", "125000000"));
    }

    #[test]
    fn each_demo_wallet_has_its_own_balances() {
        let gamer = balances(DEMO_WALLETS[1].address);
        assert!(gamer.iter().any(|c| c.denom == "uxp"));
        let creator = balances(DEMO_WALLETS[2].address);
        assert!(creator.iter().any(|c| c.denom == "uroyal"));
    }

    #[test]
    fn unknown_address_has_no_transactions() {
        assert!(transactions("ciphermint1nobody").is_empty());
    }

    #[test]
    fn transactions_are_newest_first_and_consistent() {
        for wallet in DEMO_WALLETS {
            let txs = transactions(wallet.address);
            assert!(!txs.is_empty());
            assert!(txs.windows(2).all(|w| w[0].height >= w[1].height));
            assert!(txs.iter().all(|tx| tx.success == tx.status.is_success()));
        }
    }

    #[test]
    fn chain_status_is_fixed() {
        let status = chain_status();
        assert_eq!(status.chain_id, "ciphermint-demo-1");
        assert_eq!(status.latest_block_height, 18235);
        assert_eq!(status, chain_status());
    }
}
