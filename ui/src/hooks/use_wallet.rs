use std::fmt::Display;

use api::model::Coin;
use api::model::Transaction;
use dioxus::prelude::*;

/// Joins the two halves of a wallet load.
///
/// Either failure discards both result sets so the screen never shows
/// balances next to a stale or missing history. The first error wins.
pub fn combine_wallet_results<E: Display>(
    balances: Result<Vec<Coin>, E>,
    transactions: Result<Vec<Transaction>, E>,
) -> Result<(Vec<Coin>, Vec<Transaction>), String> {
    match (balances, transactions) {
        (Ok(balances), Ok(transactions)) => Ok((balances, transactions)),
        (Err(e), _) | (_, Err(e)) => Err(e.to_string()),
    }
}

/// Number of wallet loads still running. Loads may overlap when the user
/// switches wallets during a refresh; the screen is busy until all finish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlight(usize);

impl InFlight {
    pub fn start(&mut self) {
        self.0 += 1;
    }

    pub fn finish(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn is_busy(&self) -> bool {
        self.0 > 0
    }
}

/// Balances and recent history for one address, owned by a single screen.
#[derive(Clone, Copy, PartialEq)]
pub struct WalletLoader {
    balances: Signal<Vec<Coin>>,
    transactions: Signal<Vec<Transaction>>,
    in_flight: Signal<InFlight>,
    loaded: Signal<bool>,
    error: Signal<Option<String>>,
}

impl WalletLoader {
    /// Fetches balances and transactions together and replaces the current
    /// snapshot. Earlier loads are not cancelled; the last to finish wins.
    pub fn load(&self, address: String) {
        let mut this = *self;
        spawn(async move {
            this.in_flight.write().start();
            this.error.set(None);

            let (balances, transactions) = futures::join!(
                api::fetch_balances(address.clone()),
                api::fetch_recent_transactions(address.clone(), None)
            );

            match combine_wallet_results(balances, transactions) {
                Ok((balances, transactions)) => {
                    dioxus_logger::tracing::debug!(
                        "loaded {} balances and {} transactions for {}",
                        balances.len(),
                        transactions.len(),
                        address
                    );
                    this.balances.set(balances);
                    this.transactions.set(transactions);
                }
                Err(message) => {
                    dioxus_logger::tracing::warn!("wallet load for {} failed: {}", address, message);
                    this.balances.set(Vec::new());
                    this.transactions.set(Vec::new());
                    this.error.set(Some(message));
                }
            }
            this.loaded.set(true);
            this.in_flight.write().finish();
        });
    }

    /// Puts a freshly recorded transaction at the top of the history.
    pub fn prepend(&self, tx: Transaction) {
        let mut transactions = self.transactions;
        transactions.write().insert(0, tx);
    }

    pub fn balances(&self) -> Vec<Coin> {
        self.balances.read().clone()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.read().clone()
    }

    /// Height of the newest known transaction, if any.
    pub fn latest_height(&self) -> Option<u64> {
        self.transactions.read().first().map(|tx| tx.height)
    }

    /// True while the first load for this screen is still running.
    pub fn loading(&self) -> bool {
        self.busy() && !*self.loaded.read()
    }

    /// True while a load runs on top of an already shown snapshot.
    pub fn refreshing(&self) -> bool {
        self.busy() && *self.loaded.read()
    }

    /// True while any load is running.
    pub fn busy(&self) -> bool {
        self.in_flight.read().is_busy()
    }

    pub fn loaded(&self) -> bool {
        *self.loaded.read()
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }
}

pub fn use_wallet() -> WalletLoader {
    WalletLoader {
        balances: use_signal(Vec::new),
        transactions: use_signal(Vec::new),
        in_flight: use_signal(InFlight::default),
        loaded: use_signal(|| false),
        error: use_signal(|| None),
    }
}

#[cfg(test)]
mod tests {
    use api::fixtures;

    use super::*;

    #[test]
    fn both_halves_succeed() {
        let address = fixtures::DEMO_ADDRESS;
        let combined = combine_wallet_results::<String>(
            Ok(fixtures::balances(address)),
            Ok(fixtures::transactions(address)),
        );
        let (balances, transactions) = combined.unwrap();
        assert_eq!(balances.len(), 3);
        assert_eq!(transactions.len(), 3);
    }

    #[test]
    fn a_failed_history_discards_the_balances() {
        let combined = combine_wallet_results(
            Ok(fixtures::balances(fixtures::DEMO_ADDRESS)),
            Err("Failed to fetch transactions from API"),
        );
        assert_eq!(
            combined.unwrap_err(),
            "Failed to fetch transactions from API"
        );
    }

    #[test]
    fn the_balance_error_is_reported_first() {
        let combined = combine_wallet_results::<&str>(
            Err("Failed to fetch balances from API"),
            Err("Failed to fetch transactions from API"),
        );
        assert_eq!(combined.unwrap_err(), "Failed to fetch balances from API");
    }

    #[test]
    fn overlapping_loads_stay_busy_until_the_last_one_finishes() {
        let mut in_flight = InFlight::default();
        assert!(!in_flight.is_busy());

        in_flight.start(); // refresh
        in_flight.start(); // wallet switch
        in_flight.finish();
        assert!(in_flight.is_busy());

        in_flight.finish();
        assert!(!in_flight.is_busy());

        in_flight.finish();
        assert_eq!(in_flight, InFlight::default());
    }
}
