use api::model::Coin;
use dioxus::prelude::*;

use crate::components::coin_amount::CoinAmount;
use crate::components::coin_amount::CoinFormat;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::pico::CopyButton;

/// An address and its balances, one row per denomination.
#[component]
pub fn WalletSummary(address: String, balances: Vec<Coin>) -> Element {
    rsx! {
        Card {
            h3 { "Wallet Overview" }
            div {
                style: "display: flex; align-items: center; gap: 0.5rem; word-break: break-all;",
                code { "{address}" }
                if !address.is_empty() {
                    CopyButton { text_to_copy: address.clone() }
                }
            }

            if balances.is_empty() {
                EmptyState {
                    title: "No balances found.".to_string(),
                }
            } else {
                table {
                    style: "margin-top: 1rem;",
                    tbody {
                        for (label, coin) in balances.iter().map(|c| (c.label(), c.clone())) {
                            tr {
                                key: "{coin.denom}-{coin.amount}",
                                th { scope: "row", "{label}" }
                                td {
                                    style: "text-align: right;",
                                    CoinAmount { coin: coin.clone(), format: CoinFormat::RawDenom }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
