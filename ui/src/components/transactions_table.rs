use api::display::format_timestamp;
use api::model::Transaction;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::hash_display::HashDisplay;
use crate::components::pico::Card;

#[component]
fn TransactionRow(tx: Transaction) -> Element {
    let pill_style = if tx.success {
        "color: var(--pico-ins-color);"
    } else {
        "color: var(--pico-del-color);"
    };
    let time = format_timestamp(&tx.timestamp);

    rsx! {
        tr {
            td { HashDisplay { hash: tx.hash.clone() } }
            td { "{tx.height}" }
            td { title: "{tx.timestamp}", "{time}" }
            td {
                mark {
                    style: "background: none; font-weight: bold; {pill_style}",
                    "{tx.status}"
                }
            }
        }
    }
}

/// Recent transactions, newest first.
#[component]
pub fn TransactionsTable(transactions: Vec<Transaction>, loading: bool) -> Element {
    rsx! {
        Card {
            h3 { "Recent Transactions" }

            if transactions.is_empty() {
                if loading {
                    p { "Loading recent activity…" }
                    progress {}
                } else {
                    EmptyState {
                        title: "No transactions yet for this wallet.".to_string(),
                        description: "Transfers sent from this address will show up here.".to_string(),
                    }
                }
            } else {
                div {
                    class: "overflow-auto",
                    table {
                        class: "striped",
                        thead {
                            tr {
                                th { "Hash" }
                                th { "Height" }
                                th { "Time" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for tx in transactions.iter().cloned() {
                                TransactionRow {
                                    key: "{tx.hash}",
                                    tx: tx.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
