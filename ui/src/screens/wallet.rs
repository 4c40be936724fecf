//=============================================================================
// File: src/screens/wallet.rs
//=============================================================================
use api::fixtures::demo_wallet;
use api::fixtures::DEFAULT_WALLET;
use api::fixtures::DEMO_WALLETS;
use api::model::DemoWallet;
use api::transfer::TransferRequest;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::coin_amount::CoinAmount;
use crate::components::empty_state::EmptyState;
use crate::components::notice::Notice;
use crate::components::notice::NoticeKind;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::CopyButton;
use crate::components::pico::Grid;
use crate::components::transactions_table::TransactionsTable;
use crate::hooks::use_wallet::use_wallet;
use crate::hooks::use_wallet::WalletLoader;

const SEND_SUCCESS: &str =
    "Demo transfer recorded. In production this will submit a real transaction.";

/// The demo send form. Only the server decides whether a transfer is allowed.
#[component]
fn DemoSendForm(wallet: WalletLoader) -> Element {
    let mut open = use_signal(|| false);
    let mut request = use_signal(TransferRequest::default);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);

    let to = request.read().to.clone();
    let amount = request.read().amount.clone();
    let denom = request.read().denom.clone();

    rsx! {
        Card {
            header {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0;", "Send (Demo)" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| open.toggle(),
                    if open() { "Hide Form" } else { "Open Form" }
                }
            }

            if open() {
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let current = request.read().clone();
                        let latest_height = wallet.latest_height();
                        spawn(async move {
                            sending.set(true);
                            error.set(None);
                            success.set(None);
                            match api::demo_transfer(current, latest_height).await {
                                Ok(tx) => {
                                    wallet.prepend(tx);
                                    success.set(Some(SEND_SUCCESS.to_string()));
                                }
                                Err(e) => {
                                    dioxus_logger::tracing::warn!("demo transfer rejected: {}", e);
                                    error.set(Some(e.to_string()));
                                }
                            }
                            sending.set(false);
                        });
                    },
                    label {
                        "To Address"
                        input {
                            r#type: "text",
                            value: "{to}",
                            placeholder: "ciphermint1...",
                            oninput: move |event| request.write().to = event.value().trim().to_string(),
                        }
                    }
                    div {
                        class: "grid",
                        label {
                            "Amount"
                            input {
                                r#type: "text",
                                inputmode: "decimal",
                                value: "{amount}",
                                placeholder: "0.00",
                                oninput: move |event| request.write().amount = event.value().trim().to_string(),
                            }
                        }
                        label {
                            "Asset"
                            select {
                                value: "{denom}",
                                onchange: move |event| request.write().denom = event.value(),
                                option { value: "ucmint", "CMINT" }
                                option { value: "urackd", "RACKD" }
                            }
                        }
                    }

                    if let Some(message) = error() {
                        Notice { message, kind: NoticeKind::Error }
                    }
                    if let Some(message) = success() {
                        Notice { message, kind: NoticeKind::Success }
                    }

                    button {
                        r#type: "submit",
                        disabled: sending(),
                        "aria-busy": if sending() { "true" } else { "false" },
                        if sending() { "Submitting…" } else { "Send (Demo Only)" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn WalletScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let wallet = use_wallet();

    // Live mode keeps whatever address the dashboard loaded; demo mode always
    // lands on one of the demo wallets.
    let initial_address = {
        let current = app_state_mut.active_address.peek().clone();
        if app_state.demo_mode() && demo_wallet(&current).is_none() {
            DEFAULT_WALLET.address.to_string()
        } else {
            current
        }
    };

    use_hook(move || {
        if app_state_mut.active_address.peek().as_str() != initial_address {
            app_state_mut.active_address.set(initial_address.clone());
        }
        if !initial_address.is_empty() {
            wallet.load(initial_address);
        }
    });

    let address = app_state_mut.active_address.read().clone();
    let selected: Option<DemoWallet> = demo_wallet(&address);
    let balances = wallet.balances();

    let mut select_wallet = move |target: DemoWallet| {
        app_state_mut.active_address.set(target.address.to_string());
        wallet.load(target.address.to_string());
    };

    rsx! {
        div {
            hgroup {
                h2 { "Wallet" }
                p { "Multi-wallet view for the CipherMint ecosystem." }
            }

            if let Some(message) = wallet.error() {
                Notice { message, kind: NoticeKind::Error }
            }

            Grid {
                Card {
                    h3 { "Select Wallet" }
                    p { "Switch between demo wallets to see how balances and activity update." }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 0.5rem;",
                        for candidate in DEMO_WALLETS {
                            button {
                                key: "{candidate.id}",
                                r#type: "button",
                                class: if selected == Some(candidate) { "" } else { "outline" },
                                disabled: wallet.loading() && selected == Some(candidate),
                                onclick: move |_| select_wallet(candidate),
                                "{candidate.label}"
                            }
                        }
                    }
                    p {
                        style: "margin-top: 1rem; display: flex; align-items: center; gap: 0.5rem; word-break: break-all;",
                        code { "{address}" }
                        if !address.is_empty() {
                            CopyButton { text_to_copy: address.clone() }
                        }
                    }
                    if let Some(selected) = selected {
                        small { "{selected.description}" }
                    }
                }

                Card {
                    header {
                        style: "display: flex; justify-content: space-between; align-items: center;",
                        h3 { style: "margin: 0;", "Balances" }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            busy: wallet.refreshing(),
                            disabled: address.is_empty(),
                            on_click: move |_| {
                                let address = app_state_mut.active_address.peek().clone();
                                wallet.load(address);
                            },
                            if wallet.refreshing() { "Refreshing…" } else { "Refresh" }
                        }
                    }

                    if balances.is_empty() {
                        if wallet.loading() {
                            p { "Loading balances…" }
                            progress {}
                        } else {
                            EmptyState { title: "No balances found.".to_string() }
                        }
                    } else {
                        table {
                            tbody {
                                for coin in balances.iter().cloned() {
                                    tr {
                                        key: "{coin.denom}",
                                        td { CoinAmount { coin: coin.clone() } }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            DemoSendForm { wallet }

            TransactionsTable {
                transactions: wallet.transactions(),
                loading: wallet.loading(),
            }
        }
    }
}
