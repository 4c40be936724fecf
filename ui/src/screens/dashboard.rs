//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use api::fixtures::DEMO_ADDRESS;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::chain_status_card::ChainStatusCard;
use crate::components::notice::Notice;
use crate::components::notice::NoticeKind;
use crate::components::transactions_table::TransactionsTable;
use crate::components::wallet_form::WalletForm;
use crate::components::wallet_summary::WalletSummary;
use crate::hooks::use_chain_status::use_chain_status;
use crate::hooks::use_wallet::use_wallet;
use crate::Screen;

/// Banner text for the current data mode.
pub(crate) fn mode_banner(demo_mode: bool) -> &'static str {
    if demo_mode {
        "Demo mode is enabled. Data is simulated for presentations. Connect to a live node to show real network data."
    } else {
        "Connected to a live CipherMint node."
    }
}

#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let active_screen = use_context::<Signal<Screen>>();

    let chain = use_chain_status();
    let wallet = use_wallet();
    // The address whose data is currently shown, as opposed to the one being typed.
    let mut shown_address = use_signal(String::new);

    let demo_mode = app_state.demo_mode();
    let address = app_state_mut.active_address.read().clone();

    let load_wallet = move |_: ()| {
        let mut address = app_state_mut.active_address.peek().clone();
        if address.is_empty() && demo_mode {
            address = DEMO_ADDRESS.to_string();
            app_state_mut.active_address.set(address.clone());
        }
        if address.is_empty() {
            return;
        }
        shown_address.set(address.clone());
        wallet.load(address);
    };

    rsx! {
        div {
            hgroup {
                h2 { "CipherMint Chain Dashboard" }
                p { "Unified view of CipherMint wallets, Rackdog balances, and live chain status." }
            }

            Notice {
                message: mode_banner(demo_mode).to_string(),
                kind: NoticeKind::Info,
            }

            ChainStatusCard {
                status: chain.status(),
                error: chain.error(),
                refreshing: chain.refreshing(),
                on_refresh: move |_| chain.refresh(),
            }

            WalletForm {
                address,
                on_change: move |value: String| app_state_mut.active_address.set(value),
                on_submit: load_wallet,
                loading: wallet.busy(),
                demo_mode,
            }

            if let Some(message) = wallet.error() {
                Notice { message, kind: NoticeKind::Error }
            }

            if wallet.loaded() && !shown_address().is_empty() {
                WalletSummary {
                    address: shown_address(),
                    balances: wallet.balances(),
                }
                TransactionsTable {
                    transactions: wallet.transactions(),
                    loading: wallet.busy(),
                }
            } else if wallet.loading() {
                progress {}
            }

            p {
                "Go to the "
                ActionLink { state: active_screen, to: Screen::Wallet, "wallet view" }
                ", check "
                ActionLink { state: active_screen, to: Screen::ChainHealth, "chain health" }
                " or read about the "
                ActionLink { state: active_screen, to: Screen::Token, "Rackdog token" }
                "."
            }
        }
    }
}
