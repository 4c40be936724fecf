//=============================================================================
// File: src/screens/chain.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::chain_status_card::ChainStatusCard;
use crate::components::notice::Notice;
use crate::components::notice::NoticeKind;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::hooks::use_chain_status::use_chain_status;

#[component]
pub fn ChainHealthScreen() -> Element {
    let chain = use_chain_status();

    rsx! {
        div {
            hgroup {
                h2 { "Chain Health" }
                p { "High-level status view for the CipherMint network: block height, timing, and network identity." }
            }

            // The card stays quiet; the failure is shown once, above the grid.
            if let Some(message) = chain.error() {
                Notice { message, kind: NoticeKind::Error }
            }

            Grid {
                section {
                    ChainStatusCard {
                        status: chain.status(),
                        refreshing: chain.refreshing(),
                        on_refresh: move |_| chain.refresh(),
                    }
                }
                aside {
                    Card {
                        h3 { "Why this matters" }
                        p {
                            "For validators, partners, and investors, these metrics answer a simple question: "
                            strong { "is CipherMint up, healthy, and producing blocks?" }
                        }
                        p {
                            "This view will eventually surface validator counts, uptime scores, and latency metrics for exchanges, game studios, and infrastructure partners."
                        }
                    }
                }
            }
        }
    }
}
