//=============================================================================
// File: src/screens/token.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Accordion;
use crate::components::pico::Card;
use crate::components::pico::Grid;

const UTILITY_PLAN: [&str; 4] = [
    "Access token for gated communities, creator content, and special game modes.",
    "Rewards engine for in-game performance, quests, and creator milestones.",
    "Fee and routing token inside CipherMint-powered apps and future layers.",
    "Loyalty rail for brands: hold RACKD to unlock perks, discounts, or in-world boosts.",
];

const DEMO_TOKENOMICS: [(&str, &str); 4] = [
    ("Demo total supply", "100,000,000 RACKD"),
    ("Demo circulating", "84,500,000 RACKD"),
    ("Ecosystem / growth", "10%"),
    ("Team & advisors (locked)", "10%"),
];

/// Static overview of the Rackdog (RACKD) token.
#[component]
pub fn TokenScreen() -> Element {
    rsx! {
        div {
            hgroup {
                h2 { "Rackdog Token Overview" }
                p { "Flagship ecosystem token (RACKD) for the CipherMint Chain." }
            }

            Grid {
                section {
                    Card {
                        h3 { "Positioning" }
                        p {
                            "Rackdog (RACKD) is the first force released from the CipherMint Chain. It is intentionally designed as a "
                            strong { "meme + utility hybrid" }
                            " token: culturally expressive like a meme coin, but with real hooks into creator and gaming economies."
                        }
                        p {
                            "The goal is to give brands, games, and communities a "
                            strong { "ready-made asset" }
                            " they can plug into, instead of forcing each partner to invent their own token from scratch."
                        }
                    }
                    Card {
                        h3 { "Utility Plan" }
                        ul {
                            for item in UTILITY_PLAN {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                }
                aside {
                    Card {
                        h3 { "Demo Tokenomics" }
                        table {
                            tbody {
                                for (label, value) in DEMO_TOKENOMICS {
                                    tr {
                                        key: "{label}",
                                        th { scope: "row", "{label}" }
                                        td { style: "text-align: right;", "{value}" }
                                    }
                                }
                            }
                        }
                        small { "Numbers shown here are for demo purposes and can be tuned before a public launch." }
                    }
                    Accordion {
                        title: "Why Rackdog first?".to_string(),
                        p {
                            "Launching Rackdog first gives CipherMint a single, recognizable asset that communities can rally around, while still keeping the chain neutral for future brands and IP to build on without conflict."
                        }
                    }
                }
            }
        }
    }
}
