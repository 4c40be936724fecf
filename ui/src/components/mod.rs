//! Shared display components. They render what they are given and hold no
//! data of their own beyond transient UI state.
pub mod action_link;
pub mod chain_status_card;
pub mod coin_amount;
pub mod empty_state;
pub mod hash_display;
pub mod notice;
pub mod pico;
pub mod transactions_table;
pub mod wallet_form;
pub mod wallet_summary;
