//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Holds the state that outlives a single screen, so switching between the
/// dashboard and the wallet view keeps the same address selected.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The address whose balances and history are shown. Empty until chosen.
    pub active_address: Signal<String>,
}
