use api::display::shorten_hash;
use dioxus::prelude::*;

use crate::components::pico::CopyButton;

/// A small helper component to display a hash abbreviated, with the full
/// value as tooltip and a copy button.
#[component]
pub fn HashDisplay(hash: String) -> Element {
    let abbreviated = shorten_hash(&hash);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem;",
            code {
                title: "{hash}",
                "{abbreviated}"
            }
            if !hash.is_empty() {
                CopyButton {
                    text_to_copy: hash.clone(),
                }
            }
        }
    }
}
