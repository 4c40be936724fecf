use dioxus::prelude::*;

/// Address entry for loading a wallet.
///
/// Input is trimmed as it is typed. Submitting is blocked while a load is in
/// flight, and in live mode also while the field is empty.
#[component]
pub fn WalletForm(
    address: String,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    loading: bool,
    demo_mode: bool,
) -> Element {
    let placeholder = if demo_mode {
        "Demo address active"
    } else {
        "ciphermint1..."
    };
    let submit_label = if loading {
        "Loading..."
    } else if demo_mode {
        "Run Demo"
    } else {
        "Load Wallet"
    };
    let disabled = loading || (address.is_empty() && !demo_mode);

    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if !loading {
                    on_submit.call(());
                }
            },
            label {
                "CipherMint Address"
                div {
                    role: "group",
                    input {
                        r#type: "text",
                        value: "{address}",
                        placeholder: "{placeholder}",
                        oninput: move |event| on_change.call(event.value().trim().to_string()),
                    }
                    button {
                        r#type: "submit",
                        disabled,
                        "aria-busy": if loading { "true" } else { "false" },
                        "{submit_label}"
                    }
                }
            }
            if demo_mode {
                small {
                    "Demo mode is enabled. Data shown is simulated for presentation."
                }
            }
        }
    }
}
