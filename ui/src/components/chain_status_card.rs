use api::display::format_timestamp;
use api::display::group_digits;
use api::model::ChainStatus;
use dioxus::prelude::*;

use crate::components::notice::Notice;
use crate::components::notice::NoticeKind;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;

#[component]
fn StatusRow(label: &'static str, value: String) -> Element {
    rsx! {
        tr {
            th { scope: "row", "{label}" }
            td { "{value}" }
        }
    }
}

/// Chain id, height, latest block time and node version, with a refresh button.
#[component]
pub fn ChainStatusCard(
    status: Option<ChainStatus>,
    #[props(default)] error: Option<String>,
    #[props(default)] refreshing: bool,
    on_refresh: EventHandler<()>,
) -> Element {
    rsx! {
        Card {
            header {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0;", "Chain Status" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    busy: refreshing,
                    on_click: move |_| on_refresh.call(()),
                    if refreshing { "Refreshing..." } else { "Refresh" }
                }
            }

            if let Some(message) = error.clone() {
                Notice { message, kind: NoticeKind::Error }
            }

            match status {
                Some(status) => {
                    let block_time = if status.latest_block_time.is_empty() {
                        "—".to_string()
                    } else {
                        format_timestamp(&status.latest_block_time)
                    };
                    rsx! {
                        table {
                            tbody {
                                StatusRow { label: "Chain ID", value: status.chain_id.clone() }
                                StatusRow { label: "Height", value: group_digits(status.latest_block_height) }
                                StatusRow { label: "Latest Block Time", value: block_time }
                                StatusRow { label: "Node Version", value: status.node_version.clone() }
                            }
                        }
                    }
                }
                None if error.is_none() && refreshing => rsx! {
                    progress {}
                },
                None if error.is_none() => rsx! {
                    p { class: "muted", "No chain data loaded yet." }
                },
                None => rsx! {},
            }
        }
    }
}
