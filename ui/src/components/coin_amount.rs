//! A component for displaying token amounts in whole units.

use api::model::Coin;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum CoinFormat {
    /// Ticker label, e.g. "RACKD".
    #[default]
    Label,
    /// The on-chain denomination, e.g. "urackd".
    RawDenom,
}

/// Displays a converted amount ("84.5 RACKD"). The exact smallest-unit amount
/// is kept in the tooltip so nothing is lost to rounding.
#[component]
pub fn CoinAmount(coin: Coin, #[props(default)] format: CoinFormat) -> Element {
    let amount = coin.display_amount();
    let suffix = match format {
        CoinFormat::Label => format!(" {}", coin.label()),
        CoinFormat::RawDenom => format!(" {}", coin.denom),
    };
    let tooltip = format!("{} {}", coin.amount, coin.denom);

    rsx! {
        span {
            title: "{tooltip}",
            "{amount}{suffix}"
        }
    }
}
