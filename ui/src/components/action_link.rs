use dioxus::prelude::*;

use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    pub state: Signal<Screen>,

    pub to: Screen,

    pub children: Element,
}

/// A link that switches screens instead of navigating the browser.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let mut state = props.state;
    let target = props.to;
    rsx! {
        a {
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                state.set(target);
            },
            {props.children}
        }
    }
}
