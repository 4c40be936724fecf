// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::fixtures::DEMO_ADDRESS;
use api::model::AppInfo;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Container;
use screens::chain::ChainHealthScreen;
use screens::dashboard::DashboardScreen;
use screens::token::TokenScreen;
use screens::wallet::WalletScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum Screen {
    #[default]
    Dashboard,
    Wallet,
    Token,
    ChainHealth,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Wallet => "Wallet",
            Screen::Token => "Rackdog",
            Screen::ChainHealth => "Chain Health",
        }
    }

    /// One-line hint shown as the link tooltip.
    fn description(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Overview of wallets & chain",
            Screen::Wallet => "Details for a single address",
            Screen::Token => "Flagship RACKD token view",
            Screen::ChainHealth => "Network status & metrics",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 4] = [
    Screen::Dashboard,
    Screen::Wallet,
    Screen::Token,
    Screen::ChainHealth,
];

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        key: "{screen.name()}",
                        a {
                            href: "#",
                            title: screen.description(),
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

/// The narrow-screen "hamburger" dropdown menu component.
#[component]
fn HamburgerMenu(active_screen: Signal<Screen>) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger-menu-container",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                "≡"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for screen in ALL_SCREENS {
                        a {
                            key: "{screen.name()}",
                            class: if active_screen() == screen { "custom-dropdown-item active-tab" } else { "custom-dropdown-item" },
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                                is_open.set(false);
                            },
                            "{screen.name()}"
                            br {}
                            small { "{screen.description()}" }
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header {
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .brand { margin: 0; font-size: 1.4rem; }
    .brand span { color: var(--pico-primary); }

    /* --- NAVIGATION TABS --- */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-radius: 10px 10px 0 0;
        border-top: 3px solid color-mix(in srgb, var(--pico-primary), transparent 80%);
        background: linear-gradient(
            to bottom,
            color-mix(in srgb, var(--pico-primary), transparent 95%),
            transparent
        );
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- NARROW SCREENS --- */
    .hamburger-menu-container { display: none; position: relative; }
    .menu-backdrop { position: fixed; inset: 0; z-index: 10; }
    .custom-dropdown-menu {
        position: absolute;
        right: 0;
        z-index: 20;
        min-width: 16rem;
        padding: 0.5rem 0;
    }
    .custom-dropdown-item { display: block; padding: 0.5rem 1rem; text-decoration: none; }
    .custom-dropdown-item.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
        border-left: 4px solid var(--pico-primary);
        padding-left: calc(1rem - 4px);
    }

    @media (max-width: 768px) {
        .tab-menu { display: none; }
        .hamburger-menu-container { display: block; }
    }

    .app-footer { margin-top: 2rem; text-align: center; color: var(--pico-muted-color); }
"#;

    rsx! {
        document::Title { "CipherMint Chain Dashboard" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let app_info_future = use_server_future(move || async move { api::app_info().await })?;

    let body = match &*app_info_future.read() {
        Some(Ok(app_info)) => {
            dioxus_logger::tracing::info!("app info: {:?}", app_info);
            rsx! {
                LoadedApp {
                    app_info: app_info.clone(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_info: AppInfo) -> Element {
    let demo_mode = app_info.demo_mode;
    let footer = if demo_mode {
        "CipherMint Studios · Demo build".to_string()
    } else {
        format!("CipherMint Studios · {}", app_info.api_base_url)
    };

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(app_info.clone()));

    // Demo mode starts with the primary demo wallet selected.
    let active_address = use_signal(|| {
        if demo_mode {
            DEMO_ADDRESS.to_string()
        } else {
            String::new()
        }
    });
    use_context_provider(|| AppStateMut { active_address });

    let active_screen = use_signal(Screen::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    class: "brand",
                                    span { "CipherMint" }
                                    " Hub"
                                }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                            li {
                                HamburgerMenu {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Dashboard => rsx! {
                            DashboardScreen {}
                        },
                        Screen::Wallet => rsx! {
                            WalletScreen {}
                        },
                        Screen::Token => rsx! {
                            TokenScreen {}
                        },
                        Screen::ChainHealth => rsx! {
                            ChainHealthScreen {}
                        },
                    }
                }
                footer {
                    class: "app-footer",
                    small { "{footer}" }
                }
            }
        }
    }
}
