use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn style(&self) -> &'static str {
        match self {
            NoticeKind::Info => "border-left: 4px solid var(--pico-primary); background: var(--pico-card-sectioning-background-color);",
            NoticeKind::Success => "border-left: 4px solid var(--pico-ins-color); color: var(--pico-ins-color);",
            NoticeKind::Error => "border-left: 4px solid var(--pico-del-color); color: var(--pico-del-color);",
        }
    }
}

/// A one-line banner. Every failure in the app is shown through one of these.
#[component]
pub fn Notice(message: String, #[props(default)] kind: NoticeKind) -> Element {
    let role = if kind == NoticeKind::Error { "alert" } else { "status" };
    let style = format!(
        "padding: 0.5rem 1rem; border-radius: var(--pico-border-radius); {}",
        kind.style()
    );
    rsx! {
        p {
            role: "{role}",
            style: "{style}",
            "{message}"
        }
    }
}
