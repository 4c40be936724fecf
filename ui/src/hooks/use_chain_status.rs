use std::fmt::Display;

use api::model::ChainStatus;
use dioxus::prelude::*;

/// The status and error banner to show after a fetch.
///
/// A failure never leaves the previous snapshot on screen: the status is
/// cleared and only the message remains.
pub fn chain_status_snapshot<E: Display>(
    result: Result<ChainStatus, E>,
) -> (Option<ChainStatus>, Option<String>) {
    match result {
        Ok(status) => (Some(status), None),
        Err(e) => (None, Some(e.to_string())),
    }
}

/// The latest chain status snapshot held by one screen.
#[derive(Clone, Copy, PartialEq)]
pub struct ChainStatusLoader {
    status: Signal<Option<ChainStatus>>,
    error: Signal<Option<String>>,
    refreshing: Signal<bool>,
}

impl ChainStatusLoader {
    /// Fetches the status again. A failure clears the shown status.
    pub fn refresh(&self) {
        let mut this = *self;
        spawn(async move {
            this.refreshing.set(true);
            let (status, error) = chain_status_snapshot(api::fetch_chain_status().await);
            if let Some(message) = &error {
                dioxus_logger::tracing::warn!("chain status failed: {}", message);
            }
            this.status.set(status);
            this.error.set(error);
            this.refreshing.set(false);
        });
    }

    pub fn status(&self) -> Option<ChainStatus> {
        self.status.read().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    pub fn refreshing(&self) -> bool {
        *self.refreshing.read()
    }
}

/// Creates the loader and fires the first fetch when the screen mounts.
pub fn use_chain_status() -> ChainStatusLoader {
    let loader = ChainStatusLoader {
        status: use_signal(|| None),
        error: use_signal(|| None),
        refreshing: use_signal(|| false),
    };
    use_hook(move || loader.refresh());
    loader
}

#[cfg(test)]
mod tests {
    use api::fixtures;

    use super::*;

    #[test]
    fn a_fresh_status_clears_the_error() {
        let (status, error) = chain_status_snapshot::<String>(Ok(fixtures::chain_status()));
        assert_eq!(status, Some(fixtures::chain_status()));
        assert_eq!(error, None);
    }

    #[test]
    fn a_failure_clears_the_status() {
        let (status, error) = chain_status_snapshot::<&str>(Err("Failed to fetch chain status from API"));
        assert_eq!(status, None);
        assert_eq!(
            error.as_deref(),
            Some("Failed to fetch chain status from API")
        );
    }
}
