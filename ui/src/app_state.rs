use api::model::AppInfo;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub app_info: AppInfo,
}

/// Read-only state fetched once when the app loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(app_info: AppInfo) -> Self {
        Self(Arc::new(AppStateData { app_info }))
    }

    pub fn demo_mode(&self) -> bool {
        self.app_info.demo_mode
    }
}
