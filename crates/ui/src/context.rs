use std::sync::Arc;

use services::{DashboardService, LearnerStateProvider};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn learner_state(&self) -> Arc<dyn LearnerStateProvider>;
}

#[derive(Clone)]
pub struct AppContext {
    dashboard: DashboardService,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            dashboard: DashboardService::new(app.learner_state()),
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
