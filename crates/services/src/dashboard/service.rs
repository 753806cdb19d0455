use std::sync::Arc;

use crate::learner_state::LearnerStateProvider;

use super::state::DashboardState;
use super::view::build_dashboard;

/// Derives the dashboard from whatever learner the injected provider holds.
#[derive(Clone)]
pub struct DashboardService {
    learners: Arc<dyn LearnerStateProvider>,
}

impl DashboardService {
    #[must_use]
    pub fn new(learners: Arc<dyn LearnerStateProvider>) -> Self {
        Self { learners }
    }

    /// Snapshot the current learner and rebuild the view-model from it.
    #[must_use]
    pub fn load(&self) -> DashboardState {
        let Some(learner) = self.learners.current_learner() else {
            tracing::debug!("learner not loaded yet; dashboard stays in loading state");
            return DashboardState::Loading;
        };

        let vm = build_dashboard(&learner);
        tracing::debug!(
            learner = learner.name(),
            new_user = vm.is_new_user,
            skill_gaps = learner.skill_gaps().len(),
            "derived dashboard view-model"
        );
        DashboardState::Ready(vm)
    }
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService").finish_non_exhaustive()
    }
}
