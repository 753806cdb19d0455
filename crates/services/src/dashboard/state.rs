use learner_core::Learner;

use super::view::{DashboardViewModel, build_dashboard};

/// Presentation readiness of the dashboard.
///
/// A learner that was never supplied is indistinguishable from one that is
/// still loading.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(DashboardViewModel),
}

impl DashboardState {
    #[must_use]
    pub fn from_learner(learner: Option<&Learner>) -> Self {
        match learner {
            Some(learner) => DashboardState::Ready(build_dashboard(learner)),
            None => DashboardState::Loading,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    #[must_use]
    pub fn view_model(&self) -> Option<&DashboardViewModel> {
        match self {
            DashboardState::Ready(vm) => Some(vm),
            DashboardState::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_learner_is_loading() {
        let state = DashboardState::from_learner(None);
        assert!(state.is_loading());
        assert!(state.view_model().is_none());
    }

    #[test]
    fn present_learner_is_ready() {
        let learner = Learner::new("Ava");
        let state = DashboardState::from_learner(Some(&learner));
        assert_eq!(state.view_model().map(|vm| vm.greeting.as_str()), Some("Welcome back, Ava"));
    }
}
