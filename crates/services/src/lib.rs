#![forbid(unsafe_code)]

pub mod dashboard;
pub mod error;
pub mod learner_state;

pub use error::LearnerStateError;
pub use learner_state::{
    InMemoryLearnerState, LearnerStateProvider, load_learner_file, load_learner_json,
};

pub use dashboard::{
    ActivePathSummary, DashboardService, DashboardState, DashboardViewModel, NoPathPlaceholder,
    Onboarding, OnboardingAction, PathSummary, Stat, StatTag, StatValue, TOP_SKILL_GAP_LIMIT,
    WorkflowProgress, WorkflowStage, WorkflowStep, build_dashboard,
};
