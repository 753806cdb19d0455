mod metrics;
mod onboarding;
mod prioritizer;
mod service;
mod state;
mod view;
mod workflow;

// Public API of the dashboard subsystem.
pub use metrics::{Stat, StatTag, StatValue, derive_stats, hours_completed};
pub use onboarding::{Onboarding, OnboardingAction, classify, is_new_user};
pub use prioritizer::{TOP_SKILL_GAP_LIMIT, top_skill_gaps};
pub use service::DashboardService;
pub use state::DashboardState;
pub use view::{
    ActivePathSummary, DashboardViewModel, NoPathPlaceholder, PathSummary, build_dashboard,
};
pub use workflow::{WorkflowProgress, WorkflowStage, WorkflowStep};
