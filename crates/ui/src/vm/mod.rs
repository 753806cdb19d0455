mod dashboard_vm;

pub use dashboard_vm::{
    DashboardPageVm, OnboardingBannerVm, PathCardVm, SkillGapCardVm, StatTileVm, WorkflowStepVm,
    map_dashboard,
};
