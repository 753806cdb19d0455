use learner_core::{GapPriority, SkillGap, SkillGapId};
use services::{
    DashboardViewModel, OnboardingAction, PathSummary, Stat, StatTag, WorkflowStep,
};

/// One summary tile with its value already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub label: &'static str,
    pub value: String,
    /// CSS hook for the tile's accent color.
    pub tone: &'static str,
}

impl From<&Stat> for StatTileVm {
    fn from(stat: &Stat) -> Self {
        let tone = match stat.tag {
            StatTag::Hours => "stat-hours",
            StatTag::SkillGaps => "stat-gaps",
            StatTag::Completion => "stat-completion",
        };
        Self {
            label: stat.label,
            value: stat.value.to_string(),
            tone,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnboardingBannerVm {
    pub title: &'static str,
    pub body: &'static str,
    pub action: OnboardingAction,
}

impl OnboardingBannerVm {
    fn for_action(action: OnboardingAction) -> Self {
        Self {
            title: "Welcome to your learning dashboard!",
            body: "Your profile has been successfully created. Take your first assessment to get personalized learning recommendations based on your skills and career goals.",
            action,
        }
    }

    #[must_use]
    pub fn cta_label(&self) -> &'static str {
        self.action.label()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowStepVm {
    pub label: &'static str,
    pub class: &'static str,
}

impl From<&WorkflowStep> for WorkflowStepVm {
    fn from(step: &WorkflowStep) -> Self {
        let class = if step.active {
            "step active"
        } else if step.done {
            "step done"
        } else {
            "step"
        };
        Self {
            label: step.stage.label(),
            class,
        }
    }
}

/// Path card contents; the placeholder variant fills the same slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathCardVm {
    pub has_path: bool,
    pub title: String,
    pub status: &'static str,
    pub estimated_time: String,
    pub completion: String,
}

impl From<&PathSummary> for PathCardVm {
    fn from(summary: &PathSummary) -> Self {
        match summary {
            PathSummary::Active(path) => Self {
                has_path: true,
                title: path.title.clone(),
                status: path.status.label(),
                estimated_time: format!("{}h", path.estimated_hours),
                completion: format!("{}%", path.progress),
            },
            PathSummary::NotStarted(placeholder) => Self {
                has_path: false,
                title: "No active learning path. Complete your assessment to get recommendations."
                    .to_owned(),
                status: placeholder.status,
                estimated_time: placeholder.estimated_time.to_owned(),
                completion: format!("{}%", placeholder.completion_percent),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillGapCardVm {
    pub id: SkillGapId,
    pub skill: String,
    pub levels: String,
    pub priority: &'static str,
    pub priority_class: &'static str,
}

impl From<&SkillGap> for SkillGapCardVm {
    fn from(gap: &SkillGap) -> Self {
        let priority_class = match gap.priority() {
            GapPriority::High => "priority-high",
            GapPriority::Medium => "priority-medium",
            GapPriority::Low => "priority-low",
        };
        Self {
            id: gap.id(),
            skill: gap.skill().to_owned(),
            levels: format!("Level {} → {}", gap.current_level(), gap.target_level()),
            priority: gap.priority().label(),
            priority_class,
        }
    }
}

/// Everything the dashboard page renders, flattened to display strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardPageVm {
    pub greeting: String,
    pub subtitle: &'static str,
    pub onboarding: Option<OnboardingBannerVm>,
    pub stats: Vec<StatTileVm>,
    pub workflow: Vec<WorkflowStepVm>,
    pub path: PathCardVm,
    pub skill_gaps: Vec<SkillGapCardVm>,
}

#[must_use]
pub fn map_dashboard(vm: &DashboardViewModel) -> DashboardPageVm {
    // The banner is gated on newness alone, never on progress.
    let onboarding = if vm.is_new_user {
        vm.onboarding
            .call_to_action
            .map(OnboardingBannerVm::for_action)
    } else {
        None
    };

    DashboardPageVm {
        greeting: vm.greeting.clone(),
        subtitle: vm.onboarding.subtitle,
        onboarding,
        stats: vm.stats.iter().map(StatTileVm::from).collect(),
        workflow: vm.workflow.steps.iter().map(WorkflowStepVm::from).collect(),
        path: PathCardVm::from(&vm.path_summary),
        skill_gaps: vm.top_skill_gaps.iter().map(SkillGapCardVm::from).collect(),
    }
}
