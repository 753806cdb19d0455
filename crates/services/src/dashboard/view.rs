use learner_core::{Learner, LearningPath, LearningPathId, PathStatus, SkillGap};

use super::metrics::{Stat, derive_stats};
use super::onboarding::{Onboarding, classify};
use super::prioritizer::top_skill_gaps;
use super::workflow::WorkflowProgress;

/// Display fields of the active path, passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePathSummary {
    pub id: LearningPathId,
    pub title: String,
    pub estimated_hours: f64,
    pub progress: i32,
    pub status: PathStatus,
}

impl From<&LearningPath> for ActivePathSummary {
    fn from(path: &LearningPath) -> Self {
        Self {
            id: path.id(),
            title: path.title().to_owned(),
            estimated_hours: path.estimated_hours(),
            progress: path.progress(),
            status: path.status(),
        }
    }
}

/// Fixed values shown in place of a path card before any path exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoPathPlaceholder {
    pub status: &'static str,
    pub estimated_time: &'static str,
    pub completion_percent: u8,
}

impl NoPathPlaceholder {
    pub const SENTINEL: NoPathPlaceholder = NoPathPlaceholder {
        status: "Not Started",
        estimated_time: "TBD",
        completion_percent: 0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathSummary {
    Active(ActivePathSummary),
    NotStarted(NoPathPlaceholder),
}

/// Render-ready projection of a learner record.
///
/// Rebuilt from scratch whenever the learner changes and never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub greeting: String,
    pub stats: [Stat; 3],
    pub is_new_user: bool,
    pub onboarding: Onboarding,
    pub workflow: WorkflowProgress,
    pub top_skill_gaps: Vec<SkillGap>,
    pub path_summary: PathSummary,
}

#[must_use]
pub fn build_dashboard(learner: &Learner) -> DashboardViewModel {
    let onboarding = classify(learner);
    let path_summary = match learner.current_path() {
        Some(path) => PathSummary::Active(ActivePathSummary::from(path)),
        None => PathSummary::NotStarted(NoPathPlaceholder::SENTINEL),
    };

    DashboardViewModel {
        greeting: format!("Welcome back, {}", learner.name()),
        stats: derive_stats(learner),
        is_new_user: onboarding.is_new_user,
        onboarding,
        workflow: WorkflowProgress::for_learner(learner),
        top_skill_gaps: top_skill_gaps(learner.skill_gaps()).to_vec(),
        path_summary,
    }
}
