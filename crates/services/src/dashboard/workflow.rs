use learner_core::Learner;

/// Where the learner stands in the assessment → path → learning journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkflowStage {
    Assessment,
    PathAssigned,
    Learning,
    Completed,
}

impl WorkflowStage {
    pub const ALL: [WorkflowStage; 4] = [
        WorkflowStage::Assessment,
        WorkflowStage::PathAssigned,
        WorkflowStage::Learning,
        WorkflowStage::Completed,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WorkflowStage::Assessment => "Take Assessment",
            WorkflowStage::PathAssigned => "Path Assigned",
            WorkflowStage::Learning => "Learning",
            WorkflowStage::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn for_learner(learner: &Learner) -> Self {
        match learner.current_path().map(|path| path.progress()) {
            None => WorkflowStage::Assessment,
            Some(progress) if progress <= 0 => WorkflowStage::PathAssigned,
            Some(progress) if progress < 100 => WorkflowStage::Learning,
            Some(_) => WorkflowStage::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowStep {
    pub stage: WorkflowStage,
    pub done: bool,
    pub active: bool,
}

/// Step list for the progress workflow widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowProgress {
    pub current: WorkflowStage,
    pub steps: [WorkflowStep; 4],
}

impl WorkflowProgress {
    #[must_use]
    pub fn for_learner(learner: &Learner) -> Self {
        let current = WorkflowStage::for_learner(learner);
        // The final stage counts as done once reached.
        let steps = WorkflowStage::ALL.map(|stage| WorkflowStep {
            stage,
            done: stage < current || (stage == current && stage == WorkflowStage::Completed),
            active: stage == current,
        });
        Self { current, steps }
    }
}
