use serde::{Deserialize, Serialize};

use crate::model::path::LearningPath;
use crate::model::skill_gap::SkillGap;

/// The authenticated learner's profile as supplied by the session collaborator.
///
/// Read-only to the dashboard. `skill_gaps` arrives pre-ordered by upstream
/// priority and `completion_rate` is an integer percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    name: String,
    #[serde(default)]
    current_path: Option<LearningPath>,
    #[serde(default)]
    skill_gaps: Vec<SkillGap>,
    #[serde(default)]
    completion_rate: i32,
}

impl Learner {
    /// Creates a learner with no path, no skill gaps and a 0% completion rate.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_path: None,
            skill_gaps: Vec::new(),
            completion_rate: 0,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: LearningPath) -> Self {
        self.current_path = Some(path);
        self
    }

    #[must_use]
    pub fn with_skill_gaps(mut self, skill_gaps: Vec<SkillGap>) -> Self {
        self.skill_gaps = skill_gaps;
        self
    }

    #[must_use]
    pub fn with_completion_rate(mut self, completion_rate: i32) -> Self {
        self.completion_rate = completion_rate;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&LearningPath> {
        self.current_path.as_ref()
    }

    #[must_use]
    pub fn has_path(&self) -> bool {
        self.current_path.is_some()
    }

    #[must_use]
    pub fn skill_gaps(&self) -> &[SkillGap] {
        &self.skill_gaps
    }

    #[must_use]
    pub fn completion_rate(&self) -> i32 {
        self.completion_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GapPriority, LearningPathId, PathStatus, SkillGapId};

    #[test]
    fn builder_sets_fields() {
        let path = LearningPath::new(
            LearningPathId::new(1),
            "Cloud Basics",
            12.0,
            25,
            PathStatus::InProgress,
        );
        let gap = SkillGap::new(SkillGapId::new(1), "AWS", 1, 3, GapPriority::High);
        let learner = Learner::new("Ava")
            .with_path(path.clone())
            .with_skill_gaps(vec![gap.clone()])
            .with_completion_rate(40);

        assert_eq!(learner.name(), "Ava");
        assert!(learner.has_path());
        assert_eq!(learner.current_path(), Some(&path));
        assert_eq!(learner.skill_gaps(), &[gap]);
        assert_eq!(learner.completion_rate(), 40);
    }

    #[test]
    fn deserializes_minimal_record_as_new_learner() {
        let learner: Learner = serde_json::from_str(r#"{"name":"Bo","currentPath":null}"#).unwrap();
        assert!(!learner.has_path());
        assert!(learner.skill_gaps().is_empty());
        assert_eq!(learner.completion_rate(), 0);
    }
}
