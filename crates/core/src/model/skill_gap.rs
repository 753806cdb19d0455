use serde::{Deserialize, Serialize};

use crate::model::ids::SkillGapId;

/// Upstream priority bucket attached to a skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

impl GapPriority {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GapPriority::High => "High",
            GapPriority::Medium => "Medium",
            GapPriority::Low => "Low",
        }
    }
}

/// An identified deficiency between a learner's current and target skill level.
///
/// Dashboard derivations only look at `id` and the position of the gap in the
/// learner's list; the remaining fields are carried for the gap card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    id: SkillGapId,
    skill: String,
    current_level: u8,
    target_level: u8,
    priority: GapPriority,
}

impl SkillGap {
    #[must_use]
    pub fn new(
        id: SkillGapId,
        skill: impl Into<String>,
        current_level: u8,
        target_level: u8,
        priority: GapPriority,
    ) -> Self {
        Self {
            id,
            skill: skill.into(),
            current_level,
            target_level,
            priority,
        }
    }

    #[must_use]
    pub fn id(&self) -> SkillGapId {
        self.id
    }

    #[must_use]
    pub fn skill(&self) -> &str {
        &self.skill
    }

    #[must_use]
    pub fn current_level(&self) -> u8 {
        self.current_level
    }

    #[must_use]
    pub fn target_level(&self) -> u8 {
        self.target_level
    }

    #[must_use]
    pub fn priority(&self) -> GapPriority {
        self.priority
    }

    /// Levels still missing to reach the target; zero once the target is met.
    #[must_use]
    pub fn gap(&self) -> u8 {
        self.target_level.saturating_sub(self.current_level)
    }
}
