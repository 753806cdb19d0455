use serde::{Deserialize, Serialize};

use crate::model::ids::LearningPathId;

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a learning path as reported by the curriculum backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl PathStatus {
    /// Human-readable label used by path cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PathStatus::NotStarted => "Not Started",
            PathStatus::InProgress => "In Progress",
            PathStatus::Completed => "Completed",
        }
    }
}

//
// ─── PATH ──────────────────────────────────────────────────────────────────────
//

/// A structured curriculum with an estimated duration and a progress percentage.
///
/// `progress` is read as the fraction of `estimated_hours` already completed.
/// Values are stored as supplied; out-of-range numbers are not corrected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    id: LearningPathId,
    title: String,
    estimated_hours: f64,
    progress: i32,
    #[serde(default)]
    status: PathStatus,
}

impl LearningPath {
    #[must_use]
    pub fn new(
        id: LearningPathId,
        title: impl Into<String>,
        estimated_hours: f64,
        progress: i32,
        status: PathStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            estimated_hours,
            progress,
            status,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> LearningPathId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn estimated_hours(&self) -> f64 {
        self.estimated_hours
    }

    /// Integer percentage, nominally 0..=100.
    #[must_use]
    pub fn progress(&self) -> i32 {
        self.progress
    }

    #[must_use]
    pub fn status(&self) -> PathStatus {
        self.status
    }
}
