use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a skill gap, stable across renders.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillGapId(u64);

impl SkillGapId {
    /// Creates a new `SkillGapId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Unique identifier for a learning path
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearningPathId(u64);

impl LearningPathId {
    /// Creates a new `LearningPathId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SkillGapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SkillGapId({})", self.0)
    }
}

impl fmt::Debug for LearningPathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LearningPathId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for SkillGapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LearningPathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing an id from a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {kind} from string")]
pub struct ParseIdError {
    kind: &'static str,
}

impl FromStr for SkillGapId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(SkillGapId::new)
            .map_err(|_| ParseIdError { kind: "SkillGapId" })
    }
}

impl FromStr for LearningPathId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(LearningPathId::new)
            .map_err(|_| ParseIdError {
                kind: "LearningPathId",
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_gap_id_display() {
        let id = SkillGapId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "SkillGapId(42)");
    }

    #[test]
    fn test_skill_gap_id_from_str() {
        let id: SkillGapId = "123".parse().unwrap();
        assert_eq!(id, SkillGapId::new(123));
    }

    #[test]
    fn test_skill_gap_id_from_str_invalid() {
        let err = "gap-one".parse::<SkillGapId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse SkillGapId from string");
    }

    #[test]
    fn test_path_id_from_str() {
        let id: LearningPathId = "7".parse().unwrap();
        assert_eq!(id.value(), 7);
        assert!("-1".parse::<LearningPathId>().is_err());
    }
}
