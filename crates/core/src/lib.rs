#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    GapPriority, Learner, LearningPath, LearningPathId, ParseIdError, PathStatus, SkillGap,
    SkillGapId,
};
