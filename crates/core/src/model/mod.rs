mod ids;
mod learner;
mod path;
mod skill_gap;

pub use ids::{LearningPathId, ParseIdError, SkillGapId};

pub use learner::Learner;
pub use path::{LearningPath, PathStatus};
pub use skill_gap::{GapPriority, SkillGap};
