use std::fmt;

use learner_core::{Learner, LearningPath};

/// Which summary statistic a tile shows. Renderers pick icon and color from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatTag {
    Hours,
    SkillGaps,
    Completion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    Count(u64),
    /// Integer percentage, rendered with a trailing `%`.
    Percent(i32),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Percent(p) => write!(f, "{p}%"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: StatValue,
    pub tag: StatTag,
}

/// Hours of the active path already completed, rounded half up.
///
/// Zero when there is no path. Malformed inputs that would produce a negative
/// or non-finite result also yield zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hours_completed(path: Option<&LearningPath>) -> u64 {
    let Some(path) = path else {
        return 0;
    };

    let raw = path.estimated_hours() * f64::from(path.progress()) / 100.0;
    let rounded = (raw + 0.5).floor();
    if rounded.is_nan() || rounded <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX for oversized values.
    rounded as u64
}

/// The three summary tiles, always in the order hours, skill gaps, completion.
#[must_use]
pub fn derive_stats(learner: &Learner) -> [Stat; 3] {
    [
        Stat {
            label: "Hours Completed",
            value: StatValue::Count(hours_completed(learner.current_path())),
            tag: StatTag::Hours,
        },
        Stat {
            label: "Skill Gaps Identified",
            value: StatValue::Count(learner.skill_gaps().len() as u64),
            tag: StatTag::SkillGaps,
        },
        Stat {
            label: "Completion Rate",
            value: StatValue::Percent(learner.completion_rate()),
            tag: StatTag::Completion,
        },
    ]
}
