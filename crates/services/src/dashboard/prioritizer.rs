use learner_core::SkillGap;

/// Number of skill gaps surfaced on the dashboard.
pub const TOP_SKILL_GAP_LIMIT: usize = 3;

/// Leading gaps of an upstream-ordered list. No re-sorting happens here.
#[must_use]
pub fn top_skill_gaps(skill_gaps: &[SkillGap]) -> &[SkillGap] {
    &skill_gaps[..skill_gaps.len().min(TOP_SKILL_GAP_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use learner_core::{GapPriority, SkillGapId};

    fn gap(id: u64, priority: GapPriority) -> SkillGap {
        SkillGap::new(SkillGapId::new(id), format!("skill {id}"), 0, 2, priority)
    }

    #[test]
    fn returns_prefix_for_every_length() {
        let all: Vec<_> = (1..=6).map(|id| gap(id, GapPriority::High)).collect();
        for k in 0..=all.len() {
            let top = top_skill_gaps(&all[..k]);
            assert_eq!(top.len(), k.min(TOP_SKILL_GAP_LIMIT));
            assert_eq!(top, &all[..top.len()]);
        }
    }

    #[test]
    fn keeps_upstream_order_even_when_priorities_disagree() {
        let gaps = vec![
            gap(1, GapPriority::Low),
            gap(2, GapPriority::Medium),
            gap(3, GapPriority::Low),
            gap(4, GapPriority::High),
        ];
        let ids: Vec<_> = top_skill_gaps(&gaps).iter().map(SkillGap::id).collect();
        assert_eq!(ids, [SkillGapId::new(1), SkillGapId::new(2), SkillGapId::new(3)]);
    }
}
