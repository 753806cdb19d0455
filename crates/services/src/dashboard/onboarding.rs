use learner_core::Learner;

/// Side effect requested by the onboarding banner's button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingAction {
    StartAssessment,
}

impl OnboardingAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OnboardingAction::StartAssessment => "Start Your Assessment",
        }
    }

    /// In-app location the renderer navigates to when the action fires.
    #[must_use]
    pub fn target(self) -> &'static str {
        match self {
            OnboardingAction::StartAssessment => "/assessments",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Onboarding {
    pub is_new_user: bool,
    pub subtitle: &'static str,
    pub call_to_action: Option<OnboardingAction>,
}

/// A learner is new until a path has been assigned, whatever its progress.
#[must_use]
pub fn is_new_user(learner: &Learner) -> bool {
    !learner.has_path()
}

#[must_use]
pub fn classify(learner: &Learner) -> Onboarding {
    if is_new_user(learner) {
        Onboarding {
            is_new_user: true,
            subtitle: "Complete your assessment to get personalized recommendations",
            call_to_action: Some(OnboardingAction::StartAssessment),
        }
    } else {
        Onboarding {
            is_new_user: false,
            subtitle: "Continue your personalized learning journey",
            call_to_action: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learner_core::{LearningPath, LearningPathId, PathStatus};

    #[test]
    fn learner_without_path_gets_assessment_prompt() {
        let onboarding = classify(&Learner::new("Ava"));
        assert!(onboarding.is_new_user);
        assert_eq!(onboarding.call_to_action, Some(OnboardingAction::StartAssessment));
        assert_eq!(OnboardingAction::StartAssessment.target(), "/assessments");
    }

    #[test]
    fn zero_progress_path_is_not_new() {
        let path = LearningPath::new(
            LearningPathId::new(1),
            "Data Basics",
            30.0,
            0,
            PathStatus::NotStarted,
        );
        let learner = Learner::new("Bo").with_path(path);

        assert!(!is_new_user(&learner));
        let onboarding = classify(&learner);
        assert_eq!(onboarding.call_to_action, None);
        assert_eq!(onboarding.subtitle, "Continue your personalized learning journey");
    }
}
