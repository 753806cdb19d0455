use learner_core::{
    GapPriority, Learner, LearningPath, LearningPathId, PathStatus, SkillGap, SkillGapId,
};

use super::test_harness::{ViewKind, setup_view_harness};

fn gap(id: u64, skill: &str) -> SkillGap {
    SkillGap::new(SkillGapId::new(id), skill, 1, 3, GapPriority::High)
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_loading_without_learner() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading text in {html}");
    assert!(!html.contains("Hours Completed"), "stats rendered while loading: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_new_learner_onboarding() {
    let learner = Learner::new("Ava").with_skill_gaps(vec![
        gap(1, "Kubernetes"),
        gap(2, "Terraform"),
        gap(3, "Go"),
        gap(4, "GraphQL"),
    ]);
    let mut harness = setup_view_harness(ViewKind::Dashboard, Some(learner));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Welcome back, Ava"), "missing greeting in {html}");
    assert!(html.contains("Start Your Assessment"), "missing CTA in {html}");
    assert!(html.contains("/assessments"), "CTA does not link to assessments in {html}");
    assert!(html.contains("TBD"), "missing placeholder in {html}");
    assert!(html.contains("Not Started"), "missing placeholder status in {html}");
    assert!(html.contains("Kubernetes"), "missing first gap in {html}");
    assert!(html.contains("Go"), "missing third gap in {html}");
    assert!(!html.contains("GraphQL"), "fourth gap should be cut in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_active_path_without_banner() {
    let path = LearningPath::new(
        LearningPathId::new(1),
        "Backend Engineering",
        40.0,
        50,
        PathStatus::InProgress,
    );
    let learner = Learner::new("Bo").with_path(path).with_completion_rate(62);
    let mut harness = setup_view_harness(ViewKind::Dashboard, Some(learner));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Backend Engineering"), "missing path title in {html}");
    assert!(html.contains("In Progress"), "missing path status in {html}");
    assert!(html.contains("62%"), "missing completion rate in {html}");
    assert!(html.contains("40h"), "missing estimate in {html}");
    assert!(!html.contains("Start Your Assessment"), "unexpected CTA in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessments_view_links_back() {
    let mut harness = setup_view_harness(ViewKind::Assessments, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Assessments"), "missing title in {html}");
    assert!(html.contains("Back to dashboard"), "missing link in {html}");
}
