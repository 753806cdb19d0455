use dioxus::prelude::*;
use dioxus_router::Link;
use services::{DashboardState, OnboardingAction};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{
    DashboardPageVm, OnboardingBannerVm, PathCardVm, SkillGapCardVm, StatTileVm, WorkflowStepVm,
    map_dashboard,
};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    // Recomputed on every render from the current learner snapshot.
    let state = ctx.dashboard().load();

    rsx! {
        div { class: "page dashboard",
            match state {
                DashboardState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                DashboardState::Ready(vm) => rsx! {
                    DashboardContent { page: map_dashboard(&vm) }
                },
            }
        }
    }
}

#[component]
fn DashboardContent(page: DashboardPageVm) -> Element {
    let DashboardPageVm {
        greeting,
        subtitle,
        onboarding,
        stats,
        workflow,
        path,
        skill_gaps,
    } = page;

    rsx! {
        header { class: "dashboard-header",
            h1 { "{greeting}" }
            p { "{subtitle}" }
        }

        {onboarding.map(|banner| rsx! { OnboardingBanner { banner } })}

        section { class: "stats",
            for tile in stats {
                StatTile { key: "{tile.label}", tile }
            }
        }

        section { class: "progress",
            h2 { "Learning Progress" }
            ol { class: "workflow",
                for step in workflow {
                    WorkflowStepItem { key: "{step.label}", step }
                }
            }
        }

        div { class: "columns",
            section {
                h2 { "Current Learning Path" }
                PathCard { card: path }
            }
            section {
                h2 { "Priority Skill Gaps" }
                div { class: "gaps",
                    for card in skill_gaps {
                        SkillGapCard { key: "{card.id}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn OnboardingBanner(banner: OnboardingBannerVm) -> Element {
    let target = match banner.action {
        OnboardingAction::StartAssessment => Route::Assessments {},
    };

    rsx! {
        div { class: "onboarding",
            h3 { "{banner.title}" }
            p { "{banner.body}" }
            Link { class: "cta", to: target, "{banner.cta_label()}" }
        }
    }
}

#[component]
fn StatTile(tile: StatTileVm) -> Element {
    rsx! {
        div { class: "stat {tile.tone}",
            p { class: "stat-label", "{tile.label}" }
            p { class: "stat-value", "{tile.value}" }
        }
    }
}

#[component]
fn WorkflowStepItem(step: WorkflowStepVm) -> Element {
    rsx! {
        li { class: "{step.class}", "{step.label}" }
    }
}

#[component]
fn PathCard(card: PathCardVm) -> Element {
    let class = if card.has_path { "path-card" } else { "path-card empty" };

    rsx! {
        div { class: "{class}",
            if card.has_path {
                h3 { "{card.title}" }
            } else {
                p { class: "path-empty", "{card.title}" }
            }
            dl {
                dt { "Status" }
                dd { "{card.status}" }
                dt { "Estimated Time" }
                dd { "{card.estimated_time}" }
                dt { "Completion" }
                dd { "{card.completion}" }
            }
        }
    }
}

#[component]
fn SkillGapCard(card: SkillGapCardVm) -> Element {
    rsx! {
        div { class: "gap-card",
            h3 { "{card.skill}" }
            p { "{card.levels}" }
            span { class: "{card.priority_class}", "{card.priority}" }
        }
    }
}
