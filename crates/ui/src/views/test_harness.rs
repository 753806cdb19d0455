use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use learner_core::Learner;
use services::{InMemoryLearnerState, LearnerStateProvider};

use crate::context::{UiApp, build_app_context};
use crate::views::{AssessmentsView, DashboardView};

#[derive(Clone)]
struct TestApp {
    learners: Arc<InMemoryLearnerState>,
}

impl UiApp for TestApp {
    fn learner_state(&self) -> Arc<dyn LearnerStateProvider> {
        self.learners.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Assessments,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Assessments => rsx! { AssessmentsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount `view` with the given learner already loaded, or none for the
/// loading state.
pub fn setup_view_harness(view: ViewKind, learner: Option<Learner>) -> ViewHarness {
    let learners = Arc::new(match learner {
        Some(learner) => InMemoryLearnerState::with_learner(learner),
        None => InMemoryLearnerState::new(),
    });

    let app = Arc::new(TestApp { learners });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom }
}
