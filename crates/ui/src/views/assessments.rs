use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

/// Landing page for the onboarding call-to-action.
#[component]
pub fn AssessmentsView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Assessments" }
            p { "Assessments will appear here once they are assigned to you." }
            Link { to: Route::Dashboard {}, "Back to dashboard" }
        }
    }
}
