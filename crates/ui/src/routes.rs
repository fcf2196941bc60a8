use dioxus::prelude::*;
use edu_core::View;

use crate::views::{
    DashboardView, ForbiddenView, LoginView, NotFoundView, QuizCreatorView, QuizResultView,
    QuizTakerView,
};

/// Renders the component for a resolved view.
#[component]
pub fn RouteOutlet(view: View) -> Element {
    match view {
        View::Login => rsx! { LoginView {} },
        View::Dashboard => rsx! { DashboardView {} },
        View::QuizCreator => rsx! { QuizCreatorView {} },
        View::QuizTaker { quiz_id } => {
            // Keyed so a different quiz gets a fresh answer sheet.
            let key = quiz_id.to_string();
            rsx! { QuizTakerView { key: "{key}", quiz_id } }
        }
        View::QuizResult { score, total } => rsx! { QuizResultView { score, total } },
        View::Forbidden => rsx! { ForbiddenView {} },
        View::NotFound => rsx! { NotFoundView {} },
    }
}
