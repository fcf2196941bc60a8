use dioxus::prelude::*;

use crate::session::use_session;
use crate::vm::QuizResultVm;

#[component]
pub fn QuizResultView(score: i64, total: i64) -> Element {
    let session = use_session();
    let vm = QuizResultVm::new(score, total);

    rsx! {
        div { class: "page result-page",
            h2 { "Quiz Result" }
            dl { class: "result-summary",
                dt { "Score" }
                dd { "{vm.score} / {vm.total}" }

                dt { "Percentage" }
                dd { "{vm.percent}%" }
            }
            p { class: "result-verdict", "{vm.verdict}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| session.navigate("/dashboard"),
                "Back to dashboard"
            }
        }
    }
}
