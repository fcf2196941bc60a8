use dioxus::prelude::*;
use edu_core::model::QuizId;
use tracing::warn;

use crate::context::AppContext;
use crate::session::use_session;
use crate::views::ViewError;
use crate::vm::AnswerSheetVm;

#[component]
pub fn QuizTakerView(quiz_id: QuizId) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let quizzes = ctx.quizzes();

    let quiz = quizzes.get_quiz(&quiz_id);
    let question_count = quiz.as_ref().map_or(0, |quiz| quiz.questions().len());
    let mut sheet = use_signal(move || AnswerSheetVm::new(question_count));
    let mut error = use_signal(|| None::<ViewError>);

    let Some(quiz) = quiz else {
        let message = ViewError::QuizNotFound.message();
        return rsx! {
            div { class: "page status-page",
                h2 { "Quiz not found" }
                p { class: "status-message", "{message}" }
            }
        };
    };
    let Some(student) = session.current_user() else {
        return rsx! {};
    };

    let answered = sheet.read().answered();
    let total = quiz.questions().len();
    let questions = quiz.questions().to_vec();

    let submit = move |_: MouseEvent| {
        let answers = sheet.read().answers().to_vec();
        match quizzes.submit_attempt(student.id(), &quiz_id, &answers) {
            Ok(attempt) => {
                error.set(None);
                session.navigate(attempt.result_path());
            }
            Err(err) => {
                warn!(quiz = %quiz_id, error = %err, "quiz submission failed");
                error.set(Some(err.into()));
            }
        }
    };

    rsx! {
        div { class: "page taker-page",
            header { class: "view-header",
                h2 { class: "view-title", "{quiz.title()}" }
                p { class: "view-subtitle", "Answered {answered} of {total}" }
            }
            div { class: "view-divider" }

            ol { class: "question-list",
                for (q_index, question) in questions.into_iter().enumerate() {
                    li { key: "{question.id()}", class: "question",
                        p { class: "question-text", "{question.text()}" }
                        for (o_index, option) in question.options().iter().cloned().enumerate() {
                            label { key: "{o_index}", class: "option",
                                input {
                                    r#type: "radio",
                                    name: "question-{q_index}",
                                    checked: sheet.read().selected(q_index) == Some(o_index),
                                    onchange: move |_| sheet.write().select(q_index, o_index),
                                }
                                span { "{option}" }
                            }
                        }
                    }
                }
            }

            if let Some(err) = error.read().as_ref() {
                p { class: "form-error", "{err.message()}" }
            }

            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: submit,
                "Submit answers"
            }
        }
    }
}
