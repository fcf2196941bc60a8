use dioxus::prelude::*;
use edu_core::model::CourseId;

use crate::context::AppContext;
use crate::session::use_session;
use crate::views::ViewError;
use crate::vm::QuizCreatorVm;

#[component]
pub fn QuizCreatorView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let courses = ctx.courses();
    let quizzes = ctx.quizzes();

    let default_course = courses.list_courses().first().map(|c| c.id().clone());
    let mut form = use_signal(move || QuizCreatorVm::new(default_course));
    let mut error = use_signal(|| None::<ViewError>);

    let course_options = courses
        .list_courses()
        .iter()
        .map(|course| (course.id().to_string(), course.title().to_owned()))
        .collect::<Vec<_>>();
    let selected_course = form
        .read()
        .course_id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let question_count = form.read().questions.len();

    let save = move |_: MouseEvent| {
        let Some(draft) = form.read().to_draft() else {
            error.set(Some(ViewError::NoCourseSelected));
            return;
        };
        quizzes.create_quiz(draft);
        error.set(None);
        session.navigate("/dashboard");
    };

    rsx! {
        div { class: "page creator-page",
            header { class: "view-header",
                h2 { class: "view-title", "Create quiz" }
            }
            div { class: "view-divider" }

            div { class: "creator-field",
                label { class: "creator-label", r#for: "quiz-title", "Title" }
                input {
                    id: "quiz-title",
                    class: "creator-input",
                    required: true,
                    value: "{form.read().title}",
                    oninput: move |evt| {
                        form.write().title = evt.value();
                    },
                }
            }

            div { class: "creator-field",
                label { class: "creator-label", r#for: "quiz-course", "Course" }
                select {
                    id: "quiz-course",
                    class: "creator-select",
                    value: "{selected_course}",
                    onchange: move |evt| {
                        let value = evt.value();
                        form.write().course_id = (!value.is_empty()).then(|| CourseId::new(value));
                    },
                    for (id, title) in course_options {
                        option { value: "{id}", "{title}" }
                    }
                }
            }

            for index in 0..question_count {
                QuestionEditor { key: "{index}", form, index }
            }

            if let Some(err) = error.read().as_ref() {
                p { class: "form-error", "{err.message()}" }
            }

            div { class: "creator-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| form.write().add_question(),
                    "Add question"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: save,
                    "Save quiz"
                }
            }
        }
    }
}

#[component]
fn QuestionEditor(form: Signal<QuizCreatorVm>, index: usize) -> Element {
    let mut form = form;
    let Some(question) = form.read().questions.get(index).cloned() else {
        return rsx! {};
    };
    let number = index + 1;

    rsx! {
        fieldset { class: "question-editor",
            legend { "Question {number}" }
            input {
                class: "creator-input",
                placeholder: "Question text",
                required: true,
                value: "{question.text}",
                oninput: move |evt| form.write().set_question_text(index, evt.value()),
            }
            for (option_index, placeholder, option_text) in option_rows(&question.options) {
                div { key: "{option_index}", class: "option-row",
                    input {
                        r#type: "radio",
                        name: "correct-{index}",
                        title: "Correct answer",
                        checked: question.correct == option_index,
                        onchange: move |_| form.write().set_correct(index, option_index),
                    }
                    input {
                        class: "creator-input",
                        placeholder: "{placeholder}",
                        required: true,
                        value: "{option_text}",
                        oninput: move |evt| form.write().set_option(index, option_index, evt.value()),
                    }
                }
            }
            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| form.write().remove_question(index),
                "Remove question"
            }
        }
    }
}

fn option_rows(options: &[String]) -> Vec<(usize, String, String)> {
    options
        .iter()
        .enumerate()
        .map(|(index, text)| (index, format!("Option {}", index + 1), text.clone()))
        .collect()
}
