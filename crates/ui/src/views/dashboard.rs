use dioxus::prelude::*;
use edu_core::model::{User, UserRole};

use crate::context::AppContext;
use crate::session::use_session;
use crate::vm::{
    AttemptRowVm, CourseCardVm, QuizCardVm, map_attempt_rows, map_course_cards, map_quiz_cards,
};

#[component]
pub fn DashboardView() -> Element {
    let session = use_session();
    let Some(user) = session.current_user() else {
        return rsx! {};
    };

    rsx! {
        div { class: "page dashboard",
            header { class: "view-header",
                h2 { class: "view-title", "Dashboard" }
                p { class: "view-subtitle", "Welcome, {user.name()}" }
            }
            div { class: "view-divider" }
            match user.role() {
                UserRole::Student => rsx! { StudentDashboard { user: user.clone() } },
                UserRole::Teacher => rsx! { TeacherDashboard {} },
                UserRole::Admin => rsx! { AdminDashboard {} },
            }
        }
    }
}

#[component]
fn StudentDashboard(user: User) -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.courses();
    let quizzes = ctx.quizzes();

    let all_quizzes = quizzes.list_quizzes();
    let course_cards = map_course_cards(courses.published_courses());
    let quiz_cards = map_quiz_cards(&all_quizzes, courses.list_courses());
    let attempt_rows = map_attempt_rows(&quizzes.attempts_for(user.id()), &all_quizzes);

    rsx! {
        section { class: "dashboard-section",
            h3 { "My courses" }
            CourseList { courses: course_cards }
        }
        section { class: "dashboard-section",
            h3 { "Available quizzes" }
            QuizList { quizzes: quiz_cards, can_take: true }
        }
        section { class: "dashboard-section",
            h3 { "My results" }
            AttemptList { attempts: attempt_rows }
        }
    }
}

#[component]
fn TeacherDashboard() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let courses = ctx.courses();

    let course_cards = map_course_cards(courses.list_courses());
    let quiz_cards = map_quiz_cards(&ctx.quizzes().list_quizzes(), courses.list_courses());

    rsx! {
        section { class: "dashboard-section",
            div { class: "section-header",
                h3 { "Quizzes" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| session.navigate("/teacher/create-quiz"),
                    "Create quiz"
                }
            }
            QuizList { quizzes: quiz_cards, can_take: false }
        }
        section { class: "dashboard-section",
            h3 { "Courses" }
            CourseList { courses: course_cards }
        }
    }
}

#[component]
fn AdminDashboard() -> Element {
    let ctx = use_context::<AppContext>();
    let users = ctx.user_directory().users();
    let course_count = ctx.courses().list_courses().len();
    let quiz_count = ctx.quizzes().list_quizzes().len();
    let attempt_count = ctx.quizzes().attempt_count();

    rsx! {
        section { class: "dashboard-section",
            h3 { "Overview" }
            dl { class: "stats",
                dt { "Courses" }
                dd { "{course_count}" }
                dt { "Quizzes" }
                dd { "{quiz_count}" }
                dt { "Attempts" }
                dd { "{attempt_count}" }
            }
        }
        section { class: "dashboard-section",
            h3 { "Users" }
            ul { class: "user-list",
                for user in users {
                    li { key: "{user.id()}",
                        span { class: "user-name", "{user.name()}" }
                        span { class: "user-role", "{user.role().label()}" }
                        span { class: "user-id", "{user.id()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseList(courses: Vec<CourseCardVm>) -> Element {
    if courses.is_empty() {
        return rsx! { p { class: "empty", "No courses yet." } };
    }
    rsx! {
        ul { class: "course-list",
            for course in courses {
                li { key: "{course.id}", class: "course-card",
                    h4 { "{course.title}" }
                    p { "{course.description}" }
                    p { class: "course-meta", "{course.chapters_label} · {course.status_label}" }
                }
            }
        }
    }
}

#[component]
fn QuizList(quizzes: Vec<QuizCardVm>, can_take: bool) -> Element {
    let session = use_session();
    if quizzes.is_empty() {
        return rsx! { p { class: "empty", "No quizzes yet." } };
    }

    let rows = quizzes.into_iter().map(|quiz| {
        let session = session.clone();
        let take_route = quiz.take_route.clone();
        rsx! {
            li { key: "{quiz.id}", class: "quiz-card",
                div {
                    h4 { "{quiz.title}" }
                    p { class: "quiz-meta", "{quiz.course_title} · {quiz.questions_label}" }
                }
                if can_take {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| session.navigate(take_route.clone()),
                        "Take quiz"
                    }
                }
            }
        }
    });

    rsx! {
        ul { class: "quiz-list", {rows} }
    }
}

#[component]
fn AttemptList(attempts: Vec<AttemptRowVm>) -> Element {
    let session = use_session();
    if attempts.is_empty() {
        return rsx! { p { class: "empty", "No attempts yet." } };
    }

    let rows = attempts.into_iter().enumerate().map(|(index, attempt)| {
        let session = session.clone();
        let result_route = attempt.result_route.clone();
        rsx! {
            li { key: "{index}", class: "attempt-row",
                span { class: "attempt-quiz", "{attempt.quiz_title}" }
                span { class: "attempt-score", "{attempt.score_label}" }
                span { class: "attempt-date", "{attempt.submitted_at_str}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| session.navigate(result_route.clone()),
                    "View"
                }
            }
        }
    });

    rsx! {
        ul { class: "attempt-list", {rows} }
    }
}
