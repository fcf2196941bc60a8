use std::sync::Arc;

use edu_core::model::{QuizId, UserId, UserRole};
use edu_core::time::fixed_clock;
use services::QuizService;

use super::test_harness::{
    setup_anonymous_harness, setup_view_harness, setup_view_harness_with_quizzes,
};

#[test]
fn anonymous_window_renders_login_for_any_route() {
    for fragment in ["", "#/dashboard", "#/teacher/create-quiz", "#/quiz/take/math-basics"] {
        let harness = setup_anonymous_harness(fragment);
        let html = harness.render();
        assert!(html.contains("Choose a role to sign in."), "missing login in {html}");
        assert!(html.contains("Continue as Teacher"), "missing role button in {html}");
        assert!(!html.contains("Dashboard"), "unexpected shell in {html}");
    }
}

#[test]
fn student_dashboard_lists_courses_and_quizzes() {
    let harness = setup_view_harness(UserRole::Student, "/dashboard");
    let html = harness.render();
    assert!(html.contains("Welcome, শিক্ষার্থী"), "missing greeting in {html}");
    assert!(html.contains("Basic Mathematics"), "missing course in {html}");
    assert!(!html.contains("English Grammar"), "draft course leaked in {html}");
    assert!(html.contains("Take quiz"), "missing take action in {html}");
    assert!(html.contains("No attempts yet."), "missing empty results in {html}");
}

#[test]
fn teacher_dashboard_offers_quiz_creation() {
    let harness = setup_view_harness(UserRole::Teacher, "/");
    let html = harness.render();
    assert!(html.contains("Create quiz"), "missing create action in {html}");
    assert!(html.contains("Draft"), "missing draft course in {html}");
    assert!(!html.contains("Take quiz"), "teacher should not take quizzes in {html}");
}

#[test]
fn admin_dashboard_lists_directory() {
    let harness = setup_view_harness(UserRole::Admin, "/dashboard");
    let html = harness.render();
    assert!(html.contains("student123"), "missing student in {html}");
    assert!(html.contains("teacher456"), "missing teacher in {html}");
    assert!(html.contains("Attempts"), "missing overview in {html}");
}

#[test]
fn teacher_sees_quiz_creator_form() {
    let harness = setup_view_harness(UserRole::Teacher, "/teacher/create-quiz");
    let html = harness.render();
    assert!(html.contains("Save quiz"), "missing save in {html}");
    assert!(html.contains("Question 1"), "missing first question in {html}");
    assert!(html.contains("General Science"), "missing course option in {html}");
}

#[test]
fn student_is_forbidden_from_quiz_creator() {
    let harness = setup_view_harness(UserRole::Student, "/teacher/create-quiz");
    let html = harness.render();
    assert!(html.contains("You do not have permission"), "missing forbidden in {html}");
    assert!(!html.contains("Save quiz"), "creator leaked in {html}");
}

#[test]
fn unknown_route_renders_not_found() {
    let harness = setup_view_harness(UserRole::Teacher, "/unknown/path");
    let html = harness.render();
    assert!(html.contains("404 Not Found"), "missing not found in {html}");
}

#[test]
fn student_takes_sample_quiz() {
    let harness = setup_view_harness(UserRole::Student, "/quiz/take/math-basics");
    let html = harness.render();
    assert!(html.contains("Arithmetic warm-up"), "missing title in {html}");
    assert!(html.contains("What is 7 + 5?"), "missing question in {html}");
    assert!(html.contains("Answered 0 of 2"), "missing progress in {html}");
    assert!(html.contains("Submit answers"), "missing submit in {html}");
}

#[test]
fn unknown_quiz_id_renders_not_found_message() {
    let harness = setup_view_harness(UserRole::Student, "/quiz/take/");
    let html = harness.render();
    assert!(html.contains("Quiz not found"), "missing message in {html}");
}

#[test]
fn result_page_shows_percentage() {
    let harness = setup_view_harness(UserRole::Student, "/quiz/result/7/10");
    let html = harness.render();
    assert!(html.contains("7 / 10"), "missing score in {html}");
    assert!(html.contains("70%"), "missing percent in {html}");
}

#[test]
fn result_page_defaults_bad_numbers() {
    let harness = setup_view_harness(UserRole::Student, "/quiz/result/x/10");
    let html = harness.render();
    assert!(html.contains("0 / 10"), "missing defaulted score in {html}");
    assert!(html.contains("0%"), "missing percent in {html}");
}

#[test]
fn student_results_list_recorded_attempts() {
    let quizzes = Arc::new(QuizService::sample(fixed_clock()));
    quizzes
        .submit_attempt(&UserId::new("student123"), &QuizId::new("solar-system"), &[Some(2)])
        .expect("submit attempt");
    let harness = setup_view_harness_with_quizzes(UserRole::Student, "/dashboard", quizzes);
    let html = harness.render();
    assert!(html.contains("Planets"), "missing quiz title in {html}");
    assert!(html.contains("1/1"), "missing score in {html}");
    assert!(!html.contains("No attempts yet."), "stale empty state in {html}");
}

#[test]
fn shell_shows_user_and_footer() {
    let harness = setup_view_harness(UserRole::Teacher, "/dashboard");
    let html = harness.render();
    assert!(html.contains("শিক্ষক"), "missing user name in {html}");
    assert!(html.contains("Log out"), "missing logout in {html}");
    assert!(html.contains("#/dashboard"), "missing route label in {html}");
    assert!(html.contains("© 2023"), "missing footer year in {html}");
}
