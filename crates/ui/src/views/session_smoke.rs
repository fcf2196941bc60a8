use edu_core::model::UserRole;

use super::test_harness::{setup_anonymous_harness, setup_view_harness};

#[test]
fn login_swaps_login_page_for_dashboard() {
    let mut harness = setup_anonymous_harness("#/");
    assert!(harness.render().contains("Choose a role to sign in."));

    harness.act(|session| session.login(UserRole::Student));
    let html = harness.render();
    assert!(html.contains("Welcome, শিক্ষার্থী"), "missing dashboard in {html}");
    assert!(html.contains("#/dashboard"), "missing route label in {html}");
    assert!(!html.contains("Choose a role to sign in."), "stale login in {html}");
}

#[test]
fn logout_returns_every_route_to_login() {
    let mut harness = setup_view_harness(UserRole::Teacher, "/dashboard");
    assert!(harness.render().contains("Welcome, শিক্ষক"));

    harness.act(|session| session.logout());
    let html = harness.render();
    assert!(html.contains("Choose a role to sign in."), "missing login in {html}");
    assert!(!html.contains("Log out"), "stale shell in {html}");

    harness.act(|session| session.navigate("/teacher/create-quiz"));
    let html = harness.render();
    assert!(html.contains("Choose a role to sign in."), "missing login in {html}");
    assert!(!html.contains("Save quiz"), "creator leaked in {html}");
}

#[test]
fn navigate_rerenders_outlet_and_header() {
    let mut harness = setup_view_harness(UserRole::Teacher, "/dashboard");

    harness.act(|session| session.navigate("/teacher/create-quiz"));
    let creator = harness.render();
    assert!(creator.contains("Save quiz"), "missing creator in {creator}");
    assert!(creator.contains("#/teacher/create-quiz"), "stale route label in {creator}");
    assert!(!creator.contains("Welcome, শিক্ষক"), "stale dashboard in {creator}");

    harness.act(|session| session.navigate("/teacher/create-quiz"));
    assert_eq!(harness.render(), creator);

    harness.act(|session| session.back());
    let html = harness.render();
    assert!(html.contains("Welcome, শিক্ষক"), "missing dashboard in {html}");
    assert!(!html.contains("Save quiz"), "stale creator in {html}");
}

#[test]
fn signed_result_route_renders_as_given() {
    let mut harness = setup_view_harness(UserRole::Student, "/dashboard");

    harness.act(|session| session.navigate("/quiz/result/-3/10"));
    let html = harness.render();
    assert!(html.contains("-3 / 10"), "missing signed score in {html}");
    assert!(html.contains("-30%"), "missing percent in {html}");
}
