use dioxus::prelude::*;
use edu_core::model::{User, UserRole};

use crate::context::AppContext;
use crate::session::use_session;

#[component]
pub fn Sidebar(role: UserRole) -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Shikkha" }
            ul {
                li { NavLink { to: "/dashboard", label: "Dashboard" } }
                if role == UserRole::Teacher {
                    li { NavLink { to: "/teacher/create-quiz", label: "Create quiz" } }
                }
            }
        }
    }
}

/// Sidebar entry that navigates in place.
#[component]
pub fn NavLink(to: &'static str, label: &'static str) -> Element {
    let session = use_session();
    let active = session.route().as_str() == to;

    rsx! {
        button {
            class: if active { "nav-link nav-link--active" } else { "nav-link" },
            r#type: "button",
            onclick: move |_| session.navigate(to),
            "{label}"
        }
    }
}

#[component]
pub fn Header(user: User) -> Element {
    let session = use_session();
    let route = session.route();
    let can_go_back = session.can_go_back();
    let can_go_forward = session.can_go_forward();
    let (back, forward, logout) = (session.clone(), session.clone(), session);

    rsx! {
        header { class: "app-header",
            div { class: "history-controls",
                button {
                    class: "btn btn-icon",
                    r#type: "button",
                    title: "Back",
                    disabled: !can_go_back,
                    onclick: move |_| back.back(),
                    "‹"
                }
                button {
                    class: "btn btn-icon",
                    r#type: "button",
                    title: "Forward",
                    disabled: !can_go_forward,
                    onclick: move |_| forward.forward(),
                    "›"
                }
                span { class: "route-label", "{route.to_fragment()}" }
            }
            div { class: "user-badge",
                span { class: "user-name", "{user.name()}" }
                span { class: "user-role", "{user.role().label()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| logout.logout(),
                    "Log out"
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let year = ctx.clock().year();

    rsx! {
        footer { class: "app-footer",
            p { "© {year} Shikkha. All rights reserved." }
        }
    }
}
