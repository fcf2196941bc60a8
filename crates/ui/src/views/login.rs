use dioxus::prelude::*;
use edu_core::model::UserRole;

use crate::session::use_session;

#[component]
pub fn LoginView() -> Element {
    let session = use_session();

    let role_buttons = UserRole::ALL.iter().map(|role| {
        let role = *role;
        let session = session.clone();
        rsx! {
            button {
                key: "{role}",
                class: "btn btn-primary login-role",
                r#type: "button",
                onclick: move |_| session.login(role),
                "Continue as {role.label()}"
            }
        }
    });

    rsx! {
        div { class: "login-page",
            section { class: "login-card",
                h1 { class: "login-title", "Shikkha" }
                p { class: "login-subtitle", "Choose a role to sign in." }
                div { class: "login-roles", {role_buttons} }
            }
        }
    }
}
