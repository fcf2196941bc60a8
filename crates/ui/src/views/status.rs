use dioxus::prelude::*;

#[component]
pub fn ForbiddenView() -> Element {
    rsx! {
        div { class: "page status-page",
            p { class: "status-message", "You do not have permission to view this page." }
        }
    }
}

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div { class: "page status-page",
            p { class: "status-message", "Page not found (404 Not Found)" }
        }
    }
}
