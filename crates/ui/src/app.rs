use dioxus::prelude::*;

use crate::context::AppContext;
use crate::routes::RouteOutlet;
use crate::session::{SessionHandle, use_session};
use crate::views::{Footer, Header, LoginView, Sidebar};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title.
        document::Title { "Shikkha" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                SessionProvider {
                    Shell {}
                }
            }
        }
    }
}

/// Owns the session signal and shares a [`SessionHandle`] with its children.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_signal(|| ctx.initial_session());
    use_context_provider(move || SessionHandle::new(state, ctx.user_directory()));
    rsx! { {children} }
}

/// Lays out the signed-in chrome around the outlet, or the login page.
#[component]
pub fn Shell() -> Element {
    let session = use_session();

    let Some(user) = session.current_user() else {
        return rsx! { LoginView {} };
    };
    let role = user.role();
    let view = session.view();

    rsx! {
        div { class: "app",
            Sidebar { role }
            div { class: "app-main",
                Header { user }
                main { class: "content",
                    RouteOutlet { view }
                }
                Footer {}
            }
        }
    }
}
