use std::sync::Arc;

use dioxus::prelude::*;
use edu_core::model::{User, UserDirectory, UserRole};
use edu_core::{RoutePath, Session, View};

/// Shared handle to the window's `Session`.
///
/// Reads subscribe the calling component; every mutation goes through the
/// named operations below so all readers re-render in the same update.
#[derive(Clone)]
pub struct SessionHandle {
    state: Signal<Session>,
    directory: Arc<dyn UserDirectory>,
}

impl SessionHandle {
    #[must_use]
    pub fn new(state: Signal<Session>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { state, directory }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.read().current_user().cloned()
    }

    #[must_use]
    pub fn route(&self) -> RoutePath {
        self.state.read().route().clone()
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.state.read().view()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.state.read().can_go_back()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.state.read().can_go_forward()
    }

    pub fn login(&self, role: UserRole) {
        let mut state = self.state;
        state.write().login(role, self.directory.as_ref());
    }

    pub fn logout(&self) {
        let mut state = self.state;
        state.write().logout();
    }

    pub fn navigate(&self, route: impl Into<RoutePath>) {
        let route = route.into();
        let mut state = self.state;
        // Same route: no write, no re-render.
        if *state.peek().route() == route {
            return;
        }
        state.write().navigate(route);
    }

    pub fn back(&self) {
        let mut state = self.state;
        state.write().back();
    }

    pub fn forward(&self) {
        let mut state = self.state;
        state.write().forward();
    }
}

/// The session handle provided by [`SessionProvider`](crate::app::SessionProvider).
///
/// # Panics
///
/// Panics when called outside a `SessionProvider`; that is a wiring bug, not a runtime condition.
#[must_use]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}
