//! Who is signed in and where they are.

use tracing::debug;

use crate::model::{User, UserDirectory, UserRole};
use crate::route::RoutePath;
use crate::routing::{View, resolve};

/// Session and navigation state for one app window.
///
/// At most one user is signed in. The route changes only through
/// `navigate`, `location_changed`, `back` and `forward`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_user: Option<User>,
    route: RoutePath,
    back: Vec<RoutePath>,
    forward: Vec<RoutePath>,
}

impl Session {
    /// Anonymous session starting at `route`.
    #[must_use]
    pub fn new(route: RoutePath) -> Self {
        Self {
            current_user: None,
            route,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// Session that is already signed in, starting at `route`.
    #[must_use]
    pub fn signed_in(user: User, route: RoutePath) -> Self {
        Self {
            current_user: Some(user),
            ..Self::new(route)
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.current_user.as_ref().map(User::role)
    }

    #[must_use]
    pub fn route(&self) -> &RoutePath {
        &self.route
    }

    /// The view for the current user and route.
    #[must_use]
    pub fn view(&self) -> View {
        resolve(&self.route, self.role())
    }

    /// Signs in the directory's user for `role` and opens the dashboard.
    pub fn login(&mut self, role: UserRole, directory: &dyn UserDirectory) -> &User {
        let user = directory.user_for_role(role);
        debug!(user = %user.id(), %role, "login");
        self.navigate(RoutePath::dashboard());
        self.current_user.insert(user)
    }

    /// Clears the user and returns to the root path.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            debug!(user = %user.id(), "logout");
        }
        self.navigate(RoutePath::root());
    }

    /// Moves to `route`, recording the previous route for `back`.
    ///
    /// Navigating to the current route changes nothing.
    pub fn navigate(&mut self, route: impl Into<RoutePath>) {
        let route = route.into();
        if route == self.route {
            return;
        }
        debug!(from = %self.route, to = %route, "navigate");
        let previous = std::mem::replace(&mut self.route, route);
        self.back.push(previous);
        self.forward.clear();
    }

    /// Applies a location change reported by the platform (hash change).
    pub fn location_changed(&mut self, fragment: &str) {
        self.navigate(RoutePath::from_fragment(fragment));
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Returns to the previous route. `false` when there is none.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.back.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.route, previous);
        debug!(from = %current, to = %self.route, "back");
        self.forward.push(current);
        true
    }

    /// Re-applies a route undone by `back`. `false` when there is none.
    pub fn forward(&mut self) -> bool {
        let Some(next) = self.forward.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.route, next);
        debug!(from = %current, to = %self.route, "forward");
        self.back.push(current);
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RoutePath::root())
    }
}
