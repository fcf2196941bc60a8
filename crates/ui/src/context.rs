use std::sync::Arc;

use edu_core::model::UserDirectory;
use edu_core::{Clock, Session};
use services::{CourseService, QuizService};

pub trait UiApp: Send + Sync {
    /// Session state the window opens with.
    fn initial_session(&self) -> Session;
    fn clock(&self) -> Clock;

    fn user_directory(&self) -> Arc<dyn UserDirectory>;
    fn courses(&self) -> Arc<CourseService>;
    fn quizzes(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_session: Session,
    clock: Clock,

    user_directory: Arc<dyn UserDirectory>,
    courses: Arc<CourseService>,
    quizzes: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_session: app.initial_session(),
            clock: app.clock(),
            user_directory: app.user_directory(),
            courses: app.courses(),
            quizzes: app.quizzes(),
        }
    }

    #[must_use]
    pub fn initial_session(&self) -> Session {
        self.initial_session.clone()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn user_directory(&self) -> Arc<dyn UserDirectory> {
        Arc::clone(&self.user_directory)
    }

    #[must_use]
    pub fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
