use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use edu_core::model::{UserDirectory, UserRole};
use edu_core::time::fixed_clock;
use edu_core::{Clock, RoutePath, Session};
use services::{CourseService, MockUserDirectory, QuizService};

use crate::app::{SessionProvider, Shell};
use crate::context::{UiApp, build_app_context};
use crate::session::{SessionHandle, use_session};

struct TestApp {
    session: Session,
    directory: Arc<MockUserDirectory>,
    courses: Arc<CourseService>,
    quizzes: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn initial_session(&self) -> Session {
        self.session.clone()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn user_directory(&self) -> Arc<dyn UserDirectory> {
        self.directory.clone()
    }

    fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }
}

/// Slot the harness fills with the live session handle after the first render.
#[derive(Clone, Default)]
struct HarnessHandles {
    session: Rc<RefCell<Option<SessionHandle>>>,
}

impl HarnessHandles {
    fn session(&self) -> SessionHandle {
        self.session.borrow().clone().expect("session handle registered")
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    handles: HarnessHandles,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        SessionProvider {
            Shell {}
            SessionCapture { handles: props.handles.clone() }
        }
    }
}

#[derive(Props, Clone)]
struct SessionCaptureProps {
    handles: HarnessHandles,
}

impl PartialEq for SessionCaptureProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn SessionCapture(props: SessionCaptureProps) -> Element {
    *props.handles.session.borrow_mut() = Some(use_session());
    rsx! {}
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewHarness {
    /// Runs `action` against the live session handle, then re-renders.
    pub fn act(&mut self, action: impl FnOnce(&SessionHandle)) {
        let session = self.handles.session();
        self.dom.in_runtime(|| action(&session));
        drive_dom(&mut self.dom);
    }

    fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness for an anonymous window at `fragment`.
pub fn setup_anonymous_harness(fragment: &str) -> ViewHarness {
    let session = Session::new(RoutePath::from_fragment(fragment));
    build_harness(session, Arc::new(QuizService::sample(fixed_clock())))
}

/// Harness signed in as `role`, already at `path`.
pub fn setup_view_harness(role: UserRole, path: &str) -> ViewHarness {
    setup_view_harness_with_quizzes(role, path, Arc::new(QuizService::sample(fixed_clock())))
}

pub fn setup_view_harness_with_quizzes(
    role: UserRole,
    path: &str,
    quizzes: Arc<QuizService>,
) -> ViewHarness {
    let user = MockUserDirectory::new().user_for_role(role);
    build_harness(Session::signed_in(user, RoutePath::new(path)), quizzes)
}

fn build_harness(session: Session, quizzes: Arc<QuizService>) -> ViewHarness {
    let app = Arc::new(TestApp {
        session,
        directory: Arc::new(MockUserDirectory::new()),
        courses: Arc::new(CourseService::sample()),
        quizzes,
    });
    let handles = HarnessHandles::default();
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ShellHarness,
            ShellHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        handles,
    };
    harness.rebuild();
    harness
}
