use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use edu_core::model::{ParseRoleError, UserDirectory, UserRole};
use edu_core::{Clock, RoutePath, Session};
use services::{CourseService, MockUserDirectory, QuizService};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "app=info,ui=info,services=info,edu_core=info,warn";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownSubcommand(String),
    InvalidRole(ParseRoleError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownSubcommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidRole(err) => write!(f, "invalid --as value: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    clock: Clock,
    initial_session: Session,
    user_directory: Arc<dyn UserDirectory>,
    courses: Arc<CourseService>,
    quizzes: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn initial_session(&self) -> Session {
        self.initial_session.clone()
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn user_directory(&self) -> Arc<dyn UserDirectory> {
        Arc::clone(&self.user_directory)
    }

    fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    start_route: RoutePath,
    login_as: Option<UserRole>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--route <fragment>] [--as <role>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --route   start route, e.g. '#/dashboard' (default '#/')");
    eprintln!("  --as      start signed in as student, teacher or admin");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EDU_START_ROUTE, EDU_LOGIN_ROLE, RUST_LOG");
}

impl Args {
    /// Parses CLI arguments over environment defaults. `Ok(None)` means help was requested.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut start_route = env("EDU_START_ROUTE")
            .map_or_else(RoutePath::root, |raw| RoutePath::from_fragment(raw.trim()));
        let mut login_as = env("EDU_LOGIN_ROLE")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| raw.parse::<UserRole>())
            .transpose()
            .map_err(ArgsError::InvalidRole)?;

        let mut args = args.into_iter().peekable();
        match args.peek().map(String::as_str) {
            Some("ui") => {
                args.next();
            }
            Some(first) if !first.starts_with('-') => {
                return Err(ArgsError::UnknownSubcommand(first.to_owned()));
            }
            _ => {}
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--route" => {
                    let value = require_value(&mut args, "--route")?;
                    start_route = RoutePath::from_fragment(value.trim());
                }
                "--as" => {
                    let value = require_value(&mut args, "--as")?;
                    login_as = Some(value.parse().map_err(ArgsError::InvalidRole)?);
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            start_route,
            login_as,
        }))
    }

    fn initial_session(&self, directory: &dyn UserDirectory) -> Session {
        match self.login_as {
            Some(role) => {
                Session::signed_in(directory.user_for_role(role), self.start_route.clone())
            }
            None => Session::new(self.start_route.clone()),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    if let Err(e) = log_fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed =
        Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()).map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let Some(args) = parsed else {
        print_usage();
        return Ok(());
    };

    init_tracing();

    let clock = Clock::system();
    let user_directory: Arc<dyn UserDirectory> = Arc::new(MockUserDirectory::new());
    let initial_session = args.initial_session(user_directory.as_ref());
    match initial_session.current_user() {
        Some(user) => info!(route = %args.start_route, user = %user.id(), "starting signed in"),
        None => info!(route = %args.start_route, "starting"),
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock,
        initial_session,
        user_directory,
        courses: Arc::new(CourseService::sample()),
        quizzes: Arc::new(QuizService::sample(clock)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Shikkha")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
