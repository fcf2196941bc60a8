mod dashboard;
mod layout;
mod login;
mod quiz_creator;
mod quiz_result;
mod quiz_taker;
mod state;
mod status;

#[cfg(test)]
mod session_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use layout::{Footer, Header, NavLink, Sidebar};
pub use login::LoginView;
pub use quiz_creator::QuizCreatorView;
pub use quiz_result::QuizResultView;
pub use quiz_taker::QuizTakerView;
pub use state::ViewError;
pub use status::{ForbiddenView, NotFoundView};
