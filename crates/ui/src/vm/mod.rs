mod course_vm;
mod creator_vm;
mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use course_vm::{CourseCardVm, map_course_cards};
pub use creator_vm::{DEFAULT_OPTION_COUNT, QuizCreatorVm};
pub use quiz_vm::{AnswerSheetVm, AttemptRowVm, QuizCardVm, map_attempt_rows, map_quiz_cards};
pub use result_vm::QuizResultVm;
pub use time_fmt::format_datetime;
