mod attempt;
mod course;
mod ids;
mod quiz;
mod user;

pub use ids::{AttemptId, ChapterId, CourseId, QuestionId, QuizId, UserId};

pub use attempt::QuizAttempt;
pub use course::{Chapter, Course};
pub use quiz::{Question, QuestionDraft, Quiz, QuizDraft, Score};
pub use user::{ParseRoleError, User, UserDirectory, UserRole};
