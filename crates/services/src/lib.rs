#![forbid(unsafe_code)]

pub mod catalog;
pub mod course_service;
pub mod directory;
pub mod error;
pub mod quiz_service;

pub use edu_core::Clock;

pub use course_service::CourseService;
pub use directory::MockUserDirectory;
pub use error::QuizServiceError;
pub use quiz_service::QuizService;
