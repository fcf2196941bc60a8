use services::QuizServiceError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    QuizNotFound,
    NoCourseSelected,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::QuizNotFound => "This quiz does not exist or was removed.",
            ViewError::NoCourseSelected => "Pick a course for the quiz first.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<QuizServiceError> for ViewError {
    fn from(err: QuizServiceError) -> Self {
        match err {
            QuizServiceError::NotFound(_) => ViewError::QuizNotFound,
            _ => ViewError::Unknown,
        }
    }
}
