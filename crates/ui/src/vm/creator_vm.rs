use edu_core::model::{CourseId, QuestionDraft, QuizDraft};

/// Options offered for a new question.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Editable state behind the quiz creator form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCreatorVm {
    pub title: String,
    pub course_id: Option<CourseId>,
    pub questions: Vec<QuestionDraft>,
}

impl QuizCreatorVm {
    /// Empty form with one blank question, preselecting `default_course`.
    #[must_use]
    pub fn new(default_course: Option<CourseId>) -> Self {
        Self {
            title: String::new(),
            course_id: default_course,
            questions: vec![blank_question()],
        }
    }

    pub fn add_question(&mut self) {
        self.questions.push(blank_question());
    }

    /// Removes a question, keeping at least one on the form.
    pub fn remove_question(&mut self, index: usize) {
        if self.questions.len() > 1 && index < self.questions.len() {
            self.questions.remove(index);
        }
    }

    pub fn set_question_text(&mut self, index: usize, text: String) {
        if let Some(question) = self.questions.get_mut(index) {
            question.text = text;
        }
    }

    pub fn set_option(&mut self, index: usize, option: usize, text: String) {
        if let Some(slot) = self
            .questions
            .get_mut(index)
            .and_then(|question| question.options.get_mut(option))
        {
            *slot = text;
        }
    }

    pub fn set_correct(&mut self, index: usize, option: usize) {
        if let Some(question) = self.questions.get_mut(index) {
            if option < question.options.len() {
                question.correct = option;
            }
        }
    }

    /// The draft to hand to the catalog; `None` until a course is chosen.
    #[must_use]
    pub fn to_draft(&self) -> Option<QuizDraft> {
        let course_id = self.course_id.clone()?;
        Some(QuizDraft {
            title: self.title.clone(),
            course_id,
            questions: self.questions.clone(),
        })
    }
}

fn blank_question() -> QuestionDraft {
    QuestionDraft {
        text: String::new(),
        options: vec![String::new(); DEFAULT_OPTION_COUNT],
        correct: 0,
    }
}
