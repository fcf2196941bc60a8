use serde::{Deserialize, Serialize};

use crate::model::ids::{CourseId, QuestionId, QuizId};

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice question. `correct` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>, options: Vec<String>, correct: usize) -> Self {
        Self {
            id,
            text: text.into(),
            options,
            correct,
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    id: QuizId,
    title: String,
    course_id: CourseId,
    questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        course_id: CourseId,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            course_id,
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Counts the answers that hit the correct option.
    ///
    /// `answers[i]` is the chosen option for question `i`; `None` and missing
    /// entries count as wrong. Extra answers are ignored.
    #[must_use]
    pub fn grade(&self, answers: &[Option<usize>]) -> Score {
        let correct = self
            .questions
            .iter()
            .zip(answers)
            .filter(|(question, answer)| answer.is_some_and(|choice| question.is_correct(choice)))
            .count();
        Score::new(saturating_u32(correct), saturating_u32(self.questions.len()))
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    correct: u32,
    total: u32,
}

impl Score {
    #[must_use]
    pub fn new(correct: u32, total: u32) -> Self {
        Self { correct, total }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whole-number percentage, 0 when there are no questions.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = u64::from(self.correct) * 100 / u64::from(self.total);
        u32::try_from(pct).unwrap_or(u32::MAX)
    }
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// An unsaved question from the quiz creator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize,
}

/// An unsaved quiz; ids are assigned when the catalog accepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub title: String,
    pub course_id: CourseId,
    pub questions: Vec<QuestionDraft>,
}

impl QuizDraft {
    /// Assigns fresh ids and trims user-entered text.
    #[must_use]
    pub fn into_quiz(self, id: QuizId) -> Quiz {
        let questions = self
            .questions
            .into_iter()
            .map(|draft| {
                let options = draft.options.iter().map(|o| o.trim().to_owned()).collect();
                Question::new(QuestionId::generate(), draft.text.trim(), options, draft.correct)
            })
            .collect();
        Quiz::new(id, self.title.trim(), self.course_id, questions)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
