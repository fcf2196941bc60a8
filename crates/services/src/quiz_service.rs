use std::sync::{PoisonError, RwLock};

use edu_core::Clock;
use edu_core::model::{AttemptId, CourseId, Quiz, QuizAttempt, QuizDraft, QuizId, UserId};
use tracing::info;

use crate::catalog::sample_quizzes;
use crate::error::QuizServiceError;

/// In-memory quiz catalog plus the attempts students submit against it.
#[derive(Debug)]
pub struct QuizService {
    clock: Clock,
    quizzes: RwLock<Vec<Quiz>>,
    attempts: RwLock<Vec<QuizAttempt>>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, quizzes: Vec<Quiz>) -> Self {
        Self {
            clock,
            quizzes: RwLock::new(quizzes),
            attempts: RwLock::new(Vec::new()),
        }
    }

    /// Catalog seeded with the sample quizzes.
    #[must_use]
    pub fn sample(clock: Clock) -> Self {
        Self::new(clock, sample_quizzes())
    }

    /// All quizzes in creation order.
    #[must_use]
    pub fn list_quizzes(&self) -> Vec<Quiz> {
        self.quizzes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn quizzes_for_course(&self, course_id: &CourseId) -> Vec<Quiz> {
        self.quizzes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|quiz| quiz.course_id() == course_id)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get_quiz(&self, id: &QuizId) -> Option<Quiz> {
        self.quizzes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|quiz| quiz.id() == id)
            .cloned()
    }

    /// Adds a quiz from the creator and returns it with its assigned ids.
    pub fn create_quiz(&self, draft: QuizDraft) -> Quiz {
        let quiz = draft.into_quiz(QuizId::generate());
        info!(
            quiz = %quiz.id(),
            course = %quiz.course_id(),
            questions = quiz.questions().len(),
            "quiz created"
        );
        self.quizzes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(quiz.clone());
        quiz
    }

    /// Grades `answers` against the quiz and records the attempt.
    ///
    /// `answers[i]` is the option chosen for question `i`; unanswered
    /// questions count as wrong.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NotFound` for an unknown quiz.
    /// Returns `QuizServiceError::TooManyAnswers` if there are more answers than questions.
    pub fn submit_attempt(
        &self,
        student_id: &UserId,
        quiz_id: &QuizId,
        answers: &[Option<usize>],
    ) -> Result<QuizAttempt, QuizServiceError> {
        let quiz = self
            .get_quiz(quiz_id)
            .ok_or_else(|| QuizServiceError::NotFound(quiz_id.clone()))?;
        let expected = quiz.questions().len();
        if answers.len() > expected {
            return Err(QuizServiceError::TooManyAnswers {
                expected,
                got: answers.len(),
            });
        }

        let score = quiz.grade(answers);
        let attempt = QuizAttempt::new(
            AttemptId::generate(),
            student_id.clone(),
            quiz_id.clone(),
            score,
            self.clock.now(),
        );
        info!(
            student = %student_id,
            quiz = %quiz_id,
            score = score.correct(),
            total = score.total(),
            "quiz attempt recorded"
        );
        self.attempts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(attempt.clone());
        Ok(attempt)
    }

    /// Attempts by one student, newest first.
    #[must_use]
    pub fn attempts_for(&self, student_id: &UserId) -> Vec<QuizAttempt> {
        self.attempts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .filter(|attempt| attempt.student_id() == student_id)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
