use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{AttemptId, QuizId, UserId};
use crate::model::quiz::Score;

/// A graded quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    id: AttemptId,
    student_id: UserId,
    quiz_id: QuizId,
    score: u32,
    total: u32,
    submitted_at: DateTime<Utc>,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(
        id: AttemptId,
        student_id: UserId,
        quiz_id: QuizId,
        score: Score,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            student_id,
            quiz_id,
            score: score.correct(),
            total: score.total(),
            submitted_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &AttemptId {
        &self.id
    }

    #[must_use]
    pub fn student_id(&self) -> &UserId {
        &self.student_id
    }

    #[must_use]
    pub fn quiz_id(&self) -> &QuizId {
        &self.quiz_id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Route that displays this attempt's result.
    #[must_use]
    pub fn result_path(&self) -> String {
        format!("/quiz/result/{}/{}", self.score, self.total)
    }
}
