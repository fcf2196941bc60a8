use edu_core::model::{Course, Quiz, QuizAttempt, QuizId};
use edu_core::route::RoutePath;

use crate::vm::time_fmt::format_datetime;

/// A quiz row on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub id: QuizId,
    pub title: String,
    pub course_title: String,
    pub questions_label: String,
    pub take_route: RoutePath,
}

impl QuizCardVm {
    fn new(quiz: &Quiz, courses: &[Course]) -> Self {
        let course_title = courses
            .iter()
            .find(|course| course.id() == quiz.course_id())
            .map_or_else(|| quiz.course_id().to_string(), |course| course.title().to_owned());
        let count = quiz.questions().len();
        Self {
            id: quiz.id().clone(),
            title: quiz.title().to_owned(),
            course_title,
            questions_label: if count == 1 {
                "1 question".to_owned()
            } else {
                format!("{count} questions")
            },
            take_route: RoutePath::new(format!("/quiz/take/{}", quiz.id())),
        }
    }
}

#[must_use]
pub fn map_quiz_cards(quizzes: &[Quiz], courses: &[Course]) -> Vec<QuizCardVm> {
    quizzes
        .iter()
        .map(|quiz| QuizCardVm::new(quiz, courses))
        .collect()
}

/// A past attempt in the student's history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRowVm {
    pub quiz_title: String,
    pub score_label: String,
    pub submitted_at_str: String,
    pub result_route: RoutePath,
}

#[must_use]
pub fn map_attempt_rows(attempts: &[QuizAttempt], quizzes: &[Quiz]) -> Vec<AttemptRowVm> {
    attempts
        .iter()
        .map(|attempt| {
            let quiz_title = quizzes
                .iter()
                .find(|quiz| quiz.id() == attempt.quiz_id())
                .map_or_else(|| attempt.quiz_id().to_string(), |quiz| quiz.title().to_owned());
            AttemptRowVm {
                quiz_title,
                score_label: format!("{}/{}", attempt.score(), attempt.total()),
                submitted_at_str: format_datetime(attempt.submitted_at()),
                result_route: RoutePath::new(attempt.result_path()),
            }
        })
        .collect()
}

/// The student's in-progress selections for one quiz.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSheetVm {
    selections: Vec<Option<usize>>,
}

impl AnswerSheetVm {
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            selections: vec![None; question_count],
        }
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    pub fn select(&mut self, question: usize, option: usize) {
        if let Some(slot) = self.selections.get_mut(question) {
            *slot = Some(option);
        }
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.selections
    }
}
