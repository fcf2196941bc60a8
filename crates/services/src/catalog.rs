//! Sample content the in-memory services start with.

use edu_core::model::{Chapter, ChapterId, Course, CourseId, Question, QuestionId, Quiz, QuizId};

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[must_use]
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course::new(
            CourseId::new("math-101"),
            "Basic Mathematics",
            "Numbers, fractions and everyday arithmetic.",
            vec![
                Chapter::new(ChapterId::new("math-101-1"), "Counting and place value", None),
                Chapter::new(
                    ChapterId::new("math-101-2"),
                    "Fractions",
                    Some("https://example.com/videos/fractions".to_owned()),
                ),
            ],
            true,
        ),
        Course::new(
            CourseId::new("sci-101"),
            "General Science",
            "The solar system, matter and living things.",
            vec![Chapter::new(ChapterId::new("sci-101-1"), "The solar system", None)],
            true,
        ),
        Course::new(
            CourseId::new("eng-201"),
            "English Grammar",
            "Tenses and sentence structure.",
            Vec::new(),
            false,
        ),
    ]
}

#[must_use]
pub fn sample_quizzes() -> Vec<Quiz> {
    vec![
        Quiz::new(
            QuizId::new("math-basics"),
            "Arithmetic warm-up",
            CourseId::new("math-101"),
            vec![
                Question::new(
                    QuestionId::new("math-basics-1"),
                    "What is 7 + 5?",
                    options(&["10", "12", "13", "15"]),
                    1,
                ),
                Question::new(
                    QuestionId::new("math-basics-2"),
                    "Which fraction equals one half?",
                    options(&["2/4", "1/3", "3/4"]),
                    0,
                ),
            ],
        ),
        Quiz::new(
            QuizId::new("solar-system"),
            "Planets",
            CourseId::new("sci-101"),
            vec![Question::new(
                QuestionId::new("solar-system-1"),
                "Which planet is closest to the Sun?",
                options(&["Venus", "Earth", "Mercury", "Mars"]),
                2,
            )],
        ),
    ]
}
