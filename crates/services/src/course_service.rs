use edu_core::model::{Course, CourseId};

use crate::catalog::sample_courses;

/// Read-only course catalog held in memory.
#[derive(Debug, Clone)]
pub struct CourseService {
    courses: Vec<Course>,
}

impl CourseService {
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Catalog seeded with the sample courses.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_courses())
    }

    #[must_use]
    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses students can see.
    #[must_use]
    pub fn published_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.is_published()).collect()
    }

    #[must_use]
    pub fn get_course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }
}
