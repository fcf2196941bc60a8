use edu_core::model::{Course, CourseId};

/// UI-ready course card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub chapters_label: String,
    pub status_label: &'static str,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().clone(),
            title: course.title().to_owned(),
            description: course.description().to_owned(),
            chapters_label: chapters_label(course.chapters().len()),
            status_label: if course.is_published() {
                "Published"
            } else {
                "Draft"
            },
        }
    }
}

#[must_use]
pub fn map_course_cards<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<CourseCardVm> {
    courses.into_iter().map(CourseCardVm::from).collect()
}

fn chapters_label(count: usize) -> String {
    match count {
        0 => "No chapters yet".to_owned(),
        1 => "1 chapter".to_owned(),
        n => format!("{n} chapters"),
    }
}
