use serde::{Deserialize, Serialize};

use crate::model::ids::{ChapterId, CourseId};

/// A single lesson inside a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    id: ChapterId,
    title: String,
    video_url: Option<String>,
}

impl Chapter {
    #[must_use]
    pub fn new(id: ChapterId, title: impl Into<String>, video_url: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            video_url,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }
}

/// A course with its ordered chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    chapters: Vec<Chapter>,
    is_published: bool,
}

impl Course {
    #[must_use]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        chapters: Vec<Chapter>,
        is_published: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            chapters,
            is_published,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.is_published
    }
}
