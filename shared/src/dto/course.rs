//! # Course Data Transfer Objects
//!
//! Wire shapes for the `/courses` collection.

use serde::{Deserialize, Serialize};

/// Course record as stored by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Course creation request (`POST /courses`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
}

impl NewCourse {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: i64) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
        }
    }
}

impl From<Course> for NewCourse {
    fn from(course: Course) -> Self {
        Self {
            title: course.title,
            description: course.description,
        }
    }
}
