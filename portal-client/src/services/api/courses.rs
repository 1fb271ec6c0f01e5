//! # Course Endpoints
//!
//! `POST /courses`, `GET /courses/{id}`, `GET /courses`.

use shared::{Course, NewCourse};

use super::client::ApiClient;
use crate::core::error::Result;

impl ApiClient {
    /// Create a course.
    #[tracing::instrument(skip(self, course), fields(title = %course.title))]
    pub async fn create_course(&self, course: &NewCourse) -> Result<Course> {
        tracing::info!("Creating course");

        let request = self.client.post(self.endpoint("/courses")).json(course);
        let created: Course = self
            .fetch("create_course", request, "Failed to create course")
            .await?;

        tracing::info!(course_id = created.id, "Course created");
        Ok(created)
    }

    /// Look up one course. `Ok(None)` when no course has this id.
    #[tracing::instrument(skip(self))]
    pub async fn get_course(&self, id: i64) -> Result<Option<Course>> {
        let request = self.client.get(self.endpoint(&format!("/courses/{}", id)));
        self.fetch_optional("get_course", request, "Failed to find course")
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all_courses(&self) -> Result<Vec<Course>> {
        let request = self.client.get(self.endpoint("/courses"));
        let courses: Vec<Course> = self
            .fetch("get_all_courses", request, "Failed to fetch courses")
            .await?;

        tracing::debug!(count = courses.len(), "Courses fetched");
        Ok(courses)
    }
}
