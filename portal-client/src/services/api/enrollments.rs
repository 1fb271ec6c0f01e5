//! # Enrollment Endpoints
//!
//! `POST /enrollments` and `GET /enrollments/students/{id}/courses`.

use shared::{Enrollment, EnrollmentConfirmation, StudentCourses};

use super::client::ApiClient;
use crate::core::error::Result;

impl ApiClient {
    /// Enroll a student in a course.
    ///
    /// Whether a duplicate pair is accepted is up to the server; a rejection
    /// surfaces the server's `error` message. An empty success body (`204`,
    /// or a `201` without content) yields an empty confirmation.
    #[tracing::instrument(
        skip(self, enrollment),
        fields(student_id = enrollment.student_id, course_id = enrollment.course_id)
    )]
    pub async fn create_enrollment(
        &self,
        enrollment: &Enrollment,
    ) -> Result<EnrollmentConfirmation> {
        tracing::info!("Creating enrollment");

        let request = self
            .client
            .post(self.endpoint("/enrollments"))
            .json(enrollment);
        let confirmation: EnrollmentConfirmation = self
            .fetch_or_default("create_enrollment", request, "Failed to create enrollment")
            .await?;

        tracing::info!("Enrollment created");
        Ok(confirmation)
    }

    /// Courses a student is enrolled in.
    #[tracing::instrument(skip(self))]
    pub async fn get_student_courses(&self, student_id: i64) -> Result<StudentCourses> {
        let url = self.endpoint(&format!("/enrollments/students/{}/courses", student_id));
        let request = self.client.get(url);
        let payload: StudentCourses = self
            .fetch(
                "get_student_courses",
                request,
                "Failed to fetch student courses",
            )
            .await?;

        tracing::debug!(count = payload.courses.len(), "Student courses fetched");
        Ok(payload)
    }
}
