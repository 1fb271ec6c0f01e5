//! # Student Endpoints
//!
//! `POST /students`, `GET /students/{id}`, `GET /students`.

use shared::{NewStudent, Student};

use super::client::ApiClient;
use crate::core::error::Result;

impl ApiClient {
    /// Create a student. The returned record carries the store-assigned id.
    #[tracing::instrument(skip(self, student), fields(name = %student.name))]
    pub async fn create_student(&self, student: &NewStudent) -> Result<Student> {
        tracing::info!("Creating student");

        let request = self.client.post(self.endpoint("/students")).json(student);
        let created: Student = self
            .fetch("create_student", request, "Failed to create student")
            .await?;

        tracing::info!(student_id = created.id, "Student created");
        Ok(created)
    }

    /// Look up one student. `Ok(None)` when no student has this id.
    #[tracing::instrument(skip(self))]
    pub async fn get_student(&self, id: i64) -> Result<Option<Student>> {
        let request = self.client.get(self.endpoint(&format!("/students/{}", id)));
        self.fetch_optional("get_student", request, "Failed to find student")
            .await
    }

    /// List every student, in the order the server returns them.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_students(&self) -> Result<Vec<Student>> {
        let request = self.client.get(self.endpoint("/students"));
        let students: Vec<Student> = self
            .fetch("get_all_students", request, "Failed to fetch students")
            .await?;

        tracing::debug!(count = students.len(), "Students fetched");
        Ok(students)
    }
}
