//! # Service Traits
//!
//! Traits for dependency injection, so the presentation layer can be tested
//! against a mock instead of a live server.

use async_trait::async_trait;
use shared::{
    Course, Enrollment, EnrollmentConfirmation, NewCourse, NewStudent, Student, StudentCourses,
};

use crate::core::error::Result;
use crate::services::api::ApiClient;

/// Trait for portal API operations
///
/// Implemented by [`ApiClient`]. Callers hold `Arc<dyn PortalService>`.
#[async_trait]
pub trait PortalService: Send + Sync {
    /// Create a student; the result carries the assigned id
    async fn create_student(&self, student: &NewStudent) -> Result<Student>;

    /// Look up a student, `None` if it does not exist
    async fn get_student(&self, id: i64) -> Result<Option<Student>>;

    /// List all students
    async fn get_all_students(&self) -> Result<Vec<Student>>;

    /// Create a course; the result carries the assigned id
    async fn create_course(&self, course: &NewCourse) -> Result<Course>;

    /// Look up a course, `None` if it does not exist
    async fn get_course(&self, id: i64) -> Result<Option<Course>>;

    /// List all courses
    async fn get_all_courses(&self) -> Result<Vec<Course>>;

    /// Enroll a student in a course
    async fn create_enrollment(&self, enrollment: &Enrollment) -> Result<EnrollmentConfirmation>;

    /// Courses a student is enrolled in
    async fn get_student_courses(&self, student_id: i64) -> Result<StudentCourses>;
}

#[async_trait]
impl PortalService for ApiClient {
    async fn create_student(&self, student: &NewStudent) -> Result<Student> {
        ApiClient::create_student(self, student).await
    }

    async fn get_student(&self, id: i64) -> Result<Option<Student>> {
        ApiClient::get_student(self, id).await
    }

    async fn get_all_students(&self) -> Result<Vec<Student>> {
        ApiClient::get_all_students(self).await
    }

    async fn create_course(&self, course: &NewCourse) -> Result<Course> {
        ApiClient::create_course(self, course).await
    }

    async fn get_course(&self, id: i64) -> Result<Option<Course>> {
        ApiClient::get_course(self, id).await
    }

    async fn get_all_courses(&self) -> Result<Vec<Course>> {
        ApiClient::get_all_courses(self).await
    }

    async fn create_enrollment(&self, enrollment: &Enrollment) -> Result<EnrollmentConfirmation> {
        ApiClient::create_enrollment(self, enrollment).await
    }

    async fn get_student_courses(&self, student_id: i64) -> Result<StudentCourses> {
        ApiClient::get_student_courses(self, student_id).await
    }
}
