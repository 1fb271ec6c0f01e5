//! # Portal API Client Module
//!
//! HTTP client for the student management portal's REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient struct and the shared request/decode path
//! ├── config.rs       - ClientConfig (base URL, timeout, user agent)
//! ├── students.rs     - /students endpoints
//! ├── courses.rs      - /courses endpoints
//! └── enrollments.rs  - /enrollments endpoints
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Client method |
//! |---|---|---|
//! | POST | `/students` | [`ApiClient::create_student`] |
//! | GET | `/students/{id}` | [`ApiClient::get_student`] |
//! | GET | `/students` | [`ApiClient::get_all_students`] |
//! | POST | `/courses` | [`ApiClient::create_course`] |
//! | GET | `/courses/{id}` | [`ApiClient::get_course`] |
//! | GET | `/courses` | [`ApiClient::get_all_courses`] |
//! | POST | `/enrollments` | [`ApiClient::create_enrollment`] |
//! | GET | `/enrollments/students/{id}/courses` | [`ApiClient::get_student_courses`] |

pub mod client;
pub mod config;
pub mod courses;
pub mod enrollments;
pub mod students;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
