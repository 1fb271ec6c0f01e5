//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the portal front-end and the
//! student management API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::student`]**: `Student`, `NewStudent`
//!   - **[`dto::course`]**: `Course`, `NewCourse`
//!   - **[`dto::enrollment`]**: `Enrollment`, `EnrollmentConfirmation`, `StudentCourses`
//!   - **[`dto::error`]**: `ErrorResponse`
//!
//! ## Usage
//!
//! ```rust
//! use shared::{NewStudent, Student};
//!
//! let request = NewStudent::new("Ada", 30, "ada@example.com");
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(!body.contains("\"id\""));
//!
//! let created: Student = serde_json::from_str(
//!     r#"{"id":1,"name":"Ada","age":30,"email":"ada@example.com"}"#,
//! ).unwrap();
//! assert_eq!(created.id, 1);
//! ```

pub mod dto;

pub use dto::*;
