//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the portal's REST API.
//!
//! ## Module Organization
//!
//! - [`student`] - Student records and creation requests
//! - [`course`] - Course records and creation requests
//! - [`enrollment`] - Enrollment requests, confirmations and per-student course lists
//! - [`error`] - Error payload returned on non-success responses
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Creation requests**: the entity without its `id`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /students
//! Content-Type: application/json
//!
//! { "name": "Ada", "age": 30, "email": "ada@example.com" }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! { "id": 1, "name": "Ada", "age": 30, "email": "ada@example.com" }
//! ```

pub mod course;
pub mod enrollment;
pub mod error;
pub mod student;

pub use course::*;
pub use enrollment::*;
pub use error::*;
pub use student::*;
