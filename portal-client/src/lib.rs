//! # Student Portal API Client - Library Root
//!
//! Typed async client for the student management portal's REST API. It
//! creates and reads students, courses and enrollments; forms, lists and
//! notifications live in the presentation layer that calls into it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              portal-client (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client                           │
//! │  Serde         - JSON encoding via the `shared` DTOs   │
//! │  Tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON
//!          ▼
//! ┌─────────────────┐
//! │  Portal API     │
//! │  (remote store) │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: `ApiError`, `Result<T>`, and the `PortalService` trait
//! - **services**: `ApiClient` and its endpoint modules
//! - **utils**: pre-submit validation matching the portal's form rules
//! - **logging**: optional `tracing` subscriber setup
//!
//! ## Error Contract
//!
//! Every operation returns [`Result<T>`](core::Result). A non-success status
//! is [`ApiError::Status`] with the server's `error` message verbatim; single
//! record lookups return `Ok(None)` when the record does not exist.
//!
//! ## Example
//!
//! ```rust,no_run
//! use portal_client::{ApiClient, ClientConfig};
//! use shared::{Enrollment, NewCourse, NewStudent};
//!
//! # async fn run() -> portal_client::Result<()> {
//! let client = ApiClient::with_config(ClientConfig::new("http://localhost:3000"))?;
//!
//! let ada = client
//!     .create_student(&NewStudent::new("Ada", 30, "ada@example.com"))
//!     .await?;
//! let cs101 = client.create_course(&NewCourse::new("CS101", "Intro")).await?;
//! client
//!     .create_enrollment(&Enrollment::new(ada.id, cs101.id))
//!     .await?;
//!
//! let enrolled = client.get_student_courses(ada.id).await?;
//! assert!(enrolled.contains_course(cs101.id));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod logging;
pub mod services;
pub mod utils;

pub use crate::core::{ApiError, PortalService, Result};
pub use services::api::{ApiClient, ClientConfig, DEFAULT_BASE_URL};
pub use utils::validation::ValidationError;
