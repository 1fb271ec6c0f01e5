//! # Services Module
//!
//! External service integrations. The only one is the portal REST API.
//!
//! ```text
//! ┌──────────────────────────┐
//! │  Presentation layer      │
//! │  (forms, lists, toasts)  │
//! └────────────┬─────────────┘
//!              │ PortalService / ApiClient
//!              ▼
//! ┌──────────────────────────┐         ┌──────────────────────┐
//! │  services::api           │  HTTP   │  Portal API server   │
//! │  ApiClient               │ ──────▶ │  /students /courses  │
//! │                          │  JSON   │  /enrollments        │
//! └──────────────────────────┘         └──────────────────────┘
//! ```

pub mod api;

pub use api::{ApiClient, ClientConfig};
