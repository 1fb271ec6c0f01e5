//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Client error type (`ApiError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`PortalService`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use portal_client::core::PortalService;
//! use portal_client::ApiClient;
//!
//! let api: Arc<dyn PortalService> = Arc::new(ApiClient::new());
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::PortalService;
