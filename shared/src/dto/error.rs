use serde::{Deserialize, Serialize};

/// Error response body, e.g. `{"error": "Student not found"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
