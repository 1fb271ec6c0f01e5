//! Utility functions

pub mod validation;

pub use validation::{
    parse_lookup_id, validate_course, validate_email, validate_lookup_id, validate_student,
    ValidationError,
};
