//! Validation utilities for user input
//!
//! These mirror the portal's form rules. The client never runs them on its
//! own; callers check input before submitting.

use std::fmt;

use shared::{NewCourse, NewStudent};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_TITLE_LEN: usize = 2;
pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 100;

/// First failing field and its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let invalid = || Err(ValidationError::new("email", "Invalid email address"));

    if email.is_empty() {
        return Err(ValidationError::new("email", "Email is required"));
    }

    if email.chars().any(char::is_whitespace) {
        return invalid();
    }

    let Some((local, domain)) = email.split_once('@') else {
        return invalid();
    };

    if local.is_empty() || domain.contains('@') {
        return invalid();
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return invalid();
    }

    Ok(())
}

/// Validate a student creation request
pub fn validate_student(student: &NewStudent) -> ValidationResult {
    if student.name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::new(
            "name",
            format!("Name must be at least {} characters", MIN_NAME_LEN),
        ));
    }

    if student.age < MIN_AGE {
        return Err(ValidationError::new(
            "age",
            format!("Age must be at least {}", MIN_AGE),
        ));
    }

    if student.age > MAX_AGE {
        return Err(ValidationError::new(
            "age",
            format!("Age must be less than {}", MAX_AGE),
        ));
    }

    validate_email(&student.email)
}

/// Validate a course creation request
pub fn validate_course(course: &NewCourse) -> ValidationResult {
    if course.title.trim().is_empty() {
        return Err(ValidationError::new("title", "Title is required"));
    }

    if course.title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(ValidationError::new(
            "title",
            format!("Title must be at least {} characters", MIN_TITLE_LEN),
        ));
    }

    Ok(())
}

/// Validate an identifier typed into a lookup form
pub fn validate_lookup_id(id: i64) -> ValidationResult {
    if id <= 0 {
        return Err(ValidationError::new("id", "ID must be a positive number"));
    }
    Ok(())
}

/// Parse and validate a lookup identifier from raw form text
pub fn parse_lookup_id(input: &str) -> Result<i64, ValidationError> {
    let id = input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::new("id", "ID must be a positive number"))?;
    validate_lookup_id(id)?;
    Ok(id)
}
