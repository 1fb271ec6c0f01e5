//! # Enrollment Data Transfer Objects
//!
//! An enrollment pairs a student with a course. It has no identifier of its
//! own; duplicate pairs are for the remote store to reject or accept.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::course::Course;

/// Enrollment request (`POST /enrollments`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Enrollment {
    pub student_id: i64,
    pub course_id: i64,
}

impl Enrollment {
    pub fn new(student_id: i64, course_id: i64) -> Self {
        Self {
            student_id,
            course_id,
        }
    }
}

/// Confirmation returned after a successful enrollment.
///
/// The payload is server-defined, so any JSON value is accepted:
///
/// - an object: its `message` string (if any) is picked out and the other
///   fields are kept verbatim in `extra`
/// - a bare string: taken as the `message`
/// - `null` or an empty body: the default (empty) confirmation
/// - anything else (`true`, a number, an array): kept in `raw`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Value", into = "Value")]
pub struct EnrollmentConfirmation {
    pub message: Option<String>,
    pub extra: Map<String, Value>,
    pub raw: Option<Value>,
}

impl EnrollmentConfirmation {
    /// Look up a field the server sent alongside the message.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

impl From<Value> for EnrollmentConfirmation {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::String(message) => Self {
                message: Some(message),
                ..Default::default()
            },
            Value::Object(mut extra) => {
                let message = match extra.remove("message") {
                    Some(Value::String(message)) => Some(message),
                    Some(other) => {
                        extra.insert("message".to_string(), other);
                        None
                    }
                    None => None,
                };
                Self {
                    message,
                    extra,
                    raw: None,
                }
            }
            other => Self {
                raw: Some(other),
                ..Default::default()
            },
        }
    }
}

impl From<EnrollmentConfirmation> for Value {
    fn from(confirmation: EnrollmentConfirmation) -> Self {
        if let Some(raw) = confirmation.raw {
            return raw;
        }
        let mut map = confirmation.extra;
        if let Some(message) = confirmation.message {
            map.insert("message".to_string(), Value::String(message));
        }
        Value::Object(map)
    }
}

/// Response of `GET /enrollments/students/{id}/courses`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentCourses {
    pub courses: Vec<Course>,
}

impl StudentCourses {
    pub fn contains_course(&self, course_id: i64) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }
}
