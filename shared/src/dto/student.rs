//! # Student Data Transfer Objects
//!
//! Wire shapes for the `/students` collection.

use serde::{Deserialize, Serialize};

/// Student record as stored by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// Student creation request (`POST /students`).
///
/// Same fields as [`Student`] minus the identifier, which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

impl From<Student> for NewStudent {
    fn from(student: Student) -> Self {
        Self {
            name: student.name,
            age: student.age,
            email: student.email,
        }
    }
}
