//! Exercise reference data.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ExerciseId;

/// Exercises guaranteed to exist after startup seeding.
pub const DEFAULT_EXERCISES: [&str; 3] = ["Bench Press", "Squat", "Deadlift"];

/// A named exercise that workout records reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ExerciseId::new(),
            name: name.into(),
        }
    }
}
