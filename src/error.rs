//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum CorsoError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate course code '{code}' in catalog")]
    DuplicateCourse { code: String },

    #[error("Course record with an empty code in catalog")]
    EmptyCourseCode,

    /// Carries the cycle footprint: every course stuck at a non-zero
    /// prerequisite count when resolution stalled.
    #[error("Circular dependency among {} course(s): {}", .unresolved.len(), .unresolved.join(", "))]
    CircularDependency { unresolved: Vec<String> },
}

impl FixSuggestion for CorsoError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            CorsoError::JsonParse(_) => {
                Some("Check the catalog is valid JSON: {\"courses\": [{\"code\": \"...\", \"prerequisites\": [...]}]}")
            }
            CorsoError::Io(_) => Some("Check file path and permissions"),
            CorsoError::DuplicateCourse { .. } => {
                Some("Each course may be declared at most once; merge the duplicate records")
            }
            CorsoError::EmptyCourseCode => Some("Give every course record a non-empty code"),
            CorsoError::CircularDependency { .. } => {
                Some("Break the prerequisite loop among the listed courses")
            }
        }
    }
}
