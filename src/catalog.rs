//! Course catalog parsing structures

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::CorsoError;

/// Catalog parsed from JSON
#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
pub struct Course {
    pub code: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Catalog {
    /// Reject records the graph builder must never see: blank codes and
    /// courses declared more than once.
    pub fn validate(&self) -> Result<(), CorsoError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.courses.len());

        for course in &self.courses {
            if course.code.trim().is_empty() {
                return Err(CorsoError::EmptyCourseCode);
            }
            if !seen.insert(course.code.as_str()) {
                return Err(CorsoError::DuplicateCourse {
                    code: course.code.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Read, parse and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog, CorsoError> {
    let json = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&json)?;
    catalog.validate()?;
    Ok(catalog)
}
