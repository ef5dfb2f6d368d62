//! Corso - course prerequisite ordering
//!
//! Builds a directed graph from a course catalog's prerequisite relations
//! and produces a topologically valid course order, or reports the courses
//! stuck in a circular dependency.

pub mod catalog;
pub mod dag;
pub mod error;
pub mod report;

pub use catalog::{load_catalog, Catalog, Course};
pub use dag::{CourseGraph, Resolution};
pub use error::{CorsoError, FixSuggestion};
pub use report::{write_report, OrderReport};
