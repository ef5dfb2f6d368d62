//! Prerequisite graph construction and topological resolution

pub mod graph;
pub mod resolve;

pub use graph::CourseGraph;
pub use resolve::Resolution;
