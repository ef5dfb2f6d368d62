//! Prerequisite graph built from a course catalog (Arc<str> optimized)
//!
//! Uses Arc<str> for zero-cost cloning of course codes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::catalog::Catalog;

/// Directed graph of prerequisite constraints
///
/// Immutable once built; resolution works on its own copy of the
/// in-degree table.
pub struct CourseGraph {
    /// course -> courses it directly enables (its dependents)
    adjacency: HashMap<Arc<str>, Vec<Arc<str>>>,
    /// course -> count of unresolved prerequisites
    in_degree: HashMap<Arc<str>, u32>,
    /// All course codes, in first-seen order
    nodes: Vec<Arc<str>>,
    /// Quick lookup for Arc<str> reuse during construction
    node_set: HashSet<Arc<str>>,
}

impl CourseGraph {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let capacity = catalog.courses.len();
        let mut graph = Self {
            adjacency: HashMap::with_capacity(capacity),
            in_degree: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            node_set: HashSet::with_capacity(capacity),
        };

        // Duplicate (prerequisite, course) pairs must count once toward
        // in-degree, so distinct edges are tracked explicitly.
        let mut edges: HashSet<(Arc<str>, Arc<str>)> = HashSet::new();

        for course in &catalog.courses {
            let code = graph.register(course.code.as_str());

            for prerequisite in &course.prerequisites {
                // Prerequisite-only codes (never declared as a record)
                // are full nodes too; without this, in-degree bookkeeping
                // would silently skip them.
                let prerequisite = graph.register(prerequisite.as_str());

                if !edges.insert((Arc::clone(&prerequisite), Arc::clone(&code))) {
                    continue;
                }

                if let Some(dependents) = graph.adjacency.get_mut(&prerequisite) {
                    dependents.push(Arc::clone(&code));
                }
                if let Some(degree) = graph.in_degree.get_mut(&code) {
                    *degree += 1;
                }
            }
        }

        tracing::debug!(
            courses = graph.nodes.len(),
            edges = edges.len(),
            "prerequisite graph built"
        );

        graph
    }

    /// Register a course code as a node, reusing the existing Arc<str>
    /// when it was seen before.
    fn register(&mut self, code: &str) -> Arc<str> {
        if let Some(existing) = self.node_set.get(code) {
            return Arc::clone(existing);
        }

        let id: Arc<str> = Arc::from(code);
        self.nodes.push(Arc::clone(&id));
        self.node_set.insert(Arc::clone(&id));
        self.adjacency.insert(Arc::clone(&id), Vec::new());
        self.in_degree.insert(Arc::clone(&id), 0);
        id
    }

    /// All course codes, in first-seen order
    #[inline]
    pub fn nodes(&self) -> &[Arc<str>] {
        &self.nodes
    }

    /// Courses directly enabled by `code`
    #[inline]
    pub fn dependents(&self, code: &str) -> &[Arc<str>] {
        static EMPTY: &[Arc<str>] = &[];
        self.adjacency
            .get(code)
            .map(|v| v.as_slice())
            .unwrap_or(EMPTY)
    }

    /// Unresolved-prerequisite count per course
    #[inline]
    pub(crate) fn in_degrees(&self) -> &HashMap<Arc<str>, u32> {
        &self.in_degree
    }

    /// Number of distinct courses (declared or prerequisite-only)
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct prerequisite edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
