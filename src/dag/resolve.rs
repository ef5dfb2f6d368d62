//! Kahn's-algorithm resolution of a prerequisite graph
//!
//! Ties among ready courses are broken deterministically: whenever more
//! than one course has all prerequisites satisfied, the lexicographically
//! smallest code is emitted first. Output therefore never depends on
//! catalog record order or map iteration order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Arc;

use super::graph::CourseGraph;

/// Outcome of one resolution pass
///
/// `unresolved` is the cycle footprint: every course whose prerequisite
/// count never reached zero, sorted by code. Empty on success.
#[derive(Debug)]
pub struct Resolution {
    pub order: Vec<Arc<str>>,
    pub unresolved: Vec<Arc<str>>,
}

impl Resolution {
    /// True when every course made it into the order
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

impl CourseGraph {
    /// Produce a topologically valid course order, or a partial order plus
    /// the set of courses blocked by a circular dependency.
    ///
    /// The graph itself is untouched; resolving twice yields the same
    /// result.
    pub fn resolve(&self) -> Resolution {
        let mut in_degree = self.in_degrees().clone();

        // Min-heap of ready courses (all prerequisites satisfied)
        let mut ready: BinaryHeap<Reverse<Arc<str>>> = in_degree
            .iter()
            .filter(|&(_, degree)| *degree == 0)
            .map(|(code, _)| Reverse(Arc::clone(code)))
            .collect();

        let mut order: Vec<Arc<str>> = Vec::with_capacity(self.len());

        while let Some(Reverse(course)) = ready.pop() {
            for dependent in self.dependents(&course) {
                if let Some(degree) = in_degree.get_mut(dependent.as_ref()) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push(Reverse(Arc::clone(dependent)));
                    }
                }
            }
            order.push(course);
        }

        // Anything still carrying a non-zero count is in, or downstream
        // of, a cycle.
        let mut unresolved: Vec<Arc<str>> = in_degree
            .iter()
            .filter(|&(_, degree)| *degree > 0)
            .map(|(code, _)| Arc::clone(code))
            .collect();
        unresolved.sort();

        if unresolved.is_empty() {
            tracing::debug!(courses = order.len(), "course order resolved");
        } else {
            tracing::debug!(
                resolved = order.len(),
                stuck = unresolved.len(),
                "circular dependency detected"
            );
        }

        Resolution { order, unresolved }
    }
}
