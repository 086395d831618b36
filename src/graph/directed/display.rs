//! Line-oriented text rendering.
//!
//! Only reads the public query surface (`len`, degrees, indexing,
//! `successors`), never adjacency storage directly.

use core::fmt;

use super::DirectedGraph;

/// Renders one line per isolated node (its value alone) and one line per
/// outgoing edge (`"source -> destination"`, using values). A node with
/// incoming edges but no outgoing ones produces no line of its own.
impl<T: fmt::Display> fmt::Display for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in 0..self.len() {
            let indegree = self.indegree(k).unwrap_or(0);
            let outdegree = self.outdegree(k).unwrap_or(0);

            if indegree == 0 && outdegree == 0 {
                writeln!(f, "{}", self[k])?;
                continue;
            }

            let Ok(successors) = self.successors(k) else {
                continue;
            };
            for tail in successors {
                writeln!(f, "{} -> {}", self[k], self[tail])?;
            }
        }
        Ok(())
    }
}
