//! Positional edge records and the iterators that produce them.
//!
//! The graph does not store a separate edge ledger. Edges are read off the
//! adjacency lists on demand and reported with the positions their endpoints
//! hold *now*, so a ledger view can never go stale after `erase`.

use core::fmt;
use core::iter::FusedIterator;

use super::node::NodeId;
use super::DirectedGraph;

/// A directed edge between two node positions.
///
/// The derived ordering is lexicographic on `(source, destination)`. The
/// canonical ledger order produced by [`DirectedGraph::edges`] is different:
/// ascending source, ties in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Position of the head (starting) node.
    pub source: usize,
    /// Position of the tail (ending) node.
    pub destination: usize,
}

impl Edge {
    /// Creates an edge record.
    pub const fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Returns `true` if the edge starts and ends at the same position.
    pub const fn is_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, destination): (usize, usize)) -> Self {
        Self::new(source, destination)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Iterator over every edge of a graph in canonical ledger order.
///
/// Created by [`DirectedGraph::edges`].
pub struct Edges<'a, T> {
    graph: &'a DirectedGraph<T>,
    source: usize,
    targets: core::slice::Iter<'a, NodeId>,
}

impl<'a, T> Edges<'a, T> {
    pub(super) fn new(graph: &'a DirectedGraph<T>) -> Self {
        Self {
            graph,
            source: 0,
            targets: graph.adjacency_at(0).iter(),
        }
    }
}

impl<T> Iterator for Edges<'_, T> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        loop {
            if let Some(&target) = self.targets.next() {
                if let Some(destination) = self.graph.position_of(target) {
                    return Some(Edge::new(self.source, destination));
                }
                continue;
            }

            if self.source >= self.graph.len() {
                return None;
            }
            self.source += 1;
            self.targets = self.graph.adjacency_at(self.source).iter();
        }
    }
}

impl<T> FusedIterator for Edges<'_, T> {}

/// Iterator over the positions a node points at, in insertion order.
///
/// Created by [`DirectedGraph::successors`].
pub struct Successors<'a, T> {
    graph: &'a DirectedGraph<T>,
    targets: core::slice::Iter<'a, NodeId>,
}

impl<'a, T> Successors<'a, T> {
    pub(super) fn new(graph: &'a DirectedGraph<T>, targets: &'a [NodeId]) -> Self {
        Self {
            graph,
            targets: targets.iter(),
        }
    }
}

impl<T> Iterator for Successors<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.targets
            .by_ref()
            .find_map(|&target| self.graph.position_of(target))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.targets.size_hint().1)
    }
}

impl<T> DoubleEndedIterator for Successors<'_, T> {
    fn next_back(&mut self) -> Option<usize> {
        self.targets
            .by_ref()
            .rev()
            .find_map(|&target| self.graph.position_of(target))
    }
}

impl<T> FusedIterator for Successors<'_, T> {}
