//! Branching walk handle over a [`DirectedGraph`].
//!
//! A [`Cursor`] is a plain `Copy` handle: it names one node and the graph it
//! came from, and borrows nothing. Every read or step takes the graph as an
//! argument, which keeps the graph freely mutable between steps and makes a
//! stale cursor a checked error instead of a dangling reference.

use super::node::NodeId;
use super::{DirectedGraph, GraphId};
use crate::error::{GraphError, GraphResult};

/// A movable, non-owning handle for stepping through adjacency.
///
/// Obtained from [`DirectedGraph::begin`]. `Cursor::default()` is
/// unpositioned, and every operation on it fails with
/// [`GraphError::Unpositioned`].
///
/// There is no "advance to the next node in order" operation: a cursor
/// models arbitrary branching walks, one chosen tail at a time.
///
/// # Example
///
/// ```rust
/// use digraph::DirectedGraph;
///
/// let mut graph = DirectedGraph::from(vec!["A", "B", "C"]);
/// graph.connect(0, 1)?;
/// graph.connect(1, 2)?;
///
/// let mut cursor = graph.begin()?;
/// cursor.next(&graph, 0)?;
/// assert_eq!(*cursor.get(&graph)?, "B");
/// cursor.next(&graph, 0)?;
/// assert_eq!(*cursor.get(&graph)?, "C");
/// assert!(cursor.next(&graph, 0).is_err());
/// # Ok::<(), digraph::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    position: Option<(GraphId, NodeId)>,
}

impl Cursor {
    pub(super) fn at(owner: GraphId, node: NodeId) -> Self {
        Self {
            position: Some((owner, node)),
        }
    }

    /// Returns `true` unless this cursor was default-constructed.
    pub fn is_positioned(&self) -> bool {
        self.position.is_some()
    }

    /// Stable identity of the node under the cursor.
    pub fn node_id(&self) -> Option<NodeId> {
        self.position.map(|(_, node)| node)
    }

    /// Resolves the cursor against `graph`, checking every precondition.
    fn locate<T>(&self, graph: &DirectedGraph<T>) -> GraphResult<NodeId> {
        let (owner, node) = self.position.ok_or(GraphError::Unpositioned)?;
        if owner != graph.id {
            return Err(GraphError::ForeignCursor);
        }
        if !graph.nodes.contains_key(node.0) {
            return Err(GraphError::Dangling);
        }
        Ok(node)
    }

    /// Reads the value under the cursor.
    ///
    /// # Errors
    /// [`GraphError::Unpositioned`], [`GraphError::ForeignCursor`], or
    /// [`GraphError::Dangling`] if the node has been erased.
    pub fn get<'g, T>(&self, graph: &'g DirectedGraph<T>) -> GraphResult<&'g T> {
        let node = self.locate(graph)?;
        graph
            .nodes
            .get(node.0)
            .map(|n| &n.value)
            .ok_or(GraphError::Dangling)
    }

    /// Mutable access to the value under the cursor.
    ///
    /// # Errors
    /// Same as [`Cursor::get`].
    pub fn get_mut<'g, T>(&self, graph: &'g mut DirectedGraph<T>) -> GraphResult<&'g mut T> {
        let node = self.locate(graph)?;
        graph
            .nodes
            .get_mut(node.0)
            .map(|n| &mut n.value)
            .ok_or(GraphError::Dangling)
    }

    /// Current position of the node under the cursor.
    ///
    /// # Errors
    /// Same as [`Cursor::get`].
    pub fn position<T>(&self, graph: &DirectedGraph<T>) -> GraphResult<usize> {
        let node = self.locate(graph)?;
        graph.position_of(node).ok_or(GraphError::Dangling)
    }

    /// Number of outgoing adjacency entries at the current node.
    ///
    /// # Errors
    /// Same as [`Cursor::get`].
    pub fn outdegree<T>(&self, graph: &DirectedGraph<T>) -> GraphResult<usize> {
        let node = self.locate(graph)?;
        graph
            .nodes
            .get(node.0)
            .map(|n| n.adjacency.len())
            .ok_or(GraphError::Dangling)
    }

    /// Moves to the `k`-th adjacency target of the current node.
    ///
    /// On error the cursor is left where it was.
    ///
    /// # Errors
    /// The cursor preconditions of [`Cursor::get`], then
    /// [`GraphError::TailOutOfRange`] if `k >= self.outdegree(graph)`.
    pub fn next<T>(&mut self, graph: &DirectedGraph<T>, k: usize) -> GraphResult<()> {
        let node = self.locate(graph)?;
        let adjacency = graph
            .nodes
            .get(node.0)
            .map(|n| n.adjacency.as_slice())
            .ok_or(GraphError::Dangling)?;

        let &target = adjacency.get(k).ok_or_else(|| {
            debug_event!(index = k, outdegree = adjacency.len(), "cursor step rejected");
            GraphError::tail_out_of_range(k, adjacency.len())
        })?;

        self.position = Some((graph.id, target));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cursor_is_unpositioned() {
        let graph: DirectedGraph<i32> = DirectedGraph::from(vec![1]);
        let mut cursor = Cursor::default();

        assert!(!cursor.is_positioned());
        assert_eq!(cursor.get(&graph), Err(GraphError::Unpositioned));
        assert_eq!(cursor.outdegree(&graph), Err(GraphError::Unpositioned));
        assert_eq!(cursor.next(&graph, 0), Err(GraphError::Unpositioned));
        assert!(cursor.get(&graph).unwrap_err().is_logic());
    }

    #[test]
    fn failed_step_keeps_position() {
        let mut graph = DirectedGraph::from(vec![10, 20]);
        graph.connect(0, 1).unwrap();

        let mut cursor = graph.begin().unwrap();
        let before = cursor;
        assert_eq!(
            cursor.next(&graph, 1),
            Err(GraphError::TailOutOfRange {
                index: 1,
                outdegree: 1
            })
        );
        assert_eq!(cursor, before);
        assert_eq!(*cursor.get(&graph).unwrap(), 10);
    }

    #[test]
    fn cursor_rejects_other_graph() {
        let a = DirectedGraph::from(vec![1, 2]);
        let b = a.clone();

        let cursor = a.begin().unwrap();
        assert_eq!(cursor.get(&b), Err(GraphError::ForeignCursor));
    }
}
