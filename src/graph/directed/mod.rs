//! A positional directed multigraph.
//!
//! [`DirectedGraph`] stores arbitrary values as nodes addressed by their
//! 0-based position (insertion order), plus directed edges between them.
//! Parallel edges and self-loops are allowed; [`DirectedGraph::is_simple`]
//! reports whether any are present.
//!
//! Storage layout:
//! - `nodes`: a generational [`SlotMap`] owning every [`Node`]
//! - `order`: `Vec<NodeId>` mapping positions to slots
//! - each node's adjacency is a `Vec<NodeId>` (relation + lookup, never ownership)
//!
//! The adjacency lists are the single source of truth for edges. The
//! positional edge ledger ([`DirectedGraph::edges`]) is derived from them on
//! demand, so erasing a node can never leave stale edge records behind.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push` | \(O(1)\) amortized | Appends to the order and the arena |
//! | `connect` | \(O(1)\) amortized | Appends one adjacency entry |
//! | `disconnect_edge` | \(O(\text{out-degree})\) | Scans from the back |
//! | `disconnect` | \(O(n + m)\) | Scans all adjacency lists |
//! | `erase` | \(O(n + m)\) | Isolates, then shifts later positions |
//! | `outdegree` | \(O(1)\) | Returns `Vec::len` |
//! | `indegree` | \(O(n + m)\) | Scans all adjacency lists |
//! | `is_simple` | \(O(n \cdot d^2)\) | Pairwise scan per adjacency list |

mod cursor;
mod display;
mod edge;
mod node;
#[cfg(any(test, feature = "proptest"))]
pub mod strategy;


use core::fmt;
use core::ops::{Index, IndexMut};
use core::sync::atomic::{AtomicU64, Ordering};

use crate::collections::slot_map::SlotMap;
use crate::error::{GraphError, GraphResult};

pub use cursor::Cursor;
pub use edge::{Edge, Edges, Successors};
pub use node::NodeId;

use node::Node;

/// Identity of one graph instance, carried by its cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GraphId(u64);

impl GraphId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A directed graph whose nodes are addressed by position.
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
/// assert_eq!(graph.outdegree(0)?, 1);
/// assert_eq!(graph.indegree(2)?, 1);
/// assert!(graph.is_simple());
/// assert_eq!(graph.to_string(), "A -> B\nB -> C\n");
/// # Ok::<(), digraph::GraphError>(())
/// ```
pub struct DirectedGraph<T> {
    id: GraphId,
    nodes: SlotMap<Node<T>>,
    order: Vec<NodeId>,
}

impl<T> DirectedGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: SlotMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: SlotMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Creates a graph of `n` default-valued, unconnected nodes.
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        core::iter::repeat_with(T::default).take(n).collect()
    }

    /// Creates a graph of `n` unconnected nodes, each a clone of `value`.
    pub fn from_elem(value: T, n: usize) -> Self
    where
        T: Clone,
    {
        core::iter::repeat(value).take(n).collect()
    }

    /// Reserves room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.order.reserve(additional);
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.order
            .iter()
            .filter_map(|&id| self.node(id))
            .map(|n| n.adjacency.len())
            .sum()
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.0)
    }

    /// Maps a position to its node, or reports it as out of range.
    fn check(&self, k: usize) -> GraphResult<NodeId> {
        self.order.get(k).copied().ok_or_else(|| {
            debug_event!(index = k, len = self.len(), "node index rejected");
            GraphError::node_out_of_range(k, self.len())
        })
    }

    /// Adjacency of the node at `k`, or an empty slice past the end.
    fn adjacency_at(&self, k: usize) -> &[NodeId] {
        self.order
            .get(k)
            .and_then(|&id| self.node(id))
            .map(|n| n.adjacency.as_slice())
            .unwrap_or(&[])
    }

    /// Stable identity of the node at position `k`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn node_id(&self, k: usize) -> GraphResult<NodeId> {
        self.check(k)
    }

    /// Current position of the node named by `id`, if it still exists.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.node(id).map(|n| n.position)
    }

    /// Returns the value at position `k`, or `None` if out of range.
    pub fn get(&self, k: usize) -> Option<&T> {
        let id = *self.order.get(k)?;
        self.node(id).map(|n| &n.value)
    }

    /// Returns the value at position `k` mutably, or `None` if out of range.
    pub fn get_mut(&mut self, k: usize) -> Option<&mut T> {
        let id = *self.order.get(k)?;
        self.node_mut(id).map(|n| &mut n.value)
    }

    /// Bounds-checked read of the value at position `k`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn at(&self, k: usize) -> GraphResult<&T> {
        let id = self.check(k)?;
        self.node(id)
            .map(|n| &n.value)
            .ok_or_else(|| GraphError::node_out_of_range(k, self.len()))
    }

    /// Bounds-checked mutable access to the value at position `k`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn at_mut(&mut self, k: usize) -> GraphResult<&mut T> {
        let id = self.check(k)?;
        let len = self.len();
        self.node_mut(id)
            .map(|n| &mut n.value)
            .ok_or_else(|| GraphError::node_out_of_range(k, len))
    }

    /// Value of the first node.
    ///
    /// # Errors
    /// [`GraphError::Empty`] if the graph has no nodes.
    pub fn front(&self) -> GraphResult<&T> {
        self.get(0).ok_or(GraphError::Empty)
    }

    /// Mutable value of the first node.
    ///
    /// # Errors
    /// [`GraphError::Empty`] if the graph has no nodes.
    pub fn front_mut(&mut self) -> GraphResult<&mut T> {
        self.get_mut(0).ok_or(GraphError::Empty)
    }

    /// Iterates over node values in position order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.node(id))
            .map(|n| &n.value)
    }

    /// Appends an unconnected node and returns its position.
    pub fn push(&mut self, value: T) -> usize {
        let position = self.order.len();
        let id = NodeId(self.nodes.insert(Node::new(value, position)));
        self.order.push(id);
        trace_event!(position, "node pushed");
        position
    }

    /// Adds a directed edge `from -> to`.
    ///
    /// Repeated calls add parallel edges; nothing is deduplicated.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if either position is out of range.
    /// The graph is unchanged on error.
    pub fn connect(&mut self, from: usize, to: usize) -> GraphResult<()> {
        let head = self.check(from)?;
        let tail = self.check(to)?;
        self.link(head, tail);
        trace_event!(from, to, "edge connected");
        Ok(())
    }

    fn link(&mut self, head: NodeId, tail: NodeId) {
        if let Some(node) = self.node_mut(head) {
            node.adjacency.push(tail);
        }
    }

    /// Removes every edge into or out of `target`.
    fn isolate(&mut self, target: NodeId) {
        if let Some(node) = self.node_mut(target) {
            node.adjacency.clear();
        }

        for &id in &self.order {
            if let Some(node) = self.nodes.get_mut(id.0) {
                node.unlink_all(target);
            }
        }
    }

    /// Removes every edge touching the node at `k`, leaving the node in place.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn disconnect(&mut self, k: usize) -> GraphResult<()> {
        let target = self.check(k)?;
        self.isolate(target);
        trace_event!(position = k, "node disconnected");
        Ok(())
    }

    /// Removes the most recently added edge `from -> to`.
    ///
    /// Returns `Ok(false)` if there was no such edge.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if either position is out of range.
    pub fn disconnect_edge(&mut self, from: usize, to: usize) -> GraphResult<bool> {
        let head = self.check(from)?;
        let tail = self.check(to)?;
        let removed = self.node_mut(head).is_some_and(|n| n.unlink_last(tail));
        trace_event!(from, to, removed, "edge disconnected");
        Ok(removed)
    }

    /// Removes the node at `k` and every edge touching it, returning its value.
    ///
    /// Later nodes shift down by one position. Their edges shift with them:
    /// [`DirectedGraph::edges`] always reports current positions.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn erase(&mut self, k: usize) -> GraphResult<T> {
        let target = self.check(k)?;
        let node = self
            .nodes
            .remove(target.0)
            .ok_or_else(|| GraphError::node_out_of_range(k, self.len()))?;

        self.order.remove(k);
        for (position, &id) in self.order.iter().enumerate().skip(k) {
            if let Some(shifted) = self.nodes.get_mut(id.0) {
                shifted.position = position;
            }
        }

        self.isolate(target);
        trace_event!(position = k, "node erased");
        Ok(node.value)
    }

    /// Removes every node and edge.
    ///
    /// Every outstanding [`Cursor`] and [`NodeId`] stops resolving.
    pub fn clear(&mut self) {
        trace_event!(len = self.len(), "graph cleared");
        self.nodes.clear();
        self.order.clear();
    }

    /// Number of edges ending at the node at `k`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn indegree(&self, k: usize) -> GraphResult<usize> {
        let target = self.check(k)?;
        Ok(self
            .order
            .iter()
            .filter_map(|&id| self.node(id))
            .map(|n| n.adjacency.iter().filter(|&&id| id == target).count())
            .sum())
    }

    /// Number of edges starting at the node at `k`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn outdegree(&self, k: usize) -> GraphResult<usize> {
        let id = self.check(k)?;
        Ok(self.node(id).map_or(0, |n| n.adjacency.len()))
    }

    /// Positions the node at `k` points at, in insertion order.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn successors(&self, k: usize) -> GraphResult<Successors<'_, T>> {
        self.check(k)?;
        Ok(Successors::new(self, self.adjacency_at(k)))
    }

    /// Positions of the nodes pointing at `k`, one entry per incoming edge.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn predecessors(&self, k: usize) -> GraphResult<Vec<usize>> {
        let target = self.check(k)?;
        Ok(self
            .order
            .iter()
            .enumerate()
            .filter_map(|(u, &id)| self.node(id).map(|n| (u, n)))
            .flat_map(|(u, n)| {
                n.adjacency
                    .iter()
                    .filter(move |&&id| id == target)
                    .map(move |_| u)
            })
            .collect())
    }

    /// Returns `true` if at least one edge `from -> to` exists.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if either position is out of range.
    pub fn contains_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        self.check(from)?;
        let tail = self.check(to)?;
        Ok(self.adjacency_at(from).contains(&tail))
    }

    /// Returns `true` if there are no self-loops and no parallel edges.
    pub fn is_simple(&self) -> bool {
        !self
            .order
            .iter()
            .any(|&id| self.node(id).is_some_and(|n| n.has_loop_or_parallel(id)))
    }

    /// Iterates over every edge in canonical ledger order.
    ///
    /// Edges are ordered by ascending source position; edges sharing a
    /// source keep the order in which they were connected.
    pub fn edges(&self) -> Edges<'_, T> {
        Edges::new(self)
    }

    /// Returns a cursor on the first node.
    ///
    /// # Errors
    /// [`GraphError::Empty`] if the graph has no nodes.
    pub fn begin(&self) -> GraphResult<Cursor> {
        self.order
            .first()
            .map(|&id| Cursor::at(self.id, id))
            .ok_or(GraphError::Empty)
    }

    /// Returns a cursor on the node at `k`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `k >= self.len()`.
    pub fn cursor(&self, k: usize) -> GraphResult<Cursor> {
        self.check(k).map(|id| Cursor::at(self.id, id))
    }

    /// Exchanges the entire contents of two graphs.
    ///
    /// Cursors follow the contents they were created from.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DirectedGraph<T> {
    /// Deep copy: values are cloned into fresh storage and the edge ledger is
    /// replayed, so the copy is position-for-position equal to the original.
    /// Cursors of the original do not work on the copy.
    fn clone(&self) -> Self {
        let mut copy: Self = self.values().cloned().collect();
        for edge in self.edges() {
            if let (Some(&head), Some(&tail)) =
                (copy.order.get(edge.source), copy.order.get(edge.destination))
            {
                copy.link(head, tail);
            }
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for DirectedGraph<T> {
    /// Positional equality: same node count, equal values at every position,
    /// and identical edge ledgers. This is not an isomorphism check.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.values().eq(other.values())
            && self.edges().eq(other.edges())
    }
}

impl<T: Eq> Eq for DirectedGraph<T> {}

impl<T: fmt::Debug> fmt::Debug for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("values", &self.values().collect::<Vec<_>>())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Index<usize> for DirectedGraph<T> {
    type Output = T;

    /// Unchecked access.
    ///
    /// # Panics
    /// Panics if `k >= self.len()`.
    fn index(&self, k: usize) -> &T {
        match self.get(k) {
            Some(value) => value,
            None => panic!("invalid node index in directed graph: {k} (len {})", self.len()),
        }
    }
}

impl<T> IndexMut<usize> for DirectedGraph<T> {
    fn index_mut(&mut self, k: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(k) {
            Some(value) => value,
            None => panic!("invalid node index in directed graph: {k} (len {len})"),
        }
    }
}

impl<T> Extend<T> for DirectedGraph<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for DirectedGraph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T> From<Vec<T>> for DirectedGraph<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DirectedGraph<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
