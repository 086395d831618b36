//! Node storage for [`DirectedGraph`](super::DirectedGraph).

use crate::collections::slot_map::SlotKey;

/// Stable, opaque identity of a node.
///
/// Unlike a position, a `NodeId` is not shifted by `erase`: it keeps naming
/// the same node until that node is erased or the graph is cleared, after
/// which it never resolves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) SlotKey);

/// One stored value plus its outgoing adjacency.
///
/// Adjacency entries are `NodeId`s, so they never keep their target alive.
/// Order is insertion order and defines the local tail indices used by
/// [`Cursor::next`](super::Cursor::next). Duplicates are allowed.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) adjacency: Vec<NodeId>,
    /// Current position in the graph's order. Maintained by `erase`.
    pub(crate) position: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, position: usize) -> Self {
        Self {
            value,
            adjacency: Vec::new(),
            position,
        }
    }

    /// Removes the last adjacency entry pointing at `target`.
    pub(crate) fn unlink_last(&mut self, target: NodeId) -> bool {
        match self.adjacency.iter().rposition(|&id| id == target) {
            Some(slot) => {
                self.adjacency.remove(slot);
                true
            }
            None => false,
        }
    }

    /// Removes every adjacency entry pointing at `target`.
    pub(crate) fn unlink_all(&mut self, target: NodeId) {
        self.adjacency.retain(|&id| id != target);
    }

    /// Returns `true` if this node points at itself or at some target twice.
    pub(crate) fn has_loop_or_parallel(&self, own: NodeId) -> bool {
        self.adjacency.iter().enumerate().any(|(i, &id)| {
            id == own || self.adjacency[i + 1..].contains(&id)
        })
    }
}
