//! Error types for graph and cursor operations.

use thiserror::Error;

/// Broad classification of a [`GraphError`].
///
/// Callers that only care about "was an index bad" versus "was the cursor
/// used incorrectly" can match on this instead of on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A position, tail index, or non-emptiness requirement was violated.
    OutOfRange,
    /// A cursor precondition was violated; no index was involved.
    Logic,
}

/// Errors raised by [`DirectedGraph`](crate::DirectedGraph) and
/// [`Cursor`](crate::Cursor).
///
/// Every checked operation validates its arguments before touching any
/// storage, so a returned error always leaves the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node position was not below the node count.
    #[error("invalid node index in directed graph: {index} (len {len})")]
    NodeOutOfRange {
        /// The rejected position.
        index: usize,
        /// Node count at the time of the call.
        len: usize,
    },

    /// A cursor step asked for an adjacency slot that does not exist.
    #[error("invalid tail node index for cursor: {index} (outdegree {outdegree})")]
    TailOutOfRange {
        /// The rejected local tail index.
        index: usize,
        /// Outdegree of the cursor's current node.
        outdegree: usize,
    },

    /// The operation needs at least one node.
    #[error("empty directed graph")]
    Empty,

    /// The cursor was never positioned on a node.
    #[error("cursor does not point to a directed graph")]
    Unpositioned,

    /// The cursor's node has been erased from its graph.
    #[error("cursor points to an erased node")]
    Dangling,

    /// The cursor was created by a different graph.
    #[error("cursor belongs to a different directed graph")]
    ForeignCursor,
}

impl GraphError {
    pub(crate) fn node_out_of_range(index: usize, len: usize) -> Self {
        Self::NodeOutOfRange { index, len }
    }

    pub(crate) fn tail_out_of_range(index: usize, outdegree: usize) -> Self {
        Self::TailOutOfRange { index, outdegree }
    }

    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeOutOfRange { .. } | Self::TailOutOfRange { .. } | Self::Empty => {
                ErrorKind::OutOfRange
            }
            Self::Unpositioned | Self::Dangling | Self::ForeignCursor => ErrorKind::Logic,
        }
    }

    /// Returns `true` for bounds and emptiness violations.
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }

    /// Returns `true` for cursor precondition violations.
    pub fn is_logic(&self) -> bool {
        self.kind() == ErrorKind::Logic
    }
}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_split_bounds_from_cursor_misuse() {
        assert_eq!(GraphError::node_out_of_range(3, 2).kind(), ErrorKind::OutOfRange);
        assert_eq!(GraphError::tail_out_of_range(1, 0).kind(), ErrorKind::OutOfRange);
        assert!(GraphError::Empty.is_out_of_range());
        assert!(GraphError::Unpositioned.is_logic());
        assert!(GraphError::Dangling.is_logic());
        assert!(GraphError::ForeignCursor.is_logic());
    }

    #[test]
    fn messages_carry_the_offending_index() {
        let msg = GraphError::node_out_of_range(17, 4).to_string();
        assert!(msg.contains("17"), "{msg}");

        let msg = GraphError::tail_out_of_range(5, 2).to_string();
        assert!(msg.contains('5'), "{msg}");
    }
}
