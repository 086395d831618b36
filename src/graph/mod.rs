//! Graph containers.
//!
//! - `directed`: positional directed multigraph with checked cursors

pub mod directed;

pub use directed::{Cursor, DirectedGraph, Edge, Edges, NodeId, Successors};
