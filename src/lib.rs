//! # `digraph` - Positional Directed Graph Container
//!
//! A reusable container that stores arbitrary values as nodes and directed
//! edges between them, with container-like mutation, checked traversal, and
//! positional comparison.
//!
//! ## Model
//!
//! - **Positions**: nodes are addressed by their 0-based insertion position,
//!   exactly like a `Vec`. Erasing a node shifts later positions down.
//! - **Multigraph**: parallel edges and self-loops are allowed.
//!   [`DirectedGraph::is_simple`] reports whether any exist.
//! - **Single source of truth**: edges live only in per-node adjacency lists
//!   of stable [`NodeId`]s. The positional edge ledger
//!   ([`DirectedGraph::edges`]) is derived on demand and never goes stale.
//! - **Cursors**: a [`Cursor`] is a `Copy` handle that walks adjacency one
//!   chosen tail at a time. It borrows nothing; reads and steps take the
//!   graph as an argument and fail cleanly once its node is erased.
//!
//! ## Errors
//!
//! Every checked operation returns [`GraphResult`]. Arguments are validated
//! before any write, so a failed call leaves the graph untouched.
//! [`GraphError::kind`] separates bounds violations from cursor misuse.
//!
//! ## Features
//!
//! - `tracing`: emit `trace`/`debug` events from mutators and rejected indices.
//! - `proptest`: export `graph::directed::strategy` for property tests.
//!
//! ## Example
//!
//! ```rust
//! use digraph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::from(vec!["A", "B", "C"]);
//! graph.connect(0, 1)?;
//! graph.connect(1, 2)?;
//!
//! let mut cursor = graph.begin()?;
//! cursor.next(&graph, 0)?;
//! assert_eq!(*cursor.get(&graph)?, "B");
//!
//! graph.erase(0)?;
//! assert_eq!(cursor.position(&graph)?, 0);
//! assert_eq!(graph.to_string(), "B -> C\n");
//! # Ok::<(), digraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod error;
pub mod graph;

pub use error::{ErrorKind, GraphError, GraphResult};
pub use graph::{Cursor, DirectedGraph, Edge, NodeId};

const _: () = {
    use core::mem;

    // Cursors are small enough to pass by value everywhere.
    assert!(mem::size_of::<Cursor>() <= mem::size_of::<usize>() * 6);
    // Adjacency entries stay two words.
    assert!(mem::size_of::<NodeId>() <= mem::size_of::<usize>() * 2);
};
