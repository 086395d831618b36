//! `proptest` strategies for generating graphs.
//!
//! Enabled with the `proptest` feature.

use core::fmt;
use core::ops::Range;
use std::collections::BTreeSet;

use proptest::collection;
use proptest::prelude::*;

use super::DirectedGraph;

/// Generates graphs with a node count drawn from `nodes`, values drawn from
/// `values`, and up to `max_edges` edges between arbitrary positions.
///
/// Self-loops and parallel edges are generated too.
pub fn arb_graph<S>(
    values: S,
    nodes: Range<usize>,
    max_edges: usize,
) -> impl Strategy<Value = DirectedGraph<S::Value>>
where
    S: Strategy + 'static,
    S::Value: Clone + fmt::Debug + 'static,
{
    collection::vec(values, nodes)
        .prop_flat_map(move |vals| {
            let n = vals.len();
            let edges = if n == 0 {
                Just(Vec::new()).boxed()
            } else {
                collection::vec((0..n, 0..n), 0..=max_edges).boxed()
            };
            (Just(vals), edges)
        })
        .prop_map(|(vals, edges)| {
            let mut graph = DirectedGraph::from(vals);
            for (from, to) in edges {
                // Positions are generated below the node count.
                let _ = graph.connect(from, to);
            }
            graph
        })
}

/// Generates graphs with no self-loops and no parallel edges.
pub fn arb_simple_graph<S>(
    values: S,
    nodes: Range<usize>,
    max_edges: usize,
) -> impl Strategy<Value = DirectedGraph<S::Value>>
where
    S: Strategy + 'static,
    S::Value: Clone + fmt::Debug + 'static,
{
    collection::vec(values, nodes)
        .prop_flat_map(move |vals| {
            let n = vals.len();
            let edges = if n < 2 {
                Just(Vec::new()).boxed()
            } else {
                collection::vec((0..n, 0..n), 0..=max_edges)
                    .prop_map(|pairs| {
                        let distinct: BTreeSet<(usize, usize)> =
                            pairs.into_iter().filter(|(a, b)| a != b).collect();
                        distinct.into_iter().collect::<Vec<_>>()
                    })
                    .boxed()
            };
            (Just(vals), edges)
        })
        .prop_map(|(vals, edges): (Vec<S::Value>, Vec<(usize, usize)>)| {
            let mut graph = DirectedGraph::from(vals);
            for (from, to) in edges {
                let _ = graph.connect(from, to);
            }
            graph
        })
}
