//! Model-based property tests.
//!
//! Random operation sequences run against both `DirectedGraph` and a plain
//! `Vec`-of-adjacency model; `petgraph` serves as an independent degree
//! oracle for the final state.

use digraph::DirectedGraph;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Push(u8),
    Connect(usize, usize),
    Disconnect(usize),
    DisconnectEdge(usize, usize),
    Erase(usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        2 => any::<u8>().prop_map(Operation::Push),
        4 => (0usize..12, 0usize..12).prop_map(|(a, b)| Operation::Connect(a, b)),
        1 => (0usize..12).prop_map(Operation::Disconnect),
        2 => (0usize..12, 0usize..12).prop_map(|(a, b)| Operation::DisconnectEdge(a, b)),
        1 => (0usize..12).prop_map(Operation::Erase),
    ]
}

/// Positional adjacency model: `(value, successors)` per node.
#[derive(Default)]
struct Model {
    nodes: Vec<(u8, Vec<usize>)>,
}

impl Model {
    fn apply(&mut self, op: &Operation) -> bool {
        let n = self.nodes.len();
        match *op {
            Operation::Push(v) => {
                self.nodes.push((v, Vec::new()));
                true
            }
            Operation::Connect(a, b) => {
                if a >= n || b >= n {
                    return false;
                }
                self.nodes[a].1.push(b);
                true
            }
            Operation::Disconnect(k) => {
                if k >= n {
                    return false;
                }
                self.isolate(k);
                true
            }
            Operation::DisconnectEdge(a, b) => {
                if a >= n || b >= n {
                    return false;
                }
                if let Some(i) = self.nodes[a].1.iter().rposition(|&t| t == b) {
                    self.nodes[a].1.remove(i);
                }
                true
            }
            Operation::Erase(k) => {
                if k >= n {
                    return false;
                }
                self.isolate(k);
                self.nodes.remove(k);
                for (_, succ) in &mut self.nodes {
                    for t in succ.iter_mut() {
                        if *t > k {
                            *t -= 1;
                        }
                    }
                }
                true
            }
        }
    }

    fn isolate(&mut self, k: usize) {
        self.nodes[k].1.clear();
        for (_, succ) in &mut self.nodes {
            succ.retain(|&t| t != k);
        }
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(s, (_, succ))| succ.iter().map(move |&t| (s, t)))
            .collect()
    }
}

fn apply(graph: &mut DirectedGraph<u8>, op: &Operation) -> bool {
    match *op {
        Operation::Push(v) => {
            graph.push(v);
            true
        }
        Operation::Connect(a, b) => graph.connect(a, b).is_ok(),
        Operation::Disconnect(k) => graph.disconnect(k).is_ok(),
        Operation::DisconnectEdge(a, b) => graph.disconnect_edge(a, b).is_ok(),
        Operation::Erase(k) => graph.erase(k).is_ok(),
    }
}

proptest! {
    #[test]
    fn test_graph_matches_adjacency_model(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut graph = DirectedGraph::new();
        let mut model = Model::default();

        for op in &ops {
            let accepted = apply(&mut graph, op);
            prop_assert_eq!(accepted, model.apply(op), "acceptance mismatch for {:?}", op);
        }

        let values: Vec<u8> = graph.values().copied().collect();
        let expected: Vec<u8> = model.nodes.iter().map(|(v, _)| *v).collect();
        prop_assert_eq!(values, expected);

        let edges: Vec<(usize, usize)> = graph.edges().map(|e| (e.source, e.destination)).collect();
        prop_assert_eq!(edges, model.edges());

        for (k, (_, succ)) in model.nodes.iter().enumerate() {
            prop_assert_eq!(graph.successors(k).unwrap().collect::<Vec<_>>(), succ.clone());
        }
    }

    #[test]
    fn test_degrees_match_petgraph(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut graph = DirectedGraph::new();
        for op in &ops {
            apply(&mut graph, op);
        }

        let mut oracle: DiGraph<u8, ()> = DiGraph::new();
        let indices: Vec<NodeIndex> = graph.values().map(|&v| oracle.add_node(v)).collect();
        for edge in graph.edges() {
            oracle.add_edge(indices[edge.source], indices[edge.destination], ());
        }

        for (k, &ix) in indices.iter().enumerate() {
            let out = oracle.edges_directed(ix, Direction::Outgoing).count();
            let inc = oracle.edges_directed(ix, Direction::Incoming).count();
            prop_assert_eq!(graph.outdegree(k).unwrap(), out);
            prop_assert_eq!(graph.indegree(k).unwrap(), inc);
        }

        let oracle_simple = oracle.node_indices().all(|ix| {
            let mut targets: Vec<_> = oracle.neighbors_directed(ix, Direction::Outgoing).collect();
            let total = targets.len();
            targets.sort();
            targets.dedup();
            targets.len() == total && !targets.contains(&ix)
        });
        prop_assert_eq!(graph.is_simple(), oracle_simple);
    }
}
