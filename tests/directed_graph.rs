//! End-to-end scenarios for `DirectedGraph` and `Cursor`.

use digraph::{Cursor, DirectedGraph, Edge, ErrorKind, GraphError};

fn abc_chain() -> DirectedGraph<String> {
    let mut graph: DirectedGraph<String> = ["A", "B", "C"].into_iter().map(String::from).collect();
    graph.connect(0, 1).unwrap();
    graph.connect(1, 2).unwrap();
    graph
}

#[test]
fn test_chain_scenario() {
    let graph = abc_chain();

    assert_eq!(graph.outdegree(0).unwrap(), 1);
    assert_eq!(graph.indegree(2).unwrap(), 1);
    assert!(graph.is_simple());

    let rendered = graph.to_string();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines, vec!["A -> B", "B -> C"]);
}

#[test]
fn test_self_loop_makes_graph_non_simple() {
    let mut graph = abc_chain();
    graph.connect(0, 0).unwrap();
    assert!(!graph.is_simple());

    let mut single = DirectedGraph::from(vec![42]);
    assert!(single.is_simple());
    single.connect(0, 0).unwrap();
    assert!(!single.is_simple());
}

#[test]
fn test_empty_graph_rejects_begin_and_front() {
    let graph: DirectedGraph<String> = DirectedGraph::new();

    let begin = graph.begin().unwrap_err();
    let front = graph.front().unwrap_err();
    assert_eq!(begin.kind(), ErrorKind::OutOfRange);
    assert_eq!(front.kind(), ErrorKind::OutOfRange);
    assert!(graph.is_simple());
    assert_eq!(graph.to_string(), "");
}

#[test]
fn test_cursor_walk_scenario() {
    let graph = abc_chain();
    let mut cursor = graph.begin().unwrap();

    cursor.next(&graph, 0).unwrap();
    assert_eq!(cursor.get(&graph).unwrap(), "B");

    cursor.next(&graph, 0).unwrap();
    assert_eq!(cursor.get(&graph).unwrap(), "C");

    let err = cursor.next(&graph, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(cursor.get(&graph).unwrap(), "C");
}

#[test]
fn test_unpositioned_cursor_is_a_logic_error() {
    let graph = abc_chain();
    let cursor = Cursor::default();

    assert_eq!(cursor.get(&graph).unwrap_err().kind(), ErrorKind::Logic);
    assert_eq!(cursor.outdegree(&graph).unwrap_err().kind(), ErrorKind::Logic);
    assert_eq!(Cursor::default(), cursor);
}

#[test]
fn test_cursor_equality_tracks_nodes() {
    let mut graph = DirectedGraph::from(vec![1, 2]);
    graph.connect(0, 1).unwrap();
    graph.connect(1, 0).unwrap();

    let start = graph.begin().unwrap();
    let mut round_trip = start;
    round_trip.next(&graph, 0).unwrap();
    assert_ne!(round_trip, start);
    round_trip.next(&graph, 0).unwrap();
    assert_eq!(round_trip, start);
}

#[test]
fn test_checked_access_matches_indexing() {
    let graph: DirectedGraph<u32> = (10..20).collect();
    for k in 0..graph.len() {
        assert_eq!(*graph.at(k).unwrap(), graph[k]);
    }
    assert!(matches!(
        graph.at(10),
        Err(GraphError::NodeOutOfRange { index: 10, len: 10 })
    ));
}

#[test]
fn test_erase_shrinks_and_isolates() {
    let mut graph = DirectedGraph::from(vec!['a', 'b', 'c', 'd']);
    graph.connect(0, 1).unwrap();
    graph.connect(1, 2).unwrap();
    graph.connect(2, 3).unwrap();
    graph.connect(3, 1).unwrap();

    let erased = graph.node_id(1).unwrap();
    assert_eq!(graph.erase(1).unwrap(), 'b');

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.position_of(erased), None);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![Edge::new(1, 2)]);
    assert_eq!(graph.to_string(), "a\nc -> d\n");
}

#[test]
fn test_rejected_mutations_leave_graph_untouched() {
    let mut graph = abc_chain();
    let snapshot = graph.clone();

    assert!(graph.connect(3, 0).is_err());
    assert!(graph.disconnect(3).is_err());
    assert!(graph.disconnect_edge(0, 3).is_err());
    assert!(graph.erase(3).is_err());
    assert!(graph.at_mut(3).is_err());

    assert_eq!(graph, snapshot);
}

#[test]
fn test_copy_then_diverge() {
    let original = abc_chain();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.connect(2, 0).unwrap();
    assert_ne!(copy, original);

    copy.disconnect_edge(2, 0).unwrap();
    assert_eq!(copy, original);
}

#[test]
fn test_disconnect_keeps_node() {
    let mut graph = abc_chain();
    graph.disconnect(1).unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.to_string(), "A\nB\nC\n");
}
