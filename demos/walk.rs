//! Directed graph walkthrough

use digraph::{DirectedGraph, GraphError};

fn main() -> Result<(), GraphError> {
    println!("DirectedGraph Walkthrough");
    println!("=========================");

    let mut graph: DirectedGraph<String> = ["fetch", "parse", "check", "emit"]
        .into_iter()
        .map(String::from)
        .collect();

    graph.connect(0, 1)?;
    graph.connect(1, 2)?;
    graph.connect(1, 3)?;
    graph.connect(2, 3)?;

    println!("Initial graph ({} nodes, {} edges):", graph.len(), graph.edge_count());
    print!("{graph}");
    println!("  simple: {}", graph.is_simple());

    // Branching walk: always take the last tail.
    println!("\nWalk taking the last tail each step:");
    let mut cursor = graph.begin()?;
    loop {
        println!("  at {}", cursor.get(&graph)?);
        let outdegree = cursor.outdegree(&graph)?;
        if outdegree == 0 {
            break;
        }
        cursor.next(&graph, outdegree - 1)?;
    }

    // Bounds violations are reported, not panicked on.
    if let Err(err) = graph.connect(0, 99) {
        println!("\nRejected connect: {err} ({:?})", err.kind());
    }

    let snapshot = graph.clone();
    graph.connect(3, 3)?;
    println!("\nAfter adding a self-loop:");
    println!("  simple: {}", graph.is_simple());
    println!("  equal to snapshot: {}", graph == snapshot);

    let removed = graph.erase(2)?;
    println!("\nErased {removed:?}; edges now:");
    for edge in graph.edges() {
        println!("  {} -> {}", graph[edge.source], graph[edge.destination]);
    }

    // The cursor still sits on "emit", now one position earlier.
    println!("  cursor position: {}", cursor.position(&graph)?);

    Ok(())
}
