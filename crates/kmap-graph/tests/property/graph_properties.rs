//! Property tests for kmap-graph: DAG enforcement and document round trip.

use proptest::prelude::*;

use kmap_core::models::{ConceptNode, DependencyEdge, MapNode, Position, TopicNode};
use kmap_graph::graph::dag_enforcement;
use kmap_graph::MapGraph;

/// Build a graph of `n` concepts under one topic, inserting every candidate
/// edge the validity predicate accepts.
fn build_random_dag(n: usize, edges: &[(usize, usize)]) -> MapGraph {
    let mut graph = MapGraph::new();
    graph
        .add_node(MapNode::Topic(TopicNode::new("t", "Topic", "#336699")), None)
        .unwrap();
    for i in 0..n {
        graph
            .add_node(
                MapNode::Concept(ConceptNode::new(format!("n{i}"), format!("Node {i}"), "t")),
                Some(Position::new(i as f64, (i * 2) as f64)),
            )
            .unwrap();
    }
    for &(src, tgt) in edges {
        let (s, t) = (format!("n{src}"), format!("n{tgt}"));
        if dag_enforcement::is_valid_edge(&graph, &s, &t) {
            graph
                .add_edge(DependencyEdge::new(format!("{s}-{t}"), s, t))
                .unwrap();
        }
    }
    graph
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 3)
}

proptest! {
    #[test]
    fn accepted_edges_never_form_cycles(edges in edge_strategy(20)) {
        let graph = build_random_dag(20, &edges);
        let cycles = dag_enforcement::find_cycles(&graph);
        prop_assert!(cycles.is_empty(), "DAG should have no cycles, found {}", cycles.len());
    }

    #[test]
    fn predicate_rejects_edges_into_predecessors(edges in edge_strategy(15)) {
        let graph = build_random_dag(15, &edges);
        for i in 0..15 {
            let a = format!("n{i}");
            for b in graph.predecessors(&a).iter() {
                prop_assert!(
                    !dag_enforcement::is_valid_edge(&graph, &a, b),
                    "edge {} -> {} should close a cycle", a, b
                );
            }
        }
    }

    #[test]
    fn predecessors_and_successors_are_mirror_images(edges in edge_strategy(12)) {
        let graph = build_random_dag(12, &edges);
        for i in 0..12 {
            let a = format!("n{i}");
            prop_assert!(!graph.predecessors(&a).contains(&a));
            for b in graph.successors(&a).iter() {
                prop_assert!(graph.predecessors(b).contains(&a));
            }
        }
    }

    #[test]
    fn document_round_trip_reproduces_graph(edges in edge_strategy(10)) {
        let graph = build_random_dag(10, &edges);
        let document = graph.to_document();
        let json = document.to_json_pretty().unwrap();
        let parsed = kmap_core::models::MapDocument::from_json(&json).unwrap();
        let rebuilt = MapGraph::from_document(&parsed).unwrap();
        prop_assert_eq!(rebuilt.to_document(), document);
    }
}
