//! Integration tests for the map graph: construction, traversal, set
//! algebra and edge validity.

use kmap_core::errors::{EdgeRejection, GraphError};
use kmap_core::models::{ConceptNode, DependencyEdge, MapDocument, MapNode, Position, TopicNode};
use kmap_graph::graph::dag_enforcement;
use kmap_graph::{MapGraph, NodeSet};

fn set(ids: &[&str]) -> NodeSet {
    ids.iter().copied().collect()
}

fn chain() -> MapGraph {
    MapGraph::from_document(&test_fixtures::load_map("chain")).unwrap()
}

fn diamond() -> MapGraph {
    MapGraph::from_document(&test_fixtures::load_map("diamond")).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn builds_chain_fixture() {
    let graph = chain();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.concept_ids(), set(&["A", "B", "C"]));
    assert_eq!(graph.topic_ids(), set(&["T"]));
    assert_eq!(graph.parent("B"), Some("T"));
    assert_eq!(graph.children("T"), set(&["A", "B", "C"]));
    assert_eq!(graph.position("C"), Some(Position::new(0.0, 300.0)));
}

#[test]
fn rendered_position_alias_is_accepted() {
    let graph = diamond();
    assert_eq!(graph.position("calc"), Some(Position::new(400.0, 0.0)));
}

#[test]
fn cyclic_document_is_rejected_with_path() {
    let err = MapGraph::from_document(&test_fixtures::load_map("cyclic")).unwrap_err();
    match err {
        GraphError::CycleDetected { path } => {
            assert_eq!(path, "z -> x -> y -> z");
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn orphan_concept_is_rejected() {
    let mut doc = MapDocument::default();
    doc.nodes.push(kmap_core::models::NodeElement {
        data: MapNode::Concept(ConceptNode::new("a", "A", "missing")),
        position: None,
    });
    let err = MapGraph::from_document(&doc).unwrap_err();
    assert!(matches!(err, GraphError::OrphanConcept { .. }));
}

#[test]
fn empty_topic_is_rejected() {
    let mut doc = test_fixtures::load_map("chain");
    doc.nodes.push(kmap_core::models::NodeElement {
        data: MapNode::Topic(TopicNode::new("lonely", "Lonely", "#000000")),
        position: None,
    });
    let err = MapGraph::from_document(&doc).unwrap_err();
    assert_eq!(
        err,
        GraphError::EmptyTopic {
            id: "lonely".to_string()
        }
    );
}

#[test]
fn non_positive_importance_is_rejected() {
    let mut doc = test_fixtures::load_map("chain");
    for element in &mut doc.nodes {
        if let MapNode::Concept(concept) = &mut element.data {
            if concept.id == "C" {
                concept.relative_importance = -2.0;
            }
        }
    }
    let err = MapGraph::from_document(&doc).unwrap_err();
    assert_eq!(
        err,
        GraphError::InvalidImportance {
            id: "C".to_string(),
            importance: "-2".to_string(),
        }
    );

    let mut graph = chain();
    let before = graph.node_count();
    for importance in [0.0, f64::NAN, f64::INFINITY] {
        let mut concept = ConceptNode::new("D", "Division", "T");
        concept.relative_importance = importance;
        let err = graph.add_node(MapNode::Concept(concept), None).unwrap_err();
        assert!(matches!(err, GraphError::InvalidImportance { .. }));
    }
    assert_eq!(graph.node_count(), before);
    assert!(!graph.contains("D"));
}

#[test]
fn edge_to_topic_in_document_is_rejected() {
    let mut doc = test_fixtures::load_map("chain");
    doc.edges.push(kmap_core::models::EdgeElement {
        data: DependencyEdge::new("bad", "A", "T"),
    });
    let err = MapGraph::from_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        GraphError::EdgeRejected {
            reason: EdgeRejection::TopicEndpoint,
            ..
        }
    ));
}

#[test]
fn document_round_trip_is_stable() {
    let doc = test_fixtures::load_map("diamond");
    let graph = MapGraph::from_document(&doc).unwrap();
    let out = graph.to_document();
    let again = MapGraph::from_document(&out).unwrap().to_document();
    assert_eq!(out, again);
    assert_eq!(out.nodes.len(), doc.nodes.len());
    assert_eq!(out.edges.len(), doc.edges.len());

    // Topics come first, then concepts, each group sorted by id.
    let ids: Vec<&str> = out.nodes.iter().map(|n| n.data.id()).collect();
    assert_eq!(
        ids,
        vec!["alg", "calc", "derivs", "funcs", "graphs", "limits", "series", "vars"]
    );
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn transitive_predecessors_and_successors() {
    let graph = diamond();
    assert_eq!(graph.predecessors("derivs"), set(&["vars", "funcs", "graphs", "limits"]));
    assert_eq!(graph.successors("vars"), set(&["funcs", "graphs", "limits", "derivs"]));
    assert!(graph.predecessors("vars").is_empty());
    assert!(graph.successors("series").is_empty());
    assert!(graph.predecessors("nope").is_empty());
}

#[test]
fn direct_neighbours() {
    let graph = diamond();
    assert_eq!(graph.incomers("limits"), set(&["funcs", "graphs"]));
    assert_eq!(graph.outgoers("vars"), set(&["funcs", "graphs"]));
    assert_eq!(graph.outgoers_of(&set(&["funcs", "limits"])), set(&["limits", "derivs"]));
}

#[test]
fn roots_are_relative_to_the_set() {
    let graph = diamond();
    let preds = graph.predecessors("derivs");
    assert_eq!(graph.roots(&preds), set(&["vars"]));
    assert_eq!(graph.roots(&set(&["funcs", "limits", "derivs"])), set(&["funcs"]));
    assert_eq!(graph.global_roots(), set(&["series", "vars"]));
}

#[test]
fn predecessors_of_a_set() {
    let graph = diamond();
    assert_eq!(
        graph.predecessors_of(&set(&["funcs", "series"])),
        set(&["vars"])
    );
}

#[test]
fn successors_of_a_set() {
    let graph = diamond();
    assert_eq!(
        graph.successors_of(&set(&["funcs", "graphs"])),
        set(&["limits", "derivs"])
    );
    assert!(graph.successors_of(&set(&["series"])).is_empty());
}

#[test]
fn fixture_text_matches_typed_loader() {
    assert_eq!(test_fixtures::list_maps(), vec!["chain", "cyclic", "diamond"]);
    let parsed = MapDocument::from_json(&test_fixtures::load_map_text("diamond")).unwrap();
    assert_eq!(parsed, test_fixtures::load_map("diamond"));
}

#[test]
fn neighborhood_includes_edges() {
    let graph = diamond();
    let hood = graph.neighborhood("limits");
    assert_eq!(hood.nodes, set(&["limits", "funcs", "graphs", "derivs"]));
    assert_eq!(hood.edges, set(&["e3", "e4", "e5"]));
    assert!(graph.neighborhood("missing").nodes.is_empty());
}

#[test]
fn nodes_where_filters_by_attribute() {
    let graph = diamond();
    let heavy = graph.nodes_where(|n| {
        n.as_concept()
            .map(|c| c.relative_importance > 1.0)
            .unwrap_or(false)
    });
    assert_eq!(heavy, set(&["limits", "derivs"]));
}

// =============================================================================
// Edge validity
// =============================================================================

#[test]
fn edge_validity_checks_in_order() {
    let graph = chain();
    let check = |s: &str, t: &str| dag_enforcement::validate_edge(&graph, s, t);
    assert_eq!(check("A", "missing"), Err(EdgeRejection::UnknownNode));
    assert_eq!(check("A", "A"), Err(EdgeRejection::SelfLoop));
    assert_eq!(check("A", "B"), Err(EdgeRejection::Duplicate));
    assert_eq!(check("A", "T"), Err(EdgeRejection::TopicEndpoint));
    assert_eq!(check("C", "A"), Err(EdgeRejection::WouldCreateCycle));
    assert_eq!(check("A", "C"), Ok(()));
}

#[test]
fn add_edge_rejects_cycle_and_keeps_graph_unchanged() {
    let mut graph = chain();
    let err = graph
        .add_edge(DependencyEdge::new("C-A", "C", "A"))
        .unwrap_err();
    assert!(matches!(
        err,
        GraphError::EdgeRejected {
            reason: EdgeRejection::WouldCreateCycle,
            ..
        }
    ));
    assert_eq!(graph.edge_count(), 2);
    assert!(dag_enforcement::find_cycles(&graph).is_empty());
}

#[test]
fn duplicate_edge_id_is_rejected() {
    let mut graph = chain();
    let err = graph
        .add_edge(DependencyEdge::new("A-B", "A", "C"))
        .unwrap_err();
    assert_eq!(
        err,
        GraphError::DuplicateEdgeId {
            id: "A-B".to_string()
        }
    );
}

// =============================================================================
// Mutation
// =============================================================================

#[test]
fn remove_node_returns_incident_edges() {
    let mut graph = chain();
    let removed = graph.remove_node("B").unwrap();
    assert_eq!(removed.node.data.id(), "B");
    let edge_ids: Vec<&str> = removed.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids, vec!["A-B", "B-C"]);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.edge("A-B").is_none());
    assert!(graph.successors("A").is_empty());
}

#[test]
fn topic_with_children_cannot_be_removed() {
    let mut graph = chain();
    let err = graph.remove_node("T").unwrap_err();
    assert_eq!(
        err,
        GraphError::TopicHasChildren {
            id: "T".to_string(),
            children: 3
        }
    );
}

#[test]
fn reparent_and_move() {
    let mut graph = diamond();
    let old = graph.set_parent("series", "alg").unwrap();
    assert_eq!(old, "calc");
    assert!(graph.children("alg").contains("series"));

    let before = graph
        .set_position("series", Some(Position::new(1.0, 2.0)))
        .unwrap();
    assert_eq!(before, Some(Position::new(600.0, 300.0)));
    assert_eq!(graph.position("series"), Some(Position::new(1.0, 2.0)));

    assert!(matches!(
        graph.set_parent("series", "vars"),
        Err(GraphError::NotATopic { .. })
    ));
}
