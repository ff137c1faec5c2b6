//! Property tests for kmap-progress: upward closure, path consistency,
//! reset idempotence and frontier readiness.

use proptest::prelude::*;

use kmap_core::models::{ConceptNode, DependencyEdge, MapNode, TopicNode};
use kmap_graph::graph::dag_enforcement;
use kmap_graph::{MapGraph, NodeSet};
use kmap_progress::{FirstCandidate, ProgressState, PropagationEngine, Recommender};

const N: usize = 12;

fn build_random_dag(edges: &[(usize, usize)]) -> MapGraph {
    let mut graph = MapGraph::new();
    graph
        .add_node(MapNode::Topic(TopicNode::new("t", "Topic", "#336699")), None)
        .unwrap();
    for i in 0..N {
        graph
            .add_node(
                MapNode::Concept(ConceptNode::new(format!("n{i}"), format!("Node {i}"), "t")),
                None,
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

#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    SetGoal(usize),
    UnsetGoal(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..N).prop_map(Op::Toggle),
        (0..N).prop_map(Op::SetGoal),
        (0..N).prop_map(Op::UnsetGoal),
    ]
}

fn edges_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..N, 0..N), 0..N * 3)
}

fn apply(engine: &PropagationEngine<'_>, state: &mut ProgressState, op: &Op) {
    match *op {
        Op::Toggle(i) => {
            engine.toggle_learned(state, &format!("n{i}")).unwrap();
        }
        Op::SetGoal(i) => {
            engine.set_goal(state, &format!("n{i}")).unwrap();
        }
        Op::UnsetGoal(i) => {
            engine.unset_goal(state, &format!("n{i}")).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn learning_marks_every_predecessor(
        edges in edges_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
        target in 0..N,
    ) {
        let graph = build_random_dag(&edges);
        let engine = PropagationEngine::new(&graph);
        let mut state = ProgressState::new();
        for op in &ops {
            apply(&engine, &mut state, op);
        }
        let id = format!("n{target}");
        if !state.is_learned(&id) {
            engine.toggle_learned(&mut state, &id).unwrap();
            prop_assert!(state.is_learned(&id));
            for p in graph.predecessors(&id).iter() {
                prop_assert!(state.is_learned(p), "{} should be learned", p);
            }
        }
    }

    #[test]
    fn path_is_predecessors_of_goals_minus_goals(
        edges in edges_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..30),
    ) {
        let graph = build_random_dag(&edges);
        let engine = PropagationEngine::new(&graph);
        let mut state = ProgressState::new();
        for op in &ops {
            apply(&engine, &mut state, op);
            let goals = state.goal_set();
            let expected: NodeSet = graph.predecessors_of(&goals).not(&goals);
            prop_assert_eq!(state.path_set(), expected);
        }
    }

    #[test]
    fn learned_edges_track_endpoints(
        edges in edges_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..30),
    ) {
        let graph = build_random_dag(&edges);
        let engine = PropagationEngine::new(&graph);
        let mut state = ProgressState::new();
        for op in &ops {
            apply(&engine, &mut state, op);
        }
        for edge in graph.edges() {
            let both = state.is_learned(&edge.source) && state.is_learned(&edge.target);
            prop_assert_eq!(state.is_edge_learned(&edge.id), both);
        }
    }

    #[test]
    fn reset_twice_leaves_empty_state(
        edges in edges_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let graph = build_random_dag(&edges);
        let engine = PropagationEngine::new(&graph);
        let mut state = ProgressState::new();
        for op in &ops {
            apply(&engine, &mut state, op);
        }
        engine.reset_progress(&mut state);
        let once = state.clone();
        engine.reset_progress(&mut state);
        prop_assert_eq!(&state, &once);
        prop_assert_eq!(state, ProgressState::new());
    }

    #[test]
    fn recommendations_are_ready_and_unlearned(
        edges in edges_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let graph = build_random_dag(&edges);
        let engine = PropagationEngine::new(&graph);
        let mut state = ProgressState::new();
        for op in &ops {
            apply(&engine, &mut state, op);
        }
        let recommender = Recommender::new(&graph);
        let frontier = recommender.frontier(&state, None).unwrap();
        for id in frontier.iter() {
            prop_assert!(!state.is_learned(id));
            prop_assert!(state.is_goal(id) || state.is_on_path(id));
            for p in graph.incomers(id).iter() {
                prop_assert!(state.is_learned(p));
            }
        }
        let next = recommender
            .next_node_to_learn(&state, None, &mut FirstCandidate)
            .unwrap();
        prop_assert_eq!(next.is_some(), !frontier.is_empty());
    }
}
