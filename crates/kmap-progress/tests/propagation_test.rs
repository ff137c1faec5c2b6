//! Tests for the propagation engine: learned closure, goals and path,
//! reset, initialisation and pruning.

use std::collections::BTreeMap;

use kmap_core::errors::ProgressError;
use kmap_core::models::ProgressSnapshot;
use kmap_graph::{MapGraph, NodeSet};
use kmap_progress::{ProgressState, PropagationEngine};

fn graph(name: &str) -> MapGraph {
    MapGraph::from_document(&test_fixtures::load_map(name)).unwrap()
}

fn set(ids: &[&str]) -> NodeSet {
    ids.iter().copied().collect()
}

fn map(ids: &[&str]) -> BTreeMap<String, bool> {
    ids.iter().map(|id| (id.to_string(), true)).collect()
}

#[test]
fn chain_scenario_goal_then_learn_then_unset() {
    let graph = graph("chain");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();

    let outcome = engine.set_goal(&mut state, "C").unwrap();
    assert_eq!(state.goals_map(), &map(&["C"]));
    assert_eq!(state.path_map(), &map(&["A", "B"]));
    assert_eq!(outcome.path_added, vec!["A", "B"]);

    engine.toggle_learned(&mut state, "A").unwrap();
    assert_eq!(state.learned_map(), &map(&["A"]));

    let outcome = engine.toggle_learned(&mut state, "B").unwrap();
    assert_eq!(state.learned_map(), &map(&["A", "B"]));
    assert_eq!(outcome.changed, vec!["B"]);
    assert_eq!(outcome.edges_learned, vec!["A-B"]);

    let outcome = engine.unset_goal(&mut state, "C").unwrap();
    assert!(state.goals_map().is_empty());
    assert!(state.path_map().is_empty());
    assert_eq!(outcome.path_removed, vec!["A", "B"]);
}

#[test]
fn learning_closes_upward() {
    let graph = graph("diamond");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();

    let outcome = engine.toggle_learned(&mut state, "derivs").unwrap();
    assert!(outcome.learned);
    assert_eq!(
        state.learned_set(),
        set(&["vars", "funcs", "graphs", "limits", "derivs"])
    );
    assert_eq!(outcome.changed.len(), 5);
    assert_eq!(state.learned_edges(), &set(&["e1", "e2", "e3", "e4", "e5"]));
    assert!(!state.is_learned("series"));
}

#[test]
fn unlearning_is_local() {
    let graph = graph("diamond");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();

    engine.toggle_learned(&mut state, "limits").unwrap();
    let outcome = engine.toggle_learned(&mut state, "funcs").unwrap();
    assert!(!outcome.learned);
    assert_eq!(outcome.changed, vec!["funcs"]);
    assert_eq!(outcome.edges_unlearned, vec!["e1", "e3"]);
    assert!(state.is_learned("vars"));
    assert!(state.is_learned("limits"));
    assert!(!state.learned_map().contains_key("funcs"));

    // Learning it again only flips the clicked node.
    let outcome = engine.toggle_learned(&mut state, "funcs").unwrap();
    assert_eq!(outcome.changed, vec!["funcs"]);
    assert_eq!(outcome.edges_learned, vec!["e1", "e3"]);
}

#[test]
fn topics_and_unknown_ids_are_rejected() {
    let graph = graph("chain");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();

    assert_eq!(
        engine.toggle_learned(&mut state, "T").unwrap_err(),
        ProgressError::UnknownConcept { id: "T".to_string() }
    );
    assert!(engine.set_goal(&mut state, "nope").is_err());
    assert!(state.is_empty());
}

#[test]
fn shared_ancestors_survive_unset_of_one_goal() {
    let graph = graph("diamond");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();

    engine.set_goal(&mut state, "derivs").unwrap();
    engine.set_goal(&mut state, "funcs").unwrap();
    // funcs became a goal, so it is no longer path.
    assert_eq!(state.path_set(), set(&["vars", "graphs", "limits"]));

    engine.unset_goal(&mut state, "derivs").unwrap();
    assert_eq!(state.goal_set(), set(&["funcs"]));
    assert_eq!(state.path_set(), set(&["vars"]));

    engine.unset_goal(&mut state, "funcs").unwrap();
    assert!(state.path_set().is_empty());
}

#[test]
fn unset_goal_on_a_non_goal_is_noop() {
    let graph = graph("chain");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();
    engine.set_goal(&mut state, "C").unwrap();

    let outcome = engine.unset_goal(&mut state, "B").unwrap();
    assert!(!outcome.changed);
    assert_eq!(state.path_set(), set(&["A", "B"]));
}

#[test]
fn unsetting_a_goal_lets_it_return_to_path() {
    let graph = graph("chain");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();

    engine.set_goal(&mut state, "B").unwrap();
    engine.set_goal(&mut state, "C").unwrap();
    assert_eq!(state.path_set(), set(&["A"]));

    engine.unset_goal(&mut state, "B").unwrap();
    assert_eq!(state.path_set(), set(&["A", "B"]));
}

#[test]
fn reset_is_idempotent() {
    let graph = graph("diamond");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();

    engine.set_goal(&mut state, "derivs").unwrap();
    engine.toggle_learned(&mut state, "limits").unwrap();
    let outcome = engine.reset_progress(&mut state);
    assert_eq!(outcome.cleared_goals, 1);
    assert_eq!(outcome.cleared_learned, 4);
    assert_eq!(state, ProgressState::new());

    let again = engine.reset_progress(&mut state);
    assert_eq!(again.cleared_goals, 0);
    assert_eq!(state, ProgressState::new());
}

#[test]
fn initialise_restores_without_closure_and_prunes_stale_ids() {
    let graph = graph("diamond");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();

    let mut learned = map(&["limits", "deleted-concept", "alg"]);
    learned.insert("vars".to_string(), false);
    let snapshot = ProgressSnapshot {
        learned,
        goals: map(&["derivs", "gone"]),
    };
    let outcome = engine.initialise_graph_state(&mut state, &snapshot);

    assert_eq!(outcome.learned, 1);
    assert_eq!(outcome.goals, 1);
    assert_eq!(outcome.pruned, vec!["alg", "deleted-concept", "gone"]);
    // No upward closure on restore.
    assert_eq!(state.learned_set(), set(&["limits"]));
    assert_eq!(state.path_set(), set(&["vars", "funcs", "graphs", "limits"]));
    assert!(state.learned_edges().is_empty());
}

#[test]
fn initialise_from_empty_snapshot_clears_state() {
    let graph = graph("chain");
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();
    engine.toggle_learned(&mut state, "C").unwrap();

    engine.initialise_graph_state(&mut state, &ProgressSnapshot::default());
    assert_eq!(state, ProgressState::new());
}

#[test]
fn prune_after_node_removal() {
    let mut graph = graph("chain");
    let mut state = ProgressState::new();
    {
        let engine = PropagationEngine::new(&graph);
        engine.set_goal(&mut state, "C").unwrap();
        engine.toggle_learned(&mut state, "B").unwrap();
    }

    graph.remove_node("B").unwrap();
    let engine = PropagationEngine::new(&graph);
    let stale = engine.stale_ids(&state);
    assert_eq!(stale, vec!["B"]);
    engine.prune_removed(&mut state, &stale);

    assert_eq!(state.learned_set(), set(&["A"]));
    // C has no predecessors any more.
    assert!(state.path_set().is_empty());
    assert!(state.learned_edges().is_empty());
    assert!(engine.stale_ids(&state).is_empty());
}
