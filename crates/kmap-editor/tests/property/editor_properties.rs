//! Property tests for kmap-editor: undo/redo inverse law and DAG
//! preservation under random edit sequences.

use proptest::prelude::*;

use kmap_core::models::{MapDocument, Position};
use kmap_editor::command::EditCommand;
use kmap_editor::Editor;
use kmap_graph::graph::dag_enforcement;
use kmap_graph::MapGraph;

/// Concepts of the diamond fixture followed by its two topics.
const ELEMENTS: [&str; 8] = [
    "vars", "funcs", "graphs", "limits", "derivs", "series", "alg", "calc",
];

fn diamond() -> MapGraph {
    MapGraph::from_document(&test_fixtures::load_map("diamond")).unwrap()
}

#[derive(Debug, Clone)]
enum Gesture {
    Edge(usize, usize),
    Remove(usize),
    Move(usize, usize),
    Drag(usize, i32, i32),
    Undo,
    Redo,
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    let n = ELEMENTS.len();
    prop_oneof![
        (0..n, 0..n).prop_map(|(a, b)| Gesture::Edge(a, b)),
        (0..n).prop_map(Gesture::Remove),
        (0..n, 6..n).prop_map(|(a, b)| Gesture::Move(a, b)),
        (0..n, -50..50, -50..50).prop_map(|(a, x, y)| Gesture::Drag(a, x, y)),
        Just(Gesture::Undo),
        Just(Gesture::Redo),
    ]
}

/// Apply a gesture, ignoring refusals.
fn perform(editor: &mut Editor, graph: &mut MapGraph, gesture: &Gesture) {
    let _ = match *gesture {
        Gesture::Edge(a, b) => editor.add_edge(graph, ELEMENTS[a], ELEMENTS[b]),
        Gesture::Remove(a) => editor.remove(graph, ELEMENTS[a]),
        Gesture::Move(a, b) => editor.move_concept(graph, ELEMENTS[a], ELEMENTS[b]),
        Gesture::Drag(a, x, y) => editor.execute(
            graph,
            EditCommand::Reposition {
                id: ELEMENTS[a].to_string(),
                position: Some(Position::new(x as f64, y as f64)),
            },
        ),
        Gesture::Undo => editor.undo(graph),
        Gesture::Redo => editor.redo(graph),
    };
}

fn no_empty_topics(graph: &MapGraph) -> bool {
    graph
        .topic_ids()
        .iter()
        .all(|t| !graph.children(t).is_empty())
}

proptest! {
    #[test]
    fn undo_then_redo_round_trips(
        gestures in prop::collection::vec(gesture_strategy(), 1..25),
    ) {
        let mut graph = diamond();
        let mut editor = Editor::default();
        for gesture in &gestures {
            let before: MapDocument = graph.to_document();
            let undo_len = editor.log().undo_len();
            perform(&mut editor, &mut graph, gesture);

            let applied = editor.log().undo_len() > undo_len;
            if applied && !matches!(gesture, Gesture::Undo | Gesture::Redo) {
                let after = graph.to_document();
                editor.undo(&mut graph).unwrap();
                prop_assert_eq!(graph.to_document(), before);
                editor.redo(&mut graph).unwrap();
                prop_assert_eq!(graph.to_document(), after);
            }
        }
    }

    #[test]
    fn edits_keep_dag_and_grouping(
        gestures in prop::collection::vec(gesture_strategy(), 1..40),
    ) {
        let mut graph = diamond();
        let mut editor = Editor::default();
        for gesture in &gestures {
            perform(&mut editor, &mut graph, gesture);
            prop_assert!(dag_enforcement::find_cycles(&graph).is_empty());
            prop_assert!(no_empty_topics(&graph));
        }
    }

    #[test]
    fn undoing_everything_restores_the_original(
        gestures in prop::collection::vec(gesture_strategy(), 1..30),
    ) {
        let mut graph = diamond();
        let original = graph.to_document();
        let mut editor = Editor::default();
        for gesture in &gestures {
            perform(&mut editor, &mut graph, gesture);
        }
        while editor.log().can_undo() {
            editor.undo(&mut graph).unwrap();
        }
        prop_assert_eq!(graph.to_document(), original);
    }
}
