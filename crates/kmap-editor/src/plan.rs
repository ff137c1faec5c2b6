//! Builders for user-level edits. These expand a single gesture into the
//! command (or batch) that keeps the topic grouping valid: no topic is
//! ever left without concepts.

use kmap_core::errors::{EdgeRejection, EditorError};
use kmap_core::models::{ConceptNode, DependencyEdge, Position, TopicNode};
use kmap_graph::graph::dag_enforcement;
use kmap_graph::MapGraph;

use crate::command::{EditCommand, Element, ElementId};

pub const NEW_CONCEPT_NAME: &str = "New concept";
pub const NEW_TOPIC_NAME: &str = "New topic";

/// Fresh element id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Remove `id` (node or edge).
///
/// - A concept that is its topic's last child takes the topic with it.
/// - A topic takes every concept it groups.
pub fn plan_remove(graph: &MapGraph, id: &str) -> Result<EditCommand, EditorError> {
    let element = ElementId::resolve(graph, id).ok_or_else(|| EditorError::InvalidCommand {
        reason: format!("no element with id {id}"),
    })?;

    let node_id = match element {
        ElementId::Node(node_id) => node_id,
        edge => return Ok(EditCommand::Remove(edge)),
    };

    if graph.topic(&node_id).is_some() {
        let mut steps: Vec<EditCommand> = graph
            .children(&node_id)
            .into_iter()
            .map(|child| EditCommand::Remove(ElementId::Node(child)))
            .collect();
        steps.push(EditCommand::Remove(ElementId::Node(node_id)));
        return Ok(EditCommand::Batch(steps));
    }

    match graph.parent(&node_id).map(str::to_string) {
        Some(parent) if graph.children(&parent).len() == 1 => Ok(EditCommand::Batch(vec![
            EditCommand::Remove(ElementId::Node(node_id)),
            EditCommand::Remove(ElementId::Node(parent)),
        ])),
        _ => Ok(EditCommand::Remove(ElementId::Node(node_id))),
    }
}

/// Reparent `concept_id` under `parent`, removing the old topic if this
/// empties it.
pub fn plan_move(
    graph: &MapGraph,
    concept_id: &str,
    parent: &str,
) -> Result<EditCommand, EditorError> {
    let old_parent = graph
        .parent(concept_id)
        .ok_or_else(|| EditorError::InvalidCommand {
            reason: format!("{concept_id} is not a concept"),
        })?
        .to_string();
    if graph.topic(parent).is_none() {
        return Err(EditorError::InvalidCommand {
            reason: format!("{parent} is not a topic"),
        });
    }
    if old_parent == parent {
        return Err(EditorError::InvalidCommand {
            reason: format!("{concept_id} is already under {parent}"),
        });
    }

    let step = EditCommand::Move {
        concept_id: concept_id.to_string(),
        parent: parent.to_string(),
    };
    if graph.children(&old_parent).len() == 1 {
        Ok(EditCommand::Batch(vec![
            step,
            EditCommand::Remove(ElementId::Node(old_parent)),
        ]))
    } else {
        Ok(step)
    }
}

/// A new dependency edge `source -> target`, if the validity predicate
/// accepts it.
pub fn plan_add_edge(
    graph: &MapGraph,
    source: &str,
    target: &str,
) -> Result<EditCommand, EdgeRejection> {
    dag_enforcement::validate_edge(graph, source, target)?;
    Ok(EditCommand::Add(Element::Edge(DependencyEdge::new(
        new_id(),
        source,
        target,
    ))))
}

/// A new concept at `position`.
///
/// Tapping a topic or a concept adds to that topic; tapping empty canvas
/// also creates a new topic around the concept.
pub fn plan_add_concept(
    graph: &MapGraph,
    tapped: Option<&str>,
    position: Option<Position>,
) -> EditCommand {
    let existing_topic = tapped.and_then(|id| {
        if graph.topic(id).is_some() {
            Some(id.to_string())
        } else {
            graph.parent(id).map(str::to_string)
        }
    });

    match existing_topic {
        Some(parent) => EditCommand::AddNode {
            concept: ConceptNode::new(new_id(), NEW_CONCEPT_NAME, parent),
            position,
            new_topic: None,
        },
        None => {
            let topic = TopicNode::new(new_id(), NEW_TOPIC_NAME, "");
            EditCommand::AddNode {
                concept: ConceptNode::new(new_id(), NEW_CONCEPT_NAME, topic.id.clone()),
                position,
                new_topic: Some((topic, position)),
            }
        }
    }
}
