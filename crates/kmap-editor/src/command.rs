//! Invertible structural edit commands.

use kmap_core::errors::EditorError;
use kmap_core::models::{ConceptNode, DependencyEdge, MapNode, Position, TopicNode};
use kmap_core::KmapResult;
use kmap_graph::MapGraph;

/// A graph element with everything needed to re-insert it.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Node {
        data: MapNode,
        position: Option<Position>,
    },
    Edge(DependencyEdge),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Self::Node { data, .. } => data.id(),
            Self::Edge(edge) => &edge.id,
        }
    }

    pub fn element_id(&self) -> ElementId {
        match self {
            Self::Node { data, .. } => ElementId::Node(data.id().to_string()),
            Self::Edge(edge) => ElementId::Edge(edge.id.clone()),
        }
    }
}

/// Reference to an element already in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    Node(String),
    Edge(String),
}

impl ElementId {
    /// Resolve a bare id against `graph`: nodes first, then edges.
    pub fn resolve(graph: &MapGraph, id: &str) -> Option<Self> {
        if graph.contains(id) {
            Some(Self::Node(id.to_string()))
        } else if graph.edge(id).is_some() {
            Some(Self::Edge(id.to_string()))
        } else {
            None
        }
    }
}

/// A structural edit. [`EditCommand::apply`] returns the command that
/// undoes it.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Add a concept, creating its parent topic in the same step when
    /// `new_topic` is set.
    AddNode {
        concept: ConceptNode,
        position: Option<Position>,
        new_topic: Option<(TopicNode, Option<Position>)>,
    },
    /// Add a single node or edge.
    Add(Element),
    /// Remove a node (with its incident edges) or an edge.
    Remove(ElementId),
    /// Reparent a concept under another topic.
    Move { concept_id: String, parent: String },
    /// Set a node's canvas position.
    Reposition {
        id: String,
        position: Option<Position>,
    },
    /// Ordered list applied and undone as one unit.
    Batch(Vec<EditCommand>),
}

impl EditCommand {
    /// Short name used in logs and events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddNode { .. } => "addNode",
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Move { .. } => "move",
            Self::Reposition { .. } => "reposition",
            Self::Batch(_) => "batch",
        }
    }

    /// Apply to `graph` and return the inverse command.
    ///
    /// On error the graph is left as it was; a failing step in a batch
    /// rolls back the steps before it.
    pub fn apply(&self, graph: &mut MapGraph) -> KmapResult<EditCommand> {
        match self {
            Self::AddNode {
                concept,
                position,
                new_topic,
            } => {
                let mut steps = Vec::with_capacity(2);
                if let Some((topic, topic_position)) = new_topic {
                    steps.push(EditCommand::Add(Element::Node {
                        data: MapNode::Topic(topic.clone()),
                        position: *topic_position,
                    }));
                }
                steps.push(EditCommand::Add(Element::Node {
                    data: MapNode::Concept(concept.clone()),
                    position: *position,
                }));
                apply_all(&steps, graph)
            }
            Self::Add(Element::Node { data, position }) => {
                graph.add_node(data.clone(), *position)?;
                Ok(EditCommand::Remove(ElementId::Node(data.id().to_string())))
            }
            Self::Add(Element::Edge(edge)) => {
                graph.add_edge(edge.clone())?;
                Ok(EditCommand::Remove(ElementId::Edge(edge.id.clone())))
            }
            Self::Remove(ElementId::Node(id)) => {
                let removed = graph.remove_node(id)?;
                let mut restore = Vec::with_capacity(removed.edges.len() + 1);
                restore.push(EditCommand::Add(Element::Node {
                    data: removed.node.data,
                    position: removed.node.position,
                }));
                restore.extend(
                    removed
                        .edges
                        .into_iter()
                        .map(|edge| EditCommand::Add(Element::Edge(edge))),
                );
                Ok(if restore.len() == 1 {
                    restore.remove(0)
                } else {
                    EditCommand::Batch(restore)
                })
            }
            Self::Remove(ElementId::Edge(id)) => {
                let edge = graph.remove_edge(id)?;
                Ok(EditCommand::Add(Element::Edge(edge)))
            }
            Self::Move { concept_id, parent } => {
                let previous = graph.set_parent(concept_id, parent)?;
                Ok(EditCommand::Move {
                    concept_id: concept_id.clone(),
                    parent: previous,
                })
            }
            Self::Reposition { id, position } => {
                let previous = graph.set_position(id, *position)?;
                Ok(EditCommand::Reposition {
                    id: id.clone(),
                    position: previous,
                })
            }
            Self::Batch(steps) => apply_all(steps, graph),
        }
    }
}

/// Apply `steps` in order. Returns a batch of inverses in reverse order, or
/// rolls back and returns the first error.
fn apply_all(steps: &[EditCommand], graph: &mut MapGraph) -> KmapResult<EditCommand> {
    let mut inverses: Vec<EditCommand> = Vec::with_capacity(steps.len());
    for step in steps {
        match step.apply(graph) {
            Ok(inverse) => inverses.push(inverse),
            Err(err) => {
                for inverse in inverses.iter().rev() {
                    if let Err(rollback) = inverse.apply(graph) {
                        tracing::error!(%rollback, "rollback of partial batch failed");
                        return Err(EditorError::CommandFailed {
                            command: step.label().to_string(),
                            reason: format!("{err}; rollback failed: {rollback}"),
                        }
                        .into());
                    }
                }
                return Err(err);
            }
        }
    }
    inverses.reverse();
    Ok(EditCommand::Batch(inverses))
}

