//! Concept and topic nodes as a tagged variant.

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::constants::{NODETYPE_CONCEPT, NODETYPE_TOPIC};

/// Author-specified canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A learning unit in the dependency DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Id of the topic this concept is grouped under.
    pub parent: String,
    /// Scales size and opacity baseline. Always positive.
    #[serde(default = "default_relative_importance")]
    pub relative_importance: f64,
    /// Ordered resource links.
    #[serde(default)]
    pub urls: Vec<String>,
}

fn default_relative_importance() -> f64 {
    defaults::DEFAULT_RELATIVE_IMPORTANCE
}

impl ConceptNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            parent: parent.into(),
            relative_importance: defaults::DEFAULT_RELATIVE_IMPORTANCE,
            urls: Vec::new(),
        }
    }
}

/// A grouping container for concepts. Never takes part in dependency edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicNode {
    pub id: String,
    pub name: String,
    /// Badge/background colour as `#rrggbb`.
    #[serde(default)]
    pub colour: String,
}

impl TopicNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colour: colour.into(),
        }
    }
}

/// Discriminant of a [`MapNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Concept,
    Topic,
}

impl NodeKind {
    /// The `nodetype` tag used in the map document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => NODETYPE_CONCEPT,
            Self::Topic => NODETYPE_TOPIC,
        }
    }
}

/// Node data as carried in the `data` field of the map document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodetype")]
pub enum MapNode {
    #[serde(rename = "concept")]
    Concept(ConceptNode),
    #[serde(rename = "field")]
    Topic(TopicNode),
}

impl MapNode {
    pub fn id(&self) -> &str {
        match self {
            Self::Concept(c) => &c.id,
            Self::Topic(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Concept(c) => &c.name,
            Self::Topic(t) => &t.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Concept(_) => NodeKind::Concept,
            Self::Topic(_) => NodeKind::Topic,
        }
    }

    pub fn is_concept(&self) -> bool {
        matches!(self, Self::Concept(_))
    }

    pub fn is_topic(&self) -> bool {
        matches!(self, Self::Topic(_))
    }

    pub fn as_concept(&self) -> Option<&ConceptNode> {
        match self {
            Self::Concept(c) => Some(c),
            Self::Topic(_) => None,
        }
    }

    pub fn as_concept_mut(&mut self) -> Option<&mut ConceptNode> {
        match self {
            Self::Concept(c) => Some(c),
            Self::Topic(_) => None,
        }
    }

    pub fn as_topic(&self) -> Option<&TopicNode> {
        match self {
            Self::Topic(t) => Some(t),
            Self::Concept(_) => None,
        }
    }

    /// Parent topic id for concepts; topics have no parent.
    pub fn parent(&self) -> Option<&str> {
        self.as_concept().map(|c| c.parent.as_str())
    }
}

impl From<ConceptNode> for MapNode {
    fn from(concept: ConceptNode) -> Self {
        Self::Concept(concept)
    }
}

impl From<TopicNode> for MapNode {
    fn from(topic: TopicNode) -> Self {
        Self::Topic(topic)
    }
}
