//! Conversion between [`MapGraph`] and the map document exchange format.

use kmap_core::errors::{EdgeRejection, GraphError};
use kmap_core::models::{EdgeElement, MapDocument, MapNode, NodeElement};

use super::dag_enforcement;
use super::stable_graph::MapGraph;

impl MapGraph {
    /// Build a graph from a map document, validating every structural
    /// invariant: unique ids, concepts parented by existing topics, edges
    /// only between concepts, no duplicates, no cycles, no empty topics.
    pub fn from_document(document: &MapDocument) -> Result<Self, GraphError> {
        let mut graph = MapGraph::new();

        // Topics first so concept parents resolve.
        for element in document.nodes.iter().filter(|n| n.data.is_topic()) {
            graph.add_node(element.data.clone(), element.position)?;
        }
        for element in document.nodes.iter().filter(|n| n.data.is_concept()) {
            graph.add_node(element.data.clone(), element.position)?;
        }

        for element in &document.edges {
            let edge = &element.data;
            if let Err(reason) = dag_enforcement::validate_edge(&graph, &edge.source, &edge.target) {
                return Err(match reason {
                    EdgeRejection::WouldCreateCycle => {
                        let mut path = dag_enforcement::path_between(&graph, &edge.target, &edge.source)
                            .unwrap_or_default();
                        path.insert(0, edge.source.clone());
                        GraphError::CycleDetected {
                            path: path.join(" -> "),
                        }
                    }
                    reason => GraphError::EdgeRejected {
                        from: edge.source.clone(),
                        to: edge.target.clone(),
                        reason,
                    },
                });
            }
            graph.add_edge(edge.clone())?;
        }

        for topic_id in graph.topic_ids().iter() {
            if graph.children(topic_id).is_empty() {
                return Err(GraphError::EmptyTopic {
                    id: topic_id.to_string(),
                });
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "map graph built from document"
        );
        Ok(graph)
    }

    /// Serialize the graph to a map document. Nodes (topics before concepts)
    /// and edges are sorted by id so output is stable.
    pub fn to_document(&self) -> MapDocument {
        let mut nodes: Vec<NodeElement> = self
            .nodes()
            .map(|n| NodeElement {
                data: n.data.clone(),
                position: n.position,
            })
            .collect();
        nodes.sort_by(|a, b| {
            let rank = |n: &MapNode| if n.is_topic() { 0 } else { 1 };
            rank(&a.data)
                .cmp(&rank(&b.data))
                .then_with(|| a.data.id().cmp(b.data.id()))
        });

        let mut edges: Vec<EdgeElement> = self
            .edges()
            .map(|e| EdgeElement { data: e.clone() })
            .collect();
        edges.sort_by(|a, b| a.data.id.cmp(&b.data.id));

        MapDocument { nodes, edges }
    }
}
