//! # kmap-graph
//!
//! The graph model adapter. Wraps a `petgraph` stable graph of concept and
//! topic nodes joined by prerequisite edges, and exposes traversal
//! primitives, node-set algebra, the edge validity predicate, and
//! conversion to and from the map document format.

pub mod collection;
pub mod graph;
pub mod traversal;

pub use collection::NodeSet;
pub use graph::dag_enforcement::{is_valid_edge, validate_edge};
pub use graph::{GraphNode, MapGraph, RemovedNode};
pub use traversal::Neighborhood;
