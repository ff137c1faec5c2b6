//! Graph storage, document conversion, and DAG enforcement.

pub mod dag_enforcement;
pub mod document;
pub mod stable_graph;

pub use stable_graph::{GraphNode, MapGraph, RemovedNode};
