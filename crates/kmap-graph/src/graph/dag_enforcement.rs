//! Edge-creation validity predicate and cycle detection.
//! Every dependency edge passes through `validate_edge` before insertion,
//! so the concept graph stays a DAG at all times.

use std::collections::{HashMap, VecDeque};

use kmap_core::errors::EdgeRejection;
use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::Dfs;
use petgraph::Direction;

use super::stable_graph::MapGraph;

/// Decide whether `source -> target` may be added.
///
/// Checked in order: both endpoints exist, not a self loop, not already
/// present, neither endpoint is a topic, and `target` is not already a
/// transitive predecessor of `source`.
pub fn validate_edge(graph: &MapGraph, source: &str, target: &str) -> Result<(), EdgeRejection> {
    let (Some(s), Some(t)) = (graph.get_index(source), graph.get_index(target)) else {
        return Err(EdgeRejection::UnknownNode);
    };
    if s == t {
        return Err(EdgeRejection::SelfLoop);
    }
    if graph.graph.find_edge(s, t).is_some() {
        return Err(EdgeRejection::Duplicate);
    }
    if !graph.is_concept(source) || !graph.is_concept(target) {
        return Err(EdgeRejection::TopicEndpoint);
    }
    if would_create_cycle(graph, s, t) {
        return Err(EdgeRejection::WouldCreateCycle);
    }
    Ok(())
}

/// Convenience boolean form of [`validate_edge`].
pub fn is_valid_edge(graph: &MapGraph, source: &str, target: &str) -> bool {
    validate_edge(graph, source, target).is_ok()
}

/// Whether adding `source -> target` would close a cycle: true when `target`
/// already reaches `source`.
pub fn would_create_cycle(graph: &MapGraph, source: NodeIndex, target: NodeIndex) -> bool {
    if source == target {
        return true;
    }
    let mut dfs = Dfs::new(&graph.graph, target);
    while let Some(node) = dfs.next(&graph.graph) {
        if node == source {
            return true;
        }
    }
    false
}

/// Shortest directed path `from -> ... -> to` as node ids, if one exists.
pub fn path_between(graph: &MapGraph, from: &str, to: &str) -> Option<Vec<String>> {
    let start = graph.get_index(from)?;
    let goal = graph.get_index(to)?;

    let mut came_from: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let mut found = start == goal;
    while let Some(current) = queue.pop_front() {
        if current == goal {
            found = true;
            break;
        }
        for next in graph.graph.neighbors_directed(current, Direction::Outgoing) {
            if next != start && !came_from.contains_key(&next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    if !found {
        return None;
    }

    let mut path = vec![goal];
    let mut cursor = goal;
    while cursor != start {
        cursor = *came_from.get(&cursor)?;
        path.push(cursor);
    }
    path.reverse();
    Some(
        path.into_iter()
            .filter_map(|idx| graph.id_at(idx).map(str::to_string))
            .collect(),
    )
}

/// Validate the entire graph is a DAG.
/// Returns every strongly connected component with more than one node.
pub fn find_cycles(graph: &MapGraph) -> Vec<Vec<String>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            let mut ids: Vec<String> = scc
                .into_iter()
                .filter_map(|idx| graph.id_at(idx).map(str::to_string))
                .collect();
            ids.sort();
            ids
        })
        .collect()
}
