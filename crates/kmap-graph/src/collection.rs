//! NodeSet: an ordered collection of element ids with set algebra.
//!
//! Ordering is by id so iteration, serialisation and random picks over a
//! set are reproducible for a given graph state.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::ops::{BitAnd, BitOr, Sub};

/// A set of node (or edge) ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeSet {
    ids: BTreeSet<String>,
}

impl NodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    /// Union.
    pub fn or(&self, other: &NodeSet) -> NodeSet {
        self.ids.union(&other.ids).cloned().collect()
    }

    /// Intersection.
    pub fn and(&self, other: &NodeSet) -> NodeSet {
        self.ids.intersection(&other.ids).cloned().collect()
    }

    /// Difference: members of `self` not in `other`.
    pub fn not(&self, other: &NodeSet) -> NodeSet {
        self.ids.difference(&other.ids).cloned().collect()
    }

    /// Members satisfying `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> NodeSet
    where
        F: FnMut(&str) -> bool,
    {
        self.ids
            .iter()
            .filter(|id| predicate(id.as_str()))
            .cloned()
            .collect()
    }

    pub fn is_subset(&self, other: &NodeSet) -> bool {
        self.ids.is_subset(&other.ids)
    }

    pub fn first(&self) -> Option<&str> {
        self.ids.iter().next().map(String::as_str)
    }

    /// Member at position `index` in id order.
    pub fn nth(&self, index: usize) -> Option<&str> {
        self.ids.iter().nth(index).map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl FromIterator<String> for NodeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for NodeSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

impl Extend<String> for NodeSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

impl IntoIterator for NodeSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl BitOr for &NodeSet {
    type Output = NodeSet;

    fn bitor(self, rhs: &NodeSet) -> NodeSet {
        self.or(rhs)
    }
}

impl BitAnd for &NodeSet {
    type Output = NodeSet;

    fn bitand(self, rhs: &NodeSet) -> NodeSet {
        self.and(rhs)
    }
}

impl Sub for &NodeSet {
    type Output = NodeSet;

    fn sub(self, rhs: &NodeSet) -> NodeSet {
        self.not(rhs)
    }
}
