//! Traversal primitives over the dependency edges: transitive closure,
//! direct neighbours, roots, and hover neighbourhoods.
//!
//! All queries are pure and return empty sets for unknown ids.

pub mod closure;
pub mod neighbors;
pub mod roots;

pub use neighbors::Neighborhood;
