//! Visitor-based traversal of the containment forest
//!
//! Consumers implement [`ModelVisitor`] and never touch the workspace
//! directly: elements arrive through `enter`/`leave`, and a
//! [`TraversalContext`] carries the nesting depth and identity lookup.

pub mod visitor;

pub use visitor::{walk, walk_from, ModelVisitor, TraversalContext, TraversalStats};
