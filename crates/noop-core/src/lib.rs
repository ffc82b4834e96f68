//! Noop Core - operation-based structural graph kernel
//!
//! This crate provides the in-memory model of a Noop program or library,
//! built exclusively through replayable operations:
//! - Element and edge model (projects, libraries, classes, blocks, parameters)
//! - Workspace: the arena of registered elements and their edges
//! - Operations and the Controller that applies them in order
//! - Visitor-based traversal of the containment forest
//! - Standard library producer
//! - Structural manifests and digests for replay checks
//! - Outline and Graphviz renderers built on the visitor protocol

pub mod controller;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod operation;
pub mod ops;
pub mod render;
pub mod snapshot;
pub mod stdlib;
pub mod traversal;

// Re-export commonly used types
pub use controller::{replay, Controller};
pub use errors::{ExError, ExErrorKind, GraphError, ReferenceRole, Result};
pub use model::{Edge, EdgeKind, ElementId, ElementKey, ElementKind, LanguageElement};
pub use operation::{Operation, OperationSource};
pub use ops::Workspace;
pub use stdlib::StandardLibraryBuilder;
pub use traversal::{walk, walk_from, ModelVisitor, TraversalContext, TraversalStats};
