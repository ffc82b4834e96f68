//! Mutation operations
//!
//! An [`Operation`] is an immutable value describing one atomic change to a
//! [`Workspace`]. Operations are the only sanctioned way to change the graph;
//! an ordered list of them is a complete, replayable build recipe.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{EdgeKind, ElementId, ElementKey, LanguageElement};
use crate::ops::{edge_ops, node_ops, Workspace};

/// One atomic change to a workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Register a new element, optionally contained by `parent` and
    /// linked to an existing element through `edge`
    NewNode {
        element: LanguageElement,
        parent: Option<ElementKey>,
        edge: Option<(EdgeKind, ElementKey)>,
    },

    /// Record an edge between two registered elements
    NewEdge {
        source: ElementKey,
        kind: EdgeKind,
        target: ElementKey,
    },
}

impl Operation {
    /// Create a node with an optional containing parent
    pub fn new_node(element: LanguageElement, parent: Option<&LanguageElement>) -> Self {
        Operation::NewNode {
            element,
            parent: parent.map(LanguageElement::key),
            edge: None,
        }
    }

    /// Create a node contained by `parent` with an extra `kind` edge to `target`
    pub fn new_node_with_edge(
        element: LanguageElement,
        parent: Option<&LanguageElement>,
        kind: EdgeKind,
        target: &LanguageElement,
    ) -> Self {
        Operation::NewNode {
            element,
            parent: parent.map(LanguageElement::key),
            edge: Some((kind, target.key())),
        }
    }

    /// Create an edge between two elements
    pub fn new_edge(source: &LanguageElement, kind: EdgeKind, target: &LanguageElement) -> Self {
        Operation::NewEdge {
            source: source.key(),
            kind,
            target: target.key(),
        }
    }

    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Operation::NewNode { .. } => "new_node",
            Operation::NewEdge { .. } => "new_edge",
        }
    }

    /// Apply this operation to a workspace
    ///
    /// Deterministic and total over a valid workspace: the same operation
    /// applied to equal workspaces produces equal results. The operation
    /// itself is not consumed, so it can be kept in a log and replayed.
    ///
    /// # Returns
    /// The id of the registered element for `NewNode`, `None` for `NewEdge`
    ///
    /// # Errors
    /// * `DanglingReference` - A parent, source or target is not registered
    /// * `DuplicateRegistration` - The element of a `NewNode` is already registered
    /// * `MultipleParents` / `CycleDetected` - A containment edge breaks the forest
    pub fn apply(&self, workspace: &mut Workspace) -> Result<Option<ElementId>> {
        match self {
            Operation::NewNode {
                element,
                parent,
                edge,
            } => node_ops::new_node(workspace, element.clone(), *parent, *edge).map(Some),

            Operation::NewEdge {
                source,
                kind,
                target,
            } => {
                edge_ops::new_edge(workspace, *source, *kind, *target)?;
                Ok(None)
            }
        }
    }
}

/// A producer of build recipes
///
/// Implementors emit an ordered list of operations describing a complete
/// sub-graph. Each element must be created exactly once, and any element
/// used as a parent or edge target must be created earlier in the list.
pub trait OperationSource {
    fn build(&mut self) -> Vec<Operation>;
}
