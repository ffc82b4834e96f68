use super::workspace::Workspace;
use crate::errors::{GraphError, ReferenceRole, Result};
use crate::model::{EdgeKind, ElementId, ElementKey, LanguageElement};

/// Register a new element, optionally contained by a parent and linked to a target
///
/// All references are resolved before anything is written, so a failure
/// leaves the workspace untouched.
///
/// # Arguments
/// * `workspace` - Mutable reference to the Workspace
/// * `element` - The element to register
/// * `parent` - Optional containing element; recorded as a `Contains` edge
///   from the new element to the parent
/// * `edge` - Optional extra edge from the new element to an existing target
///
/// # Returns
/// The positional id assigned to the element
///
/// # Errors
/// * `DanglingReference` - If the parent or edge target is not registered
/// * `DuplicateRegistration` - If the element is already registered
/// * `MultipleParents` - If both `parent` and a `Contains` edge are given
pub fn new_node(
    workspace: &mut Workspace,
    element: LanguageElement,
    parent: Option<ElementKey>,
    edge: Option<(EdgeKind, ElementKey)>,
) -> Result<ElementId> {
    if let Some(parent) = parent {
        workspace.resolve(parent, ReferenceRole::Parent)?;
    }
    if let Some((kind, target)) = edge {
        workspace.resolve(target, ReferenceRole::EdgeTarget)?;
        if kind == EdgeKind::Contains && parent.is_some() {
            return Err(GraphError::MultipleParents { key: element.key() });
        }
    }

    let key = element.key();
    let id = workspace.register(element)?;

    // A freshly registered element has no descendants and at most one
    // containing edge, so neither link below can fail the forest checks.
    if let Some(parent) = parent {
        workspace.link(key, EdgeKind::Contains, parent)?;
    }
    if let Some((kind, target)) = edge {
        workspace.link(key, kind, target)?;
    }

    Ok(id)
}
