use super::workspace::Workspace;
use crate::errors::Result;
use crate::model::{EdgeKind, ElementKey};

/// Record an edge between two already registered elements
///
/// # Errors
/// * `DanglingReference` - If either endpoint is not registered
/// * `MultipleParents` - If a `Contains` source already has a parent
/// * `CycleDetected` - If a `Contains` edge would close a cycle
pub fn new_edge(
    workspace: &mut Workspace,
    source: ElementKey,
    kind: EdgeKind,
    target: ElementKey,
) -> Result<()> {
    workspace.link(source, kind, target)
}
