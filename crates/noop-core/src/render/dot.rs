use std::fmt::Write;

use crate::errors::Result;
use crate::model::{ElementId, LanguageElement};
use crate::ops::Workspace;
use crate::traversal::{walk, ModelVisitor, TraversalContext};

/// Emits the containment forest as a Graphviz digraph
///
/// Nodes are named `n<id>` after their positional id, so output is stable
/// across runs that build the same structure.
#[derive(Debug, Default)]
pub struct DotVisitor {
    body: String,
    /// Ids of the elements currently entered, innermost last
    open: Vec<ElementId>,
}

impl DotVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the visitor and return the complete digraph
    pub fn finish(self) -> String {
        format!("digraph noop {{\n{}}}\n", self.body)
    }
}

/// Escape a label for a double-quoted DOT string
pub fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

impl ModelVisitor for DotVisitor {
    fn enter(&mut self, element: &LanguageElement, cx: &TraversalContext<'_>) -> Result<()> {
        let id = cx.id_for(element)?;
        // Writing to a String cannot fail
        let _ = writeln!(
            self.body,
            "  n{} [label=\"{}\"];",
            id,
            escape(&element.to_string())
        );
        if let Some(parent) = self.open.last() {
            let _ = writeln!(self.body, "  n{} -> n{};", parent, id);
        }
        self.open.push(id);
        Ok(())
    }

    fn leave(&mut self, _element: &LanguageElement, _cx: &TraversalContext<'_>) -> Result<()> {
        self.open.pop();
        Ok(())
    }
}

/// Render the whole workspace as a Graphviz digraph
///
/// # Errors
///
/// Propagates traversal errors.
pub fn render_dot(workspace: &Workspace) -> Result<String> {
    let mut visitor = DotVisitor::new();
    walk(workspace, &mut visitor)?;
    Ok(visitor.finish())
}
