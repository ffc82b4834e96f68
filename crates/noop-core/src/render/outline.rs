use std::fmt::Write;

use crate::errors::Result;
use crate::model::LanguageElement;
use crate::ops::Workspace;
use crate::traversal::{walk, ModelVisitor, TraversalContext};

/// Writes one `Enter`/`Leave` line per callback, indented by depth
#[derive(Debug, Default)]
pub struct OutlineVisitor {
    output: String,
}

impl OutlineVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the visitor and return the rendered text
    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, verb: &str, element: &LanguageElement, depth: usize) {
        // Writing to a String cannot fail
        let _ = writeln!(self.output, "{}{} {}", "  ".repeat(depth), verb, element);
    }
}

impl ModelVisitor for OutlineVisitor {
    fn enter(&mut self, element: &LanguageElement, cx: &TraversalContext<'_>) -> Result<()> {
        self.line("Enter", element, cx.depth());
        Ok(())
    }

    fn leave(&mut self, element: &LanguageElement, cx: &TraversalContext<'_>) -> Result<()> {
        self.line("Leave", element, cx.depth());
        Ok(())
    }
}

/// Render the whole workspace as an indented outline
///
/// # Errors
///
/// Propagates traversal errors.
pub fn render_outline(workspace: &Workspace) -> Result<String> {
    let mut visitor = OutlineVisitor::new();
    walk(workspace, &mut visitor)?;
    Ok(visitor.finish())
}
