use std::time::Instant;

use crate::errors::Result;
use crate::model::{EdgeKind, ElementId, ElementKey, LanguageElement};
use crate::ops::Workspace;
use crate::{log_op_end, log_op_start};

/// Per-callback view of an in-progress traversal
///
/// Threaded explicitly through `enter`/`leave` so visitors need no depth
/// field of their own.
#[derive(Debug, Clone, Copy)]
pub struct TraversalContext<'w> {
    workspace: &'w Workspace,
    depth: usize,
}

impl<'w> TraversalContext<'w> {
    /// Nesting level of the current element; roots are at depth 0
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Stable positional id of an element, for emitting external references
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if the element is not registered in the
    /// workspace being traversed.
    pub fn id_for(&self, element: &LanguageElement) -> Result<ElementId> {
        self.workspace.id_for(element.key())
    }
}

/// A traversal consumer
///
/// `enter` is called once per element before any of its contained children
/// are visited, `leave` once after all of them have been. Returning an error
/// from either callback stops the walk and surfaces that error.
pub trait ModelVisitor {
    fn enter(&mut self, element: &LanguageElement, cx: &TraversalContext<'_>) -> Result<()>;

    fn leave(&mut self, element: &LanguageElement, cx: &TraversalContext<'_>) -> Result<()>;
}

/// Summary of a completed walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Number of elements entered (and left)
    pub visited: usize,
    /// Deepest nesting level reached
    pub max_depth: usize,
}

enum Step {
    Enter(ElementId, usize),
    Leave(ElementId, usize),
}

/// Visit every containment tree in the workspace
///
/// Roots are visited in creation order; children of one element in the
/// order their containment edges were recorded.
///
/// # Errors
///
/// Returns the first error raised by the visitor.
pub fn walk<V>(workspace: &Workspace, visitor: &mut V) -> Result<TraversalStats>
where
    V: ModelVisitor + ?Sized,
{
    let roots: Vec<ElementId> = workspace.root_ids().collect();
    drive(workspace, roots, visitor)
}

/// Visit the containment subtree rooted at `root`
///
/// `root` is reported at depth 0 regardless of where it sits in the forest.
///
/// # Errors
///
/// Returns `UnknownElement` if `root` is not registered, otherwise the
/// first error raised by the visitor.
pub fn walk_from<V>(
    workspace: &Workspace,
    root: ElementKey,
    visitor: &mut V,
) -> Result<TraversalStats>
where
    V: ModelVisitor + ?Sized,
{
    let root = workspace.id_for(root)?;
    drive(workspace, vec![root], visitor)
}

fn drive<V>(workspace: &Workspace, roots: Vec<ElementId>, visitor: &mut V) -> Result<TraversalStats>
where
    V: ModelVisitor + ?Sized,
{
    let start = Instant::now();
    log_op_start!("walk", roots = roots.len());

    let mut stats = TraversalStats::default();
    // Enters minus leaves; balanced once the stack drains
    let mut open: usize = 0;
    let mut stack: Vec<Step> = roots
        .into_iter()
        .rev()
        .map(|id| Step::Enter(id, 0))
        .collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id, depth) => {
                let cx = TraversalContext { workspace, depth };
                visitor.enter(&workspace.elements()[id.index()], &cx)?;
                open += 1;
                stats.visited += 1;
                stats.max_depth = stats.max_depth.max(depth);

                stack.push(Step::Leave(id, depth));
                let children: Vec<ElementId> =
                    workspace.child_ids(id, EdgeKind::Contains).collect();
                stack.extend(children.into_iter().rev().map(|c| Step::Enter(c, depth + 1)));
            }
            Step::Leave(id, depth) => {
                let cx = TraversalContext { workspace, depth };
                visitor.leave(&workspace.elements()[id.index()], &cx)?;
                open -= 1;
            }
        }
    }

    debug_assert_eq!(open, 0, "enter/leave must balance");
    log_op_end!(
        "walk",
        duration_ms = start.elapsed().as_millis() as u64,
        visited = stats.visited
    );
    Ok(stats)
}
