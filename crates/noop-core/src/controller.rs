//! Controller: ordered application of operation lists
//!
//! The [`Controller`] is the single writer of a [`Workspace`] during a build
//! phase. It holds the workspace's only mutable borrow, applies operations
//! strictly in order, and keeps the applied operations as an audit log.
//!
//! ## Failure Contract
//!
//! - **Short-circuit**: the first failing operation stops the list; later
//!   operations are not attempted
//! - **No rollback**: operations before the failing one stay applied
//! - **Located errors**: the failure is reported as
//!   `GraphError::OperationFailed { index, source }`
//!
//! Callers that need all-or-nothing behaviour use [`Controller::apply_atomic`]
//! or rebuild a fresh workspace with [`replay`].
//!
//! ## Example
//!
//! ```
//! use noop_core::{Controller, LanguageElement, Operation, Workspace};
//!
//! let mut workspace = Workspace::new();
//! let project = LanguageElement::project("Noop", "com.google.noop", "Apache 2");
//! let lang = LanguageElement::library("lang");
//!
//! let mut controller = Controller::new(&mut workspace);
//! let applied = controller
//!     .apply(vec![
//!         Operation::new_node(project.clone(), None),
//!         Operation::new_node(lang, Some(&project)),
//!     ])
//!     .unwrap();
//! assert_eq!(applied, 2);
//! assert_eq!(workspace.len(), 2);
//! ```

use std::time::Instant;

use noop_core_types::BuildId;

use crate::errors::{ExError, GraphError, Result};
use crate::model::ElementId;
use crate::operation::Operation;
use crate::ops::Workspace;
use crate::{log_op_end, log_op_error, log_op_start};

/// Applies operations to one workspace and records what was applied
#[derive(Debug)]
pub struct Controller<'w> {
    workspace: &'w mut Workspace,
    log: Vec<Operation>,
    build_id: BuildId,
}

impl<'w> Controller<'w> {
    /// Take exclusive write access to `workspace` for a build phase
    pub fn new(workspace: &'w mut Workspace) -> Self {
        Self {
            workspace,
            log: Vec::new(),
            build_id: BuildId::new(),
        }
    }

    /// Correlation id attached to this controller's log events
    pub fn build_id(&self) -> &BuildId {
        &self.build_id
    }

    /// Apply operations left to right, stopping at the first failure
    ///
    /// # Returns
    /// The number of operations applied (the full list length on success)
    ///
    /// # Errors
    ///
    /// Returns `OperationFailed { index, source }` naming the position of the
    /// first failing operation in `ops` and the invariant it violated.
    /// Operations `0..index` remain applied and logged.
    pub fn apply<I>(&mut self, ops: I) -> Result<usize>
    where
        I: IntoIterator<Item = Operation>,
    {
        let ops: Vec<Operation> = ops.into_iter().collect();
        let op_count = ops.len();
        let start = Instant::now();
        log_op_start!("apply", build_id = %self.build_id, op_count = op_count);

        for (index, op) in ops.into_iter().enumerate() {
            if let Err(source) = self.apply_one(op) {
                let err = GraphError::OperationFailed {
                    index,
                    source: Box::new(source),
                };
                log_op_error!(
                    "apply",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    build_id = %self.build_id,
                    op_index = index
                );
                return Err(err);
            }
        }

        log_op_end!(
            "apply",
            duration_ms = start.elapsed().as_millis() as u64,
            build_id = %self.build_id,
            applied = op_count
        );
        Ok(op_count)
    }

    /// Apply a single operation and record it on success
    ///
    /// # Errors
    ///
    /// Returns the operation's error unwrapped; nothing is logged on failure.
    pub fn apply_one(&mut self, op: Operation) -> Result<Option<ElementId>> {
        let id = op.apply(self.workspace)?;
        tracing::debug!(
            component = module_path!(),
            op = op.name(),
            build_id = %self.build_id,
            element_id = ?id.map(|id| id.index()),
            "operation applied"
        );
        self.log.push(op);
        Ok(id)
    }

    /// Apply operations with all-or-nothing semantics
    ///
    /// Snapshots the workspace first and restores it, along with the log, if
    /// any operation fails.
    ///
    /// # Errors
    ///
    /// Same as [`Controller::apply`]; on error the workspace is unchanged.
    pub fn apply_atomic<I>(&mut self, ops: I) -> Result<usize>
    where
        I: IntoIterator<Item = Operation>,
    {
        let snapshot = self.workspace.clone();
        let log_len = self.log.len();

        match self.apply(ops) {
            Ok(applied) => Ok(applied),
            Err(err) => {
                *self.workspace = snapshot;
                self.log.truncate(log_len);
                tracing::warn!(
                    component = module_path!(),
                    op = "apply_atomic",
                    build_id = %self.build_id,
                    "rolled back partially applied operations"
                );
                Err(err)
            }
        }
    }

    /// Classify an error from this build phase, tagged with its build id
    ///
    /// The id matches the `build_id` field of this controller's log events.
    pub fn ex_error(&self, err: GraphError) -> ExError {
        ExError::from(err).with_build_id(self.build_id.clone())
    }

    /// Read access to the workspace being built
    pub fn workspace(&self) -> &Workspace {
        &*self.workspace
    }

    /// Operations applied so far, in order
    pub fn log(&self) -> &[Operation] {
        &self.log
    }

    /// Release the workspace and keep the applied-operation log
    pub fn into_log(self) -> Vec<Operation> {
        self.log
    }
}

/// Rebuild a fresh workspace from an operation log
///
/// The workspace is a pure fold over the log, so replaying the log of a
/// successful build reproduces an equivalent graph.
///
/// # Errors
///
/// Returns `OperationFailed` if the log is not a valid build recipe.
pub fn replay(log: &[Operation]) -> Result<Workspace> {
    let mut workspace = Workspace::new();
    {
        let mut controller = Controller::new(&mut workspace);
        controller.apply(log.iter().cloned())?;
    }
    Ok(workspace)
}
