// Opt-in all-or-nothing application
//
// GIVEN a workspace with some elements already applied
// WHEN apply_atomic runs a list whose last operation fails
// THEN the workspace and the controller log are exactly as before

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::chain;
use noop_core::{Controller, EdgeKind, GraphError, LanguageElement, Operation, Workspace};

#[test]
fn test_atomic_failure_leaves_workspace_untouched() {
    let chain = chain();
    let mut ws = Workspace::new();
    let mut controller = Controller::new(&mut ws);
    controller
        .apply(vec![Operation::new_node(chain.project.clone(), None)])
        .unwrap();
    let before = controller.workspace().clone();

    let ghost = LanguageElement::class("Ghost");
    let err = controller
        .apply_atomic(vec![
            Operation::new_node(chain.library.clone(), Some(&chain.project)),
            Operation::new_node(chain.class.clone(), Some(&chain.library)),
            Operation::new_edge(&chain.class, EdgeKind::TypeOf, &ghost),
        ])
        .unwrap_err();

    assert_eq!(err.operation_index(), Some(2));
    assert_eq!(controller.workspace(), &before);
    assert_eq!(controller.log().len(), 1);
}

#[test]
fn test_atomic_success_matches_plain_apply() {
    let chain = chain();
    let mut atomic_ws = Workspace::new();
    Controller::new(&mut atomic_ws)
        .apply_atomic(chain.operations())
        .unwrap();
    let mut plain_ws = Workspace::new();
    Controller::new(&mut plain_ws)
        .apply(chain.operations())
        .unwrap();

    assert_eq!(atomic_ws, plain_ws);
}

#[test]
fn test_partial_apply_keeps_prefix() {
    let chain = chain();
    let mut ws = Workspace::new();
    let ghost = LanguageElement::class("Ghost");

    let err = Controller::new(&mut ws)
        .apply(vec![
            Operation::new_node(chain.project.clone(), None),
            Operation::new_edge(&chain.project, EdgeKind::Contains, &ghost),
        ])
        .unwrap_err();

    assert!(matches!(
        err.root_cause(),
        GraphError::DanglingReference { .. }
    ));
    assert_eq!(ws.len(), 1);
}
