// Structural digest and replay tests
//
// Two workspaces built from the same recipe must describe the same structure,
// even though every producer run mints fresh element keys.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{build, chain};
use noop_core::snapshot::{compute_manifest_digest, generate_manifest, workspace_digest};
use noop_core::{
    replay, Controller, LanguageElement, Operation, OperationSource, StandardLibraryBuilder,
    Workspace,
};

#[test]
fn test_replayed_log_has_equal_digest() {
    let mut ws = Workspace::new();
    let log = {
        let mut controller = Controller::new(&mut ws);
        controller
            .apply(StandardLibraryBuilder::new().build())
            .unwrap();
        controller.into_log()
    };

    let rebuilt = replay(&log).unwrap();

    assert_eq!(
        workspace_digest(&rebuilt).unwrap(),
        workspace_digest(&ws).unwrap()
    );
    assert_eq!(rebuilt, ws);
}

#[test]
fn test_replay_through_json_log() {
    let mut ws = Workspace::new();
    let log = {
        let mut controller = Controller::new(&mut ws);
        controller.apply(chain().operations()).unwrap();
        controller.into_log()
    };

    let encoded = serde_json::to_string(&log).unwrap();
    let decoded: Vec<Operation> = serde_json::from_str(&encoded).unwrap();
    let rebuilt = replay(&decoded).unwrap();

    assert_eq!(rebuilt, ws);
}

#[test]
fn test_separate_producer_runs_share_digest() {
    let first = build(StandardLibraryBuilder::new().build());
    let second = build(StandardLibraryBuilder::new().build());

    assert_eq!(
        workspace_digest(&first).unwrap(),
        workspace_digest(&second).unwrap()
    );
}

#[test]
fn test_creation_order_changes_digest() {
    let a = LanguageElement::class("A");
    let b = LanguageElement::class("B");
    let forward = build(vec![
        Operation::new_node(a.clone(), None),
        Operation::new_node(b.clone(), None),
    ]);
    let backward = build(vec![Operation::new_node(b, None), Operation::new_node(a, None)]);

    assert_ne!(
        workspace_digest(&forward).unwrap(),
        workspace_digest(&backward).unwrap()
    );
}

#[test]
fn test_manifest_digest_ignores_stored_digest() {
    let ws = build(chain().operations());
    let mut manifest = generate_manifest(&ws).unwrap();
    let expected = manifest.digest.clone();

    manifest.digest = "tampered".to_string();

    assert_eq!(compute_manifest_digest(&manifest).unwrap(), expected);
}

#[test]
fn test_replay_of_invalid_log_reports_index() {
    let chain = chain();
    let log = vec![
        Operation::new_node(chain.library.clone(), Some(&chain.project)),
        Operation::new_node(chain.project.clone(), None),
    ];

    let err = replay(&log).unwrap_err();

    assert_eq!(err.operation_index(), Some(0));
}
