// Property tests over randomly shaped build recipes
//
// Each recipe creates elements in order; element i optionally names an
// earlier element as its parent and another earlier element as a type.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{build, RecordingVisitor};
use noop_core::{
    walk, Controller, EdgeKind, GraphError, LanguageElement, Operation, Workspace,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Step {
    kind: u8,
    parent: Option<usize>,
    type_of: Option<usize>,
}

fn steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        (0u8..4, prop::option::of(any::<usize>()), prop::option::of(any::<usize>())),
        0..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (kind, parent, type_of))| Step {
                kind,
                // Only earlier elements can be referenced
                parent: parent.filter(|_| i > 0).map(|p| p % i.max(1)),
                type_of: type_of.filter(|_| i > 0).map(|t| t % i.max(1)),
            })
            .collect()
    })
}

fn element(i: usize, kind: u8) -> LanguageElement {
    let name = format!("e{}", i);
    match kind {
        0 => LanguageElement::library(name),
        1 => LanguageElement::class(name),
        2 => LanguageElement::block(name, None),
        _ => LanguageElement::parameter(name),
    }
}

fn recipe(steps: &[Step]) -> (Vec<LanguageElement>, Vec<Operation>) {
    let elements: Vec<LanguageElement> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| element(i, step.kind))
        .collect();

    let ops = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let parent = step.parent.map(|p| &elements[p]);
            match step.type_of {
                Some(t) => Operation::new_node_with_edge(
                    elements[i].clone(),
                    parent,
                    EdgeKind::TypeOf,
                    &elements[t],
                ),
                None => Operation::new_node(elements[i].clone(), parent),
            }
        })
        .collect();

    (elements, ops)
}

proptest! {
    #[test]
    fn prop_ids_follow_creation_order(steps in steps()) {
        let (elements, ops) = recipe(&steps);
        let ws = build(ops);

        prop_assert_eq!(ws.len(), elements.len());
        for (i, element) in elements.iter().enumerate() {
            let id = ws.id_for(element.key()).unwrap();
            prop_assert_eq!(id.index(), i);
            prop_assert_eq!(ws.id_for(element.key()).unwrap(), id);
            prop_assert_eq!(ws.get(id).map(|e| e.key()), Some(element.key()));
        }
    }

    #[test]
    fn prop_edges_never_reference_later_elements(steps in steps()) {
        let (_, ops) = recipe(&steps);
        let mut ws = Workspace::new();
        let mut controller = Controller::new(&mut ws);

        for op in ops {
            let edges_before = controller.workspace().edges().len();
            controller.apply_one(op).unwrap();
            let registered = controller.workspace().len();
            for edge in &controller.workspace().edges()[edges_before..] {
                prop_assert!(edge.source().index() < registered);
                prop_assert!(edge.target().index() < registered);
            }
        }
    }

    #[test]
    fn prop_containment_is_a_forest(steps in steps()) {
        let (elements, ops) = recipe(&steps);
        let ws = build(ops);

        let expected_roots = steps.iter().filter(|s| s.parent.is_none()).count();
        prop_assert_eq!(ws.roots().len(), expected_roots);
        for (i, step) in steps.iter().enumerate() {
            let parent = ws.parent_of(elements[i].key()).unwrap().map(|p| p.key());
            prop_assert_eq!(parent, step.parent.map(|p| elements[p].key()));
        }
    }

    #[test]
    fn prop_traversal_depth_is_balanced(steps in steps()) {
        let (elements, ops) = recipe(&steps);
        let ws = build(ops);
        let mut visitor = RecordingVisitor::default();

        let stats = walk(&ws, &mut visitor).unwrap();

        prop_assert_eq!(stats.visited, elements.len());
        prop_assert_eq!(visitor.visits.len(), 2 * elements.len());

        let mut open: Vec<(usize, usize)> = Vec::new();
        for visit in &visitor.visits {
            if visit.entering {
                prop_assert_eq!(visit.depth, open.len());
                open.push((visit.id, visit.depth));
            } else {
                prop_assert_eq!(open.pop(), Some((visit.id, visit.depth)));
            }
        }
        prop_assert!(open.is_empty());
    }

    #[test]
    fn prop_forward_reference_fails_at_its_index(steps in steps(), pick in any::<usize>()) {
        prop_assume!(steps.len() >= 2);
        let (elements, mut ops) = recipe(&steps);
        let at = pick % (steps.len() - 1);
        let later = &elements[steps.len() - 1];
        ops[at] = Operation::new_node(elements[at].clone(), Some(later));

        let mut ws = Workspace::new();
        let err = Controller::new(&mut ws).apply(ops).unwrap_err();

        prop_assert_eq!(err.operation_index(), Some(at));
        let is_dangling = matches!(err.root_cause(), GraphError::DanglingReference { .. });
        prop_assert!(is_dangling);
        prop_assert_eq!(ws.len(), at);
    }
}
