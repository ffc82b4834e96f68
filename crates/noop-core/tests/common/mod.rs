use noop_core::{
    Controller, LanguageElement, ModelVisitor, Operation, Result, TraversalContext, Workspace,
};

/// Project, library and class elements for the three-level chain scenario
#[allow(dead_code)]
pub struct Chain {
    pub project: LanguageElement,
    pub library: LanguageElement,
    pub class: LanguageElement,
}

/// Create the `Noop` project, `lang` library and `String` class elements
#[allow(dead_code)]
pub fn chain() -> Chain {
    Chain {
        project: LanguageElement::project("Noop", "com.google.noop", "Apache 2"),
        library: LanguageElement::library("lang"),
        class: LanguageElement::class("String"),
    }
}

impl Chain {
    /// Operations that build project > library > class
    #[allow(dead_code)]
    pub fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new_node(self.project.clone(), None),
            Operation::new_node(self.library.clone(), Some(&self.project)),
            Operation::new_node(self.class.clone(), Some(&self.library)),
        ]
    }
}

/// Apply operations to a fresh workspace, panicking on failure
#[allow(dead_code)]
pub fn build(ops: Vec<Operation>) -> Workspace {
    let mut workspace = Workspace::new();
    Controller::new(&mut workspace)
        .apply(ops)
        .expect("operations should apply");
    workspace
}

/// One recorded visitor callback
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub entering: bool,
    pub name: String,
    pub depth: usize,
    pub id: usize,
}

/// Visitor that records every callback in order
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingVisitor {
    pub visits: Vec<Visit>,
}

impl RecordingVisitor {
    #[allow(dead_code)]
    fn record(
        &mut self,
        entering: bool,
        element: &LanguageElement,
        cx: &TraversalContext<'_>,
    ) -> Result<()> {
        self.visits.push(Visit {
            entering,
            name: element.name().to_string(),
            depth: cx.depth(),
            id: cx.id_for(element)?.index(),
        });
        Ok(())
    }

    /// `(name, depth)` pairs in callback order
    #[allow(dead_code)]
    pub fn names_and_depths(&self) -> Vec<(&str, usize)> {
        self.visits
            .iter()
            .map(|v| (v.name.as_str(), v.depth))
            .collect()
    }
}

impl ModelVisitor for RecordingVisitor {
    fn enter(&mut self, element: &LanguageElement, cx: &TraversalContext<'_>) -> Result<()> {
        self.record(true, element, cx)
    }

    fn leave(&mut self, element: &LanguageElement, cx: &TraversalContext<'_>) -> Result<()> {
        self.record(false, element, cx)
    }
}
