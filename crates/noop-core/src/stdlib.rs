//! Standard library producer
//!
//! Emits the build recipe for the Noop standard library: the project, its
//! `lang` and `io` libraries, and the core classes other producers refer to.

use crate::model::{EdgeKind, ElementKey, LanguageElement};
use crate::operation::{Operation, OperationSource};

/// Builds the operation list for the standard library
///
/// After `build`, the keys of the well-known elements are available so that
/// later producers can contain or type new elements against them.
#[derive(Debug, Default)]
pub struct StandardLibraryBuilder {
    string_class: Option<ElementKey>,
    integer_class: Option<ElementKey>,
    console_class: Option<ElementKey>,
    print_method: Option<ElementKey>,
}

impl StandardLibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `lang.String`, once built
    pub fn string_class(&self) -> Option<ElementKey> {
        self.string_class
    }

    /// `lang.Integer`, once built
    pub fn integer_class(&self) -> Option<ElementKey> {
        self.integer_class
    }

    /// `io.Console`, once built
    pub fn console_class(&self) -> Option<ElementKey> {
        self.console_class
    }

    /// `io.Console.print`, once built
    pub fn print_method(&self) -> Option<ElementKey> {
        self.print_method
    }
}

impl OperationSource for StandardLibraryBuilder {
    fn build(&mut self) -> Vec<Operation> {
        let mut result = Vec::new();

        let project = LanguageElement::project("Noop", "com.google.noop", "Apache 2");
        result.push(Operation::new_node(project.clone(), None));

        let lang = LanguageElement::library("lang");
        result.push(Operation::new_node(lang.clone(), Some(&project)));

        let string = LanguageElement::class("String");
        result.push(Operation::new_node(string.clone(), Some(&lang)));

        let io = LanguageElement::library("io");
        result.push(Operation::new_node(io.clone(), Some(&project)));

        let console = LanguageElement::class("Console");
        result.push(Operation::new_node(console.clone(), Some(&io)));

        let print = LanguageElement::block("print", None);
        result.push(Operation::new_node(print.clone(), Some(&console)));

        let print_arg = LanguageElement::parameter("s");
        result.push(Operation::new_node_with_edge(
            print_arg,
            Some(&print),
            EdgeKind::TypeOf,
            &string,
        ));

        let integer = LanguageElement::class("Integer");
        result.push(Operation::new_node(integer.clone(), Some(&lang)));

        self.string_class = Some(string.key());
        self.integer_class = Some(integer.key());
        self.console_class = Some(console.key());
        self.print_method = Some(print.key());

        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::controller::Controller;
    use crate::ops::Workspace;

    #[test]
    fn test_build_emits_eight_operations() {
        let mut builder = StandardLibraryBuilder::new();
        assert!(builder.string_class().is_none());

        let ops = builder.build();

        assert_eq!(ops.len(), 8);
        assert!(builder.string_class().is_some());
        assert!(builder.print_method().is_some());
    }

    #[test]
    fn test_stdlib_applies_cleanly() {
        let mut builder = StandardLibraryBuilder::new();
        let ops = builder.build();
        let mut ws = Workspace::new();

        Controller::new(&mut ws).apply(ops).unwrap();

        assert_eq!(ws.len(), 8);
        assert_eq!(ws.roots().len(), 1);

        let string = builder.string_class().unwrap();
        let typed = ws.children_of(string, EdgeKind::TypeOf).unwrap();
        assert_eq!(typed.len(), 1);
        assert_eq!(typed[0].name(), "s");

        let lang_children: Vec<&str> = ws
            .children_of(ws.parent_of(string).unwrap().unwrap().key(), EdgeKind::Contains)
            .unwrap()
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(lang_children, vec!["String", "Integer"]);
    }
}
