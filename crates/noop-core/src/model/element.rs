use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Producer-side token naming an element inside operations
///
/// Minted once when an element value is constructed. Operations refer to
/// parents and edge targets by key because those elements may not be
/// registered yet. The key is not the element's graph identity; that is the
/// positional [`ElementId`] assigned at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementKey(Uuid);

impl ElementKey {
    /// Mint a fresh key (UUID v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ElementKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positional identity of a registered element
///
/// The 0-based index of the element in its workspace's creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(usize);

impl ElementId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the position as a plain index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant of a language element, with the attributes specific to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    /// Top-level unit that owns libraries
    Project { namespace: String, license: String },
    Library,
    Class,
    /// A method or free-standing block, with an optional return type
    Block { return_type: Option<ElementKey> },
    Parameter,
}

impl ElementKind {
    /// Stable lowercase tag for this variant
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Project { .. } => "project",
            ElementKind::Library => "library",
            ElementKind::Class => "class",
            ElementKind::Block { .. } => "block",
            ElementKind::Parameter => "parameter",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ElementKind::Project { .. } => "Project",
            ElementKind::Library => "Library",
            ElementKind::Class => "Class",
            ElementKind::Block { .. } => "Block",
            ElementKind::Parameter => "Parameter",
        }
    }
}

/// A node in the program's structural graph
///
/// Elements are plain values: constructing one does not place it in any
/// workspace. Only a `NewNode` operation registers it. All state is
/// read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageElement {
    key: ElementKey,
    name: String,
    kind: ElementKind,
}

impl LanguageElement {
    fn with_kind(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            key: ElementKey::new(),
            name: name.into(),
            kind,
        }
    }

    /// Create a project element
    pub fn project(
        name: impl Into<String>,
        namespace: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            ElementKind::Project {
                namespace: namespace.into(),
                license: license.into(),
            },
        )
    }

    /// Create a library element
    pub fn library(name: impl Into<String>) -> Self {
        Self::with_kind(name, ElementKind::Library)
    }

    /// Create a class element
    pub fn class(name: impl Into<String>) -> Self {
        Self::with_kind(name, ElementKind::Class)
    }

    /// Create a block (method) element
    ///
    /// `return_type` records a reference to the element naming the block's
    /// result type, if it has one.
    pub fn block(name: impl Into<String>, return_type: Option<&LanguageElement>) -> Self {
        Self::with_kind(
            name,
            ElementKind::Block {
                return_type: return_type.map(LanguageElement::key),
            },
        )
    }

    /// Create a parameter element
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::with_kind(name, ElementKind::Parameter)
    }

    pub fn key(&self) -> ElementKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Shorthand for `self.kind().tag()`
    pub fn kind_tag(&self) -> &'static str {
        self.kind.tag()
    }
}

impl fmt::Display for LanguageElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_elements_have_distinct_keys() {
        let a = LanguageElement::class("String");
        let b = LanguageElement::class("String");

        assert_ne!(a.key(), b.key());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_clone_keeps_key() {
        let lib = LanguageElement::library("lang");
        let copy = lib.clone();
        assert_eq!(lib.key(), copy.key());
    }

    #[test]
    fn test_project_attributes() {
        let project = LanguageElement::project("Noop", "com.google.noop", "Apache 2");

        match project.kind() {
            ElementKind::Project { namespace, license } => {
                assert_eq!(namespace, "com.google.noop");
                assert_eq!(license, "Apache 2");
            }
            other => panic!("Wrong element kind: {:?}", other),
        }
        assert_eq!(project.kind_tag(), "project");
    }

    #[test]
    fn test_block_return_type_reference() {
        let string = LanguageElement::class("String");
        let to_string = LanguageElement::block("toString", Some(&string));
        let print = LanguageElement::block("print", None);

        assert_eq!(
            to_string.kind(),
            &ElementKind::Block {
                return_type: Some(string.key())
            }
        );
        assert_eq!(print.kind(), &ElementKind::Block { return_type: None });
    }

    #[test]
    fn test_display() {
        assert_eq!(LanguageElement::library("io").to_string(), "Library io");
        assert_eq!(LanguageElement::parameter("s").to_string(), "Parameter s");
        assert_eq!(
            LanguageElement::block("print", None).to_string(),
            "Block print"
        );
    }
}
