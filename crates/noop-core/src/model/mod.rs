pub mod edge;
pub mod element;

pub use edge::{Edge, EdgeKind};
pub use element::{ElementId, ElementKey, ElementKind, LanguageElement};
