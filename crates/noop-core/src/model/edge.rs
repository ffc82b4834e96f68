use serde::{Deserialize, Serialize};
use std::fmt;

use super::element::ElementId;

/// The type of relationship an edge records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Containment back-reference: the source is contained by the target
    Contains,

    /// The source element is typed by the target element
    TypeOf,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Contains => "contains",
            Self::TypeOf => "type_of",
        };
        write!(f, "{}", s)
    }
}

/// A directed, typed relationship between two registered elements
///
/// Edges are recorded by the workspace and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    source: ElementId,
    kind: EdgeKind,
    target: ElementId,
}

impl Edge {
    pub(crate) fn new(source: ElementId, kind: EdgeKind, target: ElementId) -> Self {
        Self {
            source,
            kind,
            target,
        }
    }

    pub fn source(&self) -> ElementId {
        self.source
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn target(&self) -> ElementId {
        self.target
    }
}
