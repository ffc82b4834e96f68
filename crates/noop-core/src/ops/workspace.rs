use std::collections::HashMap;

use crate::errors::{GraphError, ReferenceRole, Result};
use crate::model::{Edge, EdgeKind, ElementId, ElementKey, LanguageElement};

/// The live structural graph
///
/// An arena of every element ever registered, in creation order, plus the
/// edges among them in recording order. Registration order is positional
/// identity: the element at index `n` has `ElementId(n)` for the lifetime of
/// the workspace.
///
/// Not thread-safe for mutation - a `Controller` holds the only `&mut`
/// during a build phase. Read-only traversals can share `&Workspace`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    elements: Vec<LanguageElement>,
    edges: Vec<Edge>,
    /// Key to positional id
    index: HashMap<ElementKey, ElementId>,
    /// Per element, indices into `edges` where it is the target
    incoming: Vec<Vec<usize>>,
    /// Per element, indices into `edges` where it is the source
    outgoing: Vec<Vec<usize>>,
}

impl Workspace {
    /// Create a new empty Workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element, returning its positional id
    ///
    /// The id equals the number of elements registered before this one.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegistration` if an element with the same key is
    /// already registered.
    pub fn register(&mut self, element: LanguageElement) -> Result<ElementId> {
        let key = element.key();
        if self.index.contains_key(&key) {
            return Err(GraphError::DuplicateRegistration {
                key,
                name: element.name().to_string(),
            });
        }

        let id = ElementId::new(self.elements.len());
        self.elements.push(element);
        self.incoming.push(Vec::new());
        self.outgoing.push(Vec::new());
        self.index.insert(key, id);

        Ok(id)
    }

    /// Record an edge between two registered elements
    ///
    /// Containment edges point from child to parent and must keep the
    /// containment relation a forest.
    ///
    /// # Errors
    ///
    /// * `DanglingReference` - If either endpoint is not registered
    /// * `MultipleParents` - If a `Contains` source already has a parent
    /// * `CycleDetected` - If a `Contains` edge would close a cycle
    pub fn link(&mut self, source: ElementKey, kind: EdgeKind, target: ElementKey) -> Result<()> {
        let source_id = self.resolve(source, ReferenceRole::EdgeSource)?;
        let target_id = self.resolve(target, ReferenceRole::EdgeTarget)?;

        if kind == EdgeKind::Contains {
            if self.parent_id(source_id).is_some() {
                return Err(GraphError::MultipleParents { key: source });
            }

            // Walk up from the new parent; reaching the child means a cycle
            let mut current = Some(target_id);
            while let Some(id) = current {
                if id == source_id {
                    return Err(GraphError::CycleDetected { key: source });
                }
                current = self.parent_id(id);
            }
        }

        let edge_index = self.edges.len();
        self.edges.push(Edge::new(source_id, kind, target_id));
        self.outgoing[source_id.index()].push(edge_index);
        self.incoming[target_id.index()].push(edge_index);

        Ok(())
    }

    /// Look up the positional id of a registered element
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if the element was never registered.
    pub fn id_for(&self, key: ElementKey) -> Result<ElementId> {
        self.index
            .get(&key)
            .copied()
            .ok_or(GraphError::UnknownElement { key })
    }

    /// Elements whose `kind` edge points at `key`, in edge-creation order
    ///
    /// For `EdgeKind::Contains` these are the contained children.
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if `key` is not registered.
    pub fn children_of(&self, key: ElementKey, kind: EdgeKind) -> Result<Vec<&LanguageElement>> {
        let id = self.id_for(key)?;
        Ok(self
            .child_ids(id, kind)
            .map(|child| &self.elements[child.index()])
            .collect())
    }

    /// Elements that `key` points at through `kind` edges, in edge-creation order
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if `key` is not registered.
    pub fn targets_of(&self, key: ElementKey, kind: EdgeKind) -> Result<Vec<&LanguageElement>> {
        let id = self.id_for(key)?;
        Ok(self.outgoing[id.index()]
            .iter()
            .map(|&e| self.edges[e])
            .filter(|edge| edge.kind() == kind)
            .map(|edge| &self.elements[edge.target().index()])
            .collect())
    }

    /// The containing parent of `key`, if any
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if `key` is not registered.
    pub fn parent_of(&self, key: ElementKey) -> Result<Option<&LanguageElement>> {
        let id = self.id_for(key)?;
        Ok(self
            .parent_id(id)
            .map(|parent| &self.elements[parent.index()]))
    }

    /// Elements with no containing parent, in creation order
    pub fn roots(&self) -> Vec<&LanguageElement> {
        self.root_ids()
            .map(|id| &self.elements[id.index()])
            .collect()
    }

    /// Get an element by positional id
    pub fn get(&self, id: ElementId) -> Option<&LanguageElement> {
        self.elements.get(id.index())
    }

    /// Get a registered element by key
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if `key` is not registered.
    pub fn element(&self, key: ElementKey) -> Result<&LanguageElement> {
        let id = self.id_for(key)?;
        Ok(&self.elements[id.index()])
    }

    /// All elements in creation order
    pub fn elements(&self) -> &[LanguageElement] {
        &self.elements
    }

    /// All edges in recording order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check whether an element key is registered
    pub fn contains(&self, key: ElementKey) -> bool {
        self.index.contains_key(&key)
    }

    /// Resolve a key for use as a reference in an operation
    pub(crate) fn resolve(&self, key: ElementKey, role: ReferenceRole) -> Result<ElementId> {
        self.index
            .get(&key)
            .copied()
            .ok_or(GraphError::DanglingReference { role, key })
    }

    pub(crate) fn parent_id(&self, id: ElementId) -> Option<ElementId> {
        self.outgoing[id.index()]
            .iter()
            .map(|&e| self.edges[e])
            .find(|edge| edge.kind() == EdgeKind::Contains)
            .map(|edge| edge.target())
    }

    pub(crate) fn child_ids(
        &self,
        id: ElementId,
        kind: EdgeKind,
    ) -> impl Iterator<Item = ElementId> + '_ {
        self.incoming[id.index()]
            .iter()
            .map(|&e| self.edges[e])
            .filter(move |edge| edge.kind() == kind)
            .map(|edge| edge.source())
    }

    pub(crate) fn root_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len())
            .map(ElementId::new)
            .filter(|&id| self.parent_id(id).is_none())
    }
}
