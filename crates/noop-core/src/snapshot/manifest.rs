//! Workspace manifest generation and schema.
//!
//! A manifest is the canonical, key-free description of a workspace's
//! structure. Element keys are producer-minted and differ between two runs
//! of the same producer, so they are left out: two workspaces built from the
//! same recipe have equal manifests.
//!
//! ## Schema Version
//!
//! Current manifest schema version: **1**

use serde::{Deserialize, Serialize};

use super::digest::compute_manifest_digest;
use crate::errors::Result;
use crate::model::{ElementKind, LanguageElement};
use crate::ops::Workspace;

pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Manifest schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceManifest {
    /// Manifest schema version (currently 1)
    pub manifest_schema_version: u32,

    /// Elements in positional id order
    pub elements: Vec<ElementEntry>,

    /// Edges in recording order
    pub edges: Vec<EdgeEntry>,

    /// Digest over every other field; empty while it is being computed
    pub digest: String,
}

/// One element, described by position instead of key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementEntry {
    pub id: usize,
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
}

/// Reference from a block to its return type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// The type is registered in this workspace at the given id
    Local(usize),
    /// The type was named by key but is not registered here
    External,
}

/// One edge, by positional ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeEntry {
    pub source: usize,
    pub kind: String,
    pub target: usize,
}

fn element_entry(workspace: &Workspace, id: usize, element: &LanguageElement) -> ElementEntry {
    let mut entry = ElementEntry {
        id,
        kind: element.kind_tag().to_string(),
        name: element.name().to_string(),
        namespace: None,
        license: None,
        return_type: None,
    };

    match element.kind() {
        ElementKind::Project { namespace, license } => {
            entry.namespace = Some(namespace.clone());
            entry.license = Some(license.clone());
        }
        ElementKind::Block { return_type } => {
            entry.return_type = return_type.map(|key| match workspace.id_for(key) {
                Ok(id) => TypeRef::Local(id.index()),
                Err(_) => TypeRef::External,
            });
        }
        ElementKind::Library | ElementKind::Class | ElementKind::Parameter => {}
    }

    entry
}

/// Generate a manifest for the current workspace state.
///
/// ## Errors
///
/// Returns `GraphError::Serialization` if digest computation fails.
pub fn generate_manifest(workspace: &Workspace) -> Result<WorkspaceManifest> {
    let elements = workspace
        .elements()
        .iter()
        .enumerate()
        .map(|(id, element)| element_entry(workspace, id, element))
        .collect();

    let edges = workspace
        .edges()
        .iter()
        .map(|edge| EdgeEntry {
            source: edge.source().index(),
            kind: edge.kind().to_string(),
            target: edge.target().index(),
        })
        .collect();

    let mut manifest = WorkspaceManifest {
        manifest_schema_version: MANIFEST_SCHEMA_VERSION,
        elements,
        edges,
        digest: String::new(),
    };
    manifest.digest = compute_manifest_digest(&manifest)?;

    Ok(manifest)
}
