//! Digest computation for workspace manifests.
//!
//! ## Determinism Guarantees
//!
//! - Same structure → same digest (canonical JSON serialization)
//! - Different creation or edge order → different digest
//! - Element keys never contribute, so rebuilding from a fresh producer run
//!   yields the same digest

use sha2::{Digest, Sha256};

use super::manifest::{generate_manifest, WorkspaceManifest};
use crate::errors::Result;
use crate::ops::Workspace;

/// Compute the digest of a manifest, ignoring its own `digest` field.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `GraphError::Serialization` if JSON serialization fails.
pub fn compute_manifest_digest(manifest: &WorkspaceManifest) -> Result<String> {
    let mut manifest_copy = manifest.clone();
    manifest_copy.digest = String::new();

    let canonical = serde_json::to_string(&manifest_copy)?;
    Ok(hash_string(&canonical))
}

/// Compute the structural digest of a workspace.
///
/// ## Errors
///
/// Returns `GraphError::Serialization` if JSON serialization fails.
///
/// ## Example
///
/// ```
/// use noop_core::{snapshot::workspace_digest, Workspace};
///
/// let digest = workspace_digest(&Workspace::new()).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn workspace_digest(workspace: &Workspace) -> Result<String> {
    Ok(generate_manifest(workspace)?.digest)
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
