//! Structural snapshots of a workspace
//!
//! This module provides a canonical manifest of a workspace's structure and
//! a deterministic digest over it.
//!
//! ## Responsibilities
//!
//! - Generate canonical manifests (elements in id order, edges in order)
//! - Compute deterministic digests for replay checks
//!
//! ## Non-Responsibilities
//!
//! - Persistence of manifests or operation logs

pub mod digest;
pub mod manifest;

pub use digest::{compute_manifest_digest, workspace_digest};
pub use manifest::{generate_manifest, EdgeEntry, ElementEntry, TypeRef, WorkspaceManifest};
