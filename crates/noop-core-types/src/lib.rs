//! Core types shared across Noop facilities
//!
//! This crate provides foundational types used by both the graph kernel
//! and its logging facility:
//!
//! - **Correlation types**: BuildId for tagging one controller build phase
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::BuildId;
