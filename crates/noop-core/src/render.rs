//! Rendering consumers built on the visitor protocol
//!
//! Both renderers only see what `walk` hands them: elements and a
//! traversal context.

pub mod dot;
pub mod outline;

pub use dot::{render_dot, DotVisitor};
pub use outline::{render_outline, OutlineVisitor};
