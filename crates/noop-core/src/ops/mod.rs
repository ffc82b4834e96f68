pub mod edge_ops;
pub mod node_ops;
pub mod workspace;

pub use workspace::Workspace;
