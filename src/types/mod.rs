//! All data types for the graphkit library.

pub mod duplicate;
pub mod edge;
pub mod error;
pub mod header;
pub mod node;
pub mod weight;

pub use duplicate::Duplicate;
pub use edge::{Edge, EdgeFactory, EdgeId};
pub use error::{GraphError, GraphResult};
pub use header::{FileHeader, HEADER_SIZE};
pub use node::Node;
pub use weight::{Number, Weight};

/// Identifier of a node within one graph.
pub type Label = u32;

/// Magic bytes at the start of every serialized graph.
pub const GRAPH_MAGIC: [u8; 4] = [0x47, 0x52, 0x50, 0x48]; // "GRPH"
