//! graphkit: a generic in-memory graph engine.
//!
//! Directed or undirected, weighted or unweighted graphs with labelled nodes,
//! live and snapshot traversal iterators, identity-breaking duplication and a
//! compact binary format with pluggable payload codecs.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod traversal;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{EngineConfig, FormatConfig, GraphDefaults};
pub use format::{
    BytesCodec, Codec, FnCodec, GraphSerializer, JsonCodec, Lz4Codec, NumberCodec, Utf8Codec,
};
pub use graph::{Graph, GraphBuilder, LabelAllocator};
pub use traversal::{
    BreadthFirstIterator, DepthFirstIterator, GraphIterator, RandomAccessIterator,
    SnapshotIterator, TraversalOrder,
};
pub use types::{
    Duplicate, Edge, EdgeFactory, EdgeId, FileHeader, GraphError, GraphResult, Label, Node,
    Number, Weight, GRAPH_MAGIC,
};
