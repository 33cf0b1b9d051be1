//! Error types for the graphkit library.

use thiserror::Error;

use super::Label;

/// All errors that can occur in the graphkit library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An operation referenced a node that is not in the graph.
    #[error("Unknown node label: {0}")]
    UnknownLabel(Label),

    /// An argument was rejected (e.g. a missing weight on a weighted graph).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The iterator kind does not support the requested operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A random-access iterator has no outgoing edge to a different node.
    #[error("No traversable edge leaves node {0}")]
    NoTraversableEdge(Label),

    /// The iterator has no further position in the requested direction.
    #[error("Traversal has no further position")]
    EndOfTraversal,

    /// Every u32 label is in use.
    #[error("Label space exhausted")]
    LabelSpaceExhausted,

    /// A payload or weight refused to be duplicated.
    #[error("Clone failure: {0}")]
    CloneFailure(String),

    /// Invalid magic bytes at the start of a serialized graph.
    #[error("Bad magic number: {0:02x?}")]
    BadMagicNumber([u8; 4]),

    /// The stream ended before the graph was fully read.
    #[error("Stream is empty or truncated")]
    TruncatedStream,

    /// Structurally invalid serialized data.
    #[error("Corrupt data: {0}")]
    Corrupt(String),

    /// A payload or weight codec rejected its input.
    #[error("Codec error: {0}")]
    Codec(String),

    /// Compression error.
    #[error("Compression error: {0}")]
    Compression(String),

    /// Configuration could not be parsed or written.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graphkit operations.
pub type GraphResult<T> = Result<T, GraphError>;
