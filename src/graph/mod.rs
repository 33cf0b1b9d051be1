//! In-memory graph storage and construction.

pub mod builder;
pub mod labels;
pub mod store;

pub use builder::GraphBuilder;
pub use labels::LabelAllocator;
pub use store::Graph;
