//! Traversal iterators over a [`Graph`].
//!
//! Iterators never borrow the graph: every step takes the graph as an
//! argument, so the graph may be mutated between steps. What a mutation means
//! for an iterator depends on its kind:
//!
//! - [`RandomAccessIterator`] is a **live** view. Each call re-reads the
//!   graph's current adjacency, so nodes and edges added or removed after the
//!   iterator was created are visible on the next step.
//! - [`DepthFirstIterator`] and [`BreadthFirstIterator`] are **snapshots**. The
//!   visitation order is computed once at construction and never changes;
//!   later mutations only affect what payload/edge queries report for the
//!   labels in that fixed order.

pub mod breadth_first;
pub mod depth_first;
pub mod random_access;
pub mod snapshot;

pub use breadth_first::{BreadthFirst, BreadthFirstIterator};
pub use depth_first::{DepthFirst, DepthFirstIterator};
pub use random_access::RandomAccessIterator;
pub use snapshot::{SnapshotIterator, TraversalOrder};

use crate::graph::Graph;
use crate::types::{Edge, GraphResult, Label, Number};

/// The interface graph algorithms consume, shared by every iterator kind.
pub trait GraphIterator<T, N: Number> {
    /// Label of the node the iterator is positioned on.
    fn label(&self) -> Label;

    /// Whether [`next`](Self::next) can make progress.
    fn has_next(&self, graph: &Graph<T, N>) -> bool;

    /// Advance to the next node and return its label.
    fn next(&mut self, graph: &Graph<T, N>) -> GraphResult<Label>;

    /// Jump forward to a specific node.
    fn next_to(&mut self, graph: &Graph<T, N>, target: Label) -> GraphResult<Label>;

    /// Return to the previous position.
    fn back(&mut self, graph: &Graph<T, N>) -> GraphResult<Label>;

    /// Jump back to a specific node.
    fn back_to(&mut self, graph: &Graph<T, N>, target: Label) -> GraphResult<Label>;

    /// Payload of the current node.
    fn payload<'g>(&self, graph: &'g Graph<T, N>) -> GraphResult<&'g T> {
        Ok(graph.require(self.label())?.payload())
    }

    /// Edges leaving the current node.
    fn edges_departing_self<'g>(&self, graph: &'g Graph<T, N>) -> GraphResult<Vec<&'g Edge<N>>> {
        graph.edges_departing(self.label())
    }

    /// Edges arriving at the current node.
    fn edges_arriving_self<'g>(&self, graph: &'g Graph<T, N>) -> GraphResult<Vec<&'g Edge<N>>> {
        graph.edges_arriving(self.label())
    }

    /// Every edge touching the current node, each once.
    fn all_adjacent_edges<'g>(&self, graph: &'g Graph<T, N>) -> GraphResult<Vec<&'g Edge<N>>> {
        graph.adjacent_edges(self.label())
    }

    /// The edge joining the current node and `other`, in either direction.
    fn adjacent_edge<'g>(
        &self,
        graph: &'g Graph<T, N>,
        other: Label,
    ) -> GraphResult<Option<&'g Edge<N>>> {
        graph.edge_between(self.label(), other)
    }

    /// Attribute `key` of the current node.
    fn attribute<'g>(&self, graph: &'g Graph<T, N>, key: &str) -> GraphResult<Option<&'g str>> {
        graph.attribute(self.label(), key)
    }

    /// Set attribute `key` of the current node, returning the previous value.
    fn set_attribute(
        &self,
        graph: &mut Graph<T, N>,
        key: &str,
        value: &str,
    ) -> GraphResult<Option<String>> {
        graph.set_attribute(self.label(), key, value)
    }
}
