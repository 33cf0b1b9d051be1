//! Iterators over a visitation order fixed at construction time.

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, Label, Number};

use super::GraphIterator;

/// A strategy that walks the graph from a start node.
pub trait TraversalOrder {
    /// Labels reachable from `start` in visitation order, each once.
    ///
    /// `start` is known to exist when this is called.
    fn walk<T, N: Number>(graph: &Graph<T, N>, start: Label) -> Vec<Label>;
}

/// Iterator over a precomputed visitation order.
///
/// The order is materialised by `O` when the iterator is created and is never
/// recomputed, so later graph mutations do not change which labels are
/// visited or in what order.
#[derive(Debug, Clone)]
pub struct SnapshotIterator<O> {
    order: Vec<Label>,
    position: usize,
    _order: PhantomData<O>,
}

impl<O: TraversalOrder> SnapshotIterator<O> {
    /// Walk from `start`; with `include_disconnected`, append every node the
    /// walk missed in ascending label order.
    pub fn new<T, N: Number>(
        graph: &Graph<T, N>,
        start: Label,
        include_disconnected: bool,
    ) -> GraphResult<Self> {
        graph.require(start)?;
        let mut order = O::walk(graph, start);

        if include_disconnected && order.len() < graph.size() {
            let reached: HashSet<Label> = order.iter().copied().collect();
            order.extend(graph.labels().filter(|l| !reached.contains(l)));
        }

        log::debug!(
            "Snapshot traversal from {}: {} of {} nodes",
            start,
            order.len(),
            graph.size()
        );

        Ok(Self {
            order,
            position: 0,
            _order: PhantomData,
        })
    }

    /// Label at the current position.
    pub fn label(&self) -> Label {
        self.order[self.position]
    }

    /// The full visitation order.
    pub fn order(&self) -> &[Label] {
        &self.order
    }

    /// Index of the current label within [`order`](Self::order).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Labels after the current one.
    pub fn remaining(&self) -> &[Label] {
        &self.order[self.position + 1..]
    }
}

impl<T, N: Number, O: TraversalOrder> GraphIterator<T, N> for SnapshotIterator<O> {
    fn label(&self) -> Label {
        self.order[self.position]
    }

    fn has_next(&self, _graph: &Graph<T, N>) -> bool {
        self.position + 1 < self.order.len()
    }

    fn next(&mut self, _graph: &Graph<T, N>) -> GraphResult<Label> {
        if self.position + 1 >= self.order.len() {
            return Err(GraphError::EndOfTraversal);
        }
        self.position += 1;
        Ok(self.order[self.position])
    }

    fn next_to(&mut self, _graph: &Graph<T, N>, _target: Label) -> GraphResult<Label> {
        Err(GraphError::UnsupportedOperation(
            "snapshot iterators cannot jump to a node",
        ))
    }

    fn back(&mut self, _graph: &Graph<T, N>) -> GraphResult<Label> {
        if self.position == 0 {
            return Err(GraphError::EndOfTraversal);
        }
        self.position -= 1;
        Ok(self.order[self.position])
    }

    fn back_to(&mut self, _graph: &Graph<T, N>, _target: Label) -> GraphResult<Label> {
        Err(GraphError::UnsupportedOperation(
            "snapshot iterators cannot jump back to a node",
        ))
    }
}
