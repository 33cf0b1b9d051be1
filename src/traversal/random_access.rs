//! Live cursor over a graph.

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, Label, Number};

use super::GraphIterator;

/// A cursor that can move to any node and always reads the graph's current state.
#[derive(Debug, Clone)]
pub struct RandomAccessIterator {
    current: Label,
    history: Vec<Label>,
}

impl RandomAccessIterator {
    /// Position a cursor on `label`.
    pub fn new<T, N: Number>(graph: &Graph<T, N>, label: Label) -> GraphResult<Self> {
        graph.require(label)?;
        Ok(Self {
            current: label,
            history: Vec::new(),
        })
    }

    /// Label of the node under the cursor.
    pub fn label(&self) -> Label {
        self.current
    }

    /// Previously visited positions, oldest first.
    pub fn history(&self) -> &[Label] {
        &self.history
    }

    fn jump<T, N: Number>(&mut self, graph: &Graph<T, N>, target: Label) -> GraphResult<Label> {
        graph.require(target)?;
        self.history.push(self.current);
        self.current = target;
        Ok(target)
    }
}

impl<T, N: Number> GraphIterator<T, N> for RandomAccessIterator {
    fn label(&self) -> Label {
        self.current
    }

    fn has_next(&self, graph: &Graph<T, N>) -> bool {
        graph
            .node(self.current)
            .is_some_and(|node| node.out_degree() > 0)
    }

    /// Move to the smallest-labelled outgoing neighbor other than the current node.
    ///
    /// Self-loops are never followed; a node whose only outgoing edges are
    /// self-loops yields `NoTraversableEdge`.
    fn next(&mut self, graph: &Graph<T, N>) -> GraphResult<Label> {
        let current = self.current;
        let target = graph
            .require(current)?
            .outgoing()
            .map(|(neighbor, _)| neighbor)
            .find(|&neighbor| neighbor != current)
            .ok_or(GraphError::NoTraversableEdge(current))?;
        self.history.push(current);
        self.current = target;
        Ok(target)
    }

    fn next_to(&mut self, graph: &Graph<T, N>, target: Label) -> GraphResult<Label> {
        self.jump(graph, target)
    }

    fn back(&mut self, graph: &Graph<T, N>) -> GraphResult<Label> {
        let previous = *self.history.last().ok_or(GraphError::EndOfTraversal)?;
        graph.require(previous)?;
        self.history.pop();
        self.current = previous;
        Ok(previous)
    }

    fn back_to(&mut self, graph: &Graph<T, N>, target: Label) -> GraphResult<Label> {
        self.jump(graph, target)
    }
}
