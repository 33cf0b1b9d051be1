//! Fluent API for building Graph instances.

use crate::types::{GraphError, GraphResult, Label, Number};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Nodes and edges are recorded first and validated together in [`build`](Self::build),
/// so edges may be declared before the nodes they reference.
pub struct GraphBuilder<T, N = f64> {
    directed: bool,
    weighted: bool,
    nodes: Vec<(Option<Label>, T)>,
    edges: Vec<(Label, Label, Option<N>)>,
}

impl<T, N: Number> GraphBuilder<T, N> {
    /// Builder for an unweighted directed graph.
    pub fn directed() -> Self {
        Self::with_flags(true, false)
    }

    /// Builder for an unweighted undirected graph.
    pub fn undirected() -> Self {
        Self::with_flags(false, false)
    }

    pub fn with_flags(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Require a weight on every edge.
    pub fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }

    /// Add a node under an explicit label.
    pub fn node(mut self, label: Label, payload: T) -> Self {
        self.nodes.push((Some(label), payload));
        self
    }

    /// Add a node under an allocated label (assigned after explicit labels).
    pub fn auto_node(mut self, payload: T) -> Self {
        self.nodes.push((None, payload));
        self
    }

    /// Add an unweighted edge.
    pub fn edge(mut self, u: Label, v: Label) -> Self {
        self.edges.push((u, v, None));
        self
    }

    /// Add a weighted edge.
    pub fn weighted_edge(mut self, u: Label, v: Label, weight: N) -> Self {
        self.edges.push((u, v, Some(weight)));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<T, N>> {
        let mut graph = Graph::new(self.directed, self.weighted);

        let mut deferred = Vec::new();
        for (label, payload) in self.nodes {
            match label {
                Some(label) => {
                    if !graph.add_at(label, payload) {
                        return Err(GraphError::InvalidArgument(format!(
                            "label {} declared twice",
                            label
                        )));
                    }
                }
                None => deferred.push(payload),
            }
        }
        for payload in deferred {
            graph.add(payload)?;
        }

        for (u, v, weight) in self.edges {
            match weight {
                Some(w) => graph.connect_weighted(u, v, w)?,
                None => graph.connect(u, v)?,
            };
        }

        Ok(graph)
    }
}
