//! Edges, edge identifiers and the factory that builds them.

use std::fmt;

use super::weight::{Number, Weight};
use super::Label;

/// Identifier of an edge in a graph's edge arena.
///
/// Both endpoint nodes index the same id, which is how one edge is shared
/// between its start and end node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) u64);

impl EdgeId {
    /// The raw arena index.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A relationship between two nodes.
#[derive(Debug, Clone)]
pub struct Edge<N> {
    id: EdgeId,
    start: Label,
    end: Label,
    weight: Option<Weight<N>>,
    label: Option<String>,
    directed: bool,
}

impl<N: Number> Edge<N> {
    /// Arena identifier.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Node the edge was connected from.
    pub fn start(&self) -> Label {
        self.start
    }

    /// Node the edge was connected to.
    pub fn end(&self) -> Label {
        self.end
    }

    /// Weight, present on every edge of a weighted graph.
    pub fn weight(&self) -> Option<Weight<N>> {
        self.weight
    }

    /// Optional free-form label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the edge only leads from `start` to `end`.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether `start == end`.
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }

    /// The endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: Label) -> Option<Label> {
        if node == self.start {
            Some(self.end)
        } else if node == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// Whether this edge can be followed from `from` to `to`.
    pub fn leads(&self, from: Label, to: Label) -> bool {
        (self.start == from && self.end == to)
            || (!self.directed && self.start == to && self.end == from)
    }

    pub(crate) fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }
}

impl<N> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed {
            return false;
        }
        let same = self.start == other.start && self.end == other.end;
        if self.directed {
            same
        } else {
            same || (self.start == other.end && self.end == other.start)
        }
    }
}

impl<N> Eq for Edge<N> {}

impl<N: Number> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        match self.weight {
            Some(w) => write!(f, "{} {} {} [{}]", self.start, arrow, self.end, w),
            None => write!(f, "{} {} {}", self.start, arrow, self.end),
        }
    }
}

/// Builds edges consistent with a graph's directedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFactory {
    /// Edges lead from start to end only.
    Directed,
    /// Edges connect both endpoints symmetrically.
    Undirected,
}

impl EdgeFactory {
    /// The factory matching a graph's `directed` flag.
    pub fn for_graph(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// Whether produced edges are directed.
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Build a new edge. Never touches existing edges.
    pub fn build<N: Number>(
        &self,
        id: EdgeId,
        start: Label,
        end: Label,
        weight: Option<Weight<N>>,
    ) -> Edge<N> {
        Edge {
            id,
            start,
            end,
            weight,
            label: None,
            directed: self.is_directed(),
        }
    }
}
