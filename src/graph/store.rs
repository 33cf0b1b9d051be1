//! Core graph structure: labelled nodes plus an edge arena indexed from both endpoints.

use std::collections::BTreeMap;

use crate::traversal::{BreadthFirstIterator, DepthFirstIterator, RandomAccessIterator};
use crate::types::{
    Duplicate, Edge, EdgeFactory, EdgeId, GraphError, GraphResult, Label, Node, Number, Weight,
};

use super::labels::LabelAllocator;

/// An in-memory graph with payloads of type `T` and edge weights of type `N`.
///
/// Every edge lives once in the arena; its start node indexes it under
/// `outgoing[end]` and its end node under `incoming[start]`. Undirected edges
/// are additionally indexed the other way round, so both endpoints see the
/// same edge as departing and arriving.
#[derive(Debug)]
pub struct Graph<T, N = f64> {
    directed: bool,
    weighted: bool,
    edge_factory: EdgeFactory,
    nodes: BTreeMap<Label, Node<T>>,
    edges: BTreeMap<EdgeId, Edge<N>>,
    next_edge_id: u64,
    labels: LabelAllocator,
}

impl<T, N: Number> Graph<T, N> {
    /// Create a new empty graph.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            edge_factory: EdgeFactory::for_graph(directed),
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_edge_id: 0,
            labels: LabelAllocator::new(),
        }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// The factory used to build this graph's edges.
    pub fn edge_factory(&self) -> EdgeFactory {
        self.edge_factory
    }

    /// Whether a node with this label exists.
    pub fn contains(&self, label: Label) -> bool {
        self.nodes.contains_key(&label)
    }

    /// All labels, ascending.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.nodes.keys().copied()
    }

    /// All nodes, by ascending label.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N>> {
        self.edges.values()
    }

    pub fn node(&self, label: Label) -> Option<&Node<T>> {
        self.nodes.get(&label)
    }

    pub fn node_mut(&mut self, label: Label) -> Option<&mut Node<T>> {
        self.nodes.get_mut(&label)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<N>> {
        self.edges.get(&id)
    }

    /// Payload stored under `label`.
    pub fn find(&self, label: Label) -> Option<&T> {
        self.nodes.get(&label).map(Node::payload)
    }

    /// Payload stored under `label` (mutable).
    pub fn find_mut(&mut self, label: Label) -> Option<&mut T> {
        self.nodes.get_mut(&label).map(Node::payload_mut)
    }

    pub(crate) fn require(&self, label: Label) -> GraphResult<&Node<T>> {
        self.nodes.get(&label).ok_or(GraphError::UnknownLabel(label))
    }

    fn require_mut(&mut self, label: Label) -> GraphResult<&mut Node<T>> {
        self.nodes
            .get_mut(&label)
            .ok_or(GraphError::UnknownLabel(label))
    }

    /// Add a node under an explicit label. Returns false if the label is taken.
    pub fn add_at(&mut self, label: Label, data: T) -> bool {
        if self.nodes.contains_key(&label) {
            return false;
        }
        self.labels.claim(label);
        self.nodes.insert(label, Node::new(label, data));
        true
    }

    /// Add a node under a freshly allocated label and return that label.
    pub fn add(&mut self, data: T) -> GraphResult<Label> {
        let nodes = &self.nodes;
        let label = self.labels.allocate(|l| nodes.contains_key(&l))?;
        self.nodes.insert(label, Node::new(label, data));
        Ok(label)
    }

    /// Connect `u` to `v` on an unweighted graph.
    ///
    /// Returns `Ok(false)` if the two are already connected in that direction.
    pub fn connect(&mut self, u: Label, v: Label) -> GraphResult<bool> {
        Ok(self.attach(u, v, None)?.is_some())
    }

    /// Connect `u` to `v` with a weight, on a weighted graph.
    pub fn connect_weighted(
        &mut self,
        u: Label,
        v: Label,
        weight: impl Into<Weight<N>>,
    ) -> GraphResult<bool> {
        Ok(self.attach(u, v, Some(weight.into()))?.is_some())
    }

    fn attach(
        &mut self,
        start: Label,
        end: Label,
        weight: Option<Weight<N>>,
    ) -> GraphResult<Option<EdgeId>> {
        let existing = self.require(start)?.outgoing_to(end);
        self.require(end)?;

        match (self.weighted, weight.is_some()) {
            (true, false) => {
                return Err(GraphError::InvalidArgument(format!(
                    "weighted graph requires a weight to connect {} and {}",
                    start, end
                )))
            }
            (false, true) => {
                return Err(GraphError::InvalidArgument(format!(
                    "unweighted graph cannot carry a weight between {} and {}",
                    start, end
                )))
            }
            _ => {}
        }

        if existing.is_some() {
            return Ok(None);
        }

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;
        let edge = self.edge_factory.build(id, start, end, weight);
        log::trace!("Connected {}", edge);

        if let Some(node) = self.nodes.get_mut(&start) {
            node.link_outgoing(end, id);
            if !self.directed {
                node.link_incoming(end, id);
            }
        }
        if let Some(node) = self.nodes.get_mut(&end) {
            node.link_incoming(start, id);
            if !self.directed {
                node.link_outgoing(start, id);
            }
        }
        self.edges.insert(id, edge);

        Ok(Some(id))
    }

    /// Drop an edge from the arena and from both endpoints.
    fn detach(&mut self, id: EdgeId) -> Option<Edge<N>> {
        let edge = self.edges.remove(&id)?;
        let (start, end) = (edge.start(), edge.end());
        if let Some(node) = self.nodes.get_mut(&start) {
            node.unlink_outgoing(end, id);
            node.unlink_incoming(end, id);
        }
        if let Some(node) = self.nodes.get_mut(&end) {
            node.unlink_incoming(start, id);
            node.unlink_outgoing(start, id);
        }
        log::trace!("Disconnected {}", edge);
        Some(edge)
    }

    /// Remove the edge leading from `u` to `v` and return it.
    pub fn disconnect(&mut self, u: Label, v: Label) -> GraphResult<Option<Edge<N>>> {
        let id = self.require(u)?.outgoing_to(v);
        self.require(v)?;
        Ok(id.and_then(|id| self.detach(id)))
    }

    /// Remove a node and every edge touching it, returning its payload.
    pub fn remove_at(&mut self, label: Label) -> GraphResult<T> {
        let incident = self.require(label)?.incident_edges();
        for id in incident {
            self.detach(id);
        }
        let node = self
            .nodes
            .remove(&label)
            .ok_or(GraphError::UnknownLabel(label))?;
        self.labels.release(label);
        Ok(node.into_payload())
    }

    /// Whether an edge joins `u` and `v` in either direction.
    pub fn is_vertex_adjacent(&self, u: Label, v: Label) -> GraphResult<bool> {
        let from_u = self.require(u)?.outgoing_to(v).is_some();
        let from_v = self.require(v)?.outgoing_to(u).is_some();
        Ok(from_u || from_v)
    }

    /// The edge joining `u` and `v` in either direction.
    pub fn edge_between(&self, u: Label, v: Label) -> GraphResult<Option<&Edge<N>>> {
        let node = self.require(u)?;
        self.require(v)?;
        let id = node.outgoing_to(v).or_else(|| node.incoming_from(v));
        Ok(id.and_then(|id| self.edges.get(&id)))
    }

    /// Edges leaving `label`.
    pub fn edges_departing(&self, label: Label) -> GraphResult<Vec<&Edge<N>>> {
        Ok(self
            .require(label)?
            .outgoing()
            .filter_map(|(_, id)| self.edges.get(&id))
            .collect())
    }

    /// Edges arriving at `label`.
    pub fn edges_arriving(&self, label: Label) -> GraphResult<Vec<&Edge<N>>> {
        Ok(self
            .require(label)?
            .incoming()
            .filter_map(|(_, id)| self.edges.get(&id))
            .collect())
    }

    /// Every edge touching `label`, each once.
    pub fn adjacent_edges(&self, label: Label) -> GraphResult<Vec<&Edge<N>>> {
        Ok(self
            .require(label)?
            .incident_edges()
            .into_iter()
            .filter_map(|id| self.edges.get(&id))
            .collect())
    }

    /// Labels reachable over one outgoing edge, ascending.
    pub fn neighbors(&self, label: Label) -> GraphResult<Vec<Label>> {
        Ok(self.require(label)?.outgoing().map(|(l, _)| l).collect())
    }

    pub fn out_degree(&self, label: Label) -> GraphResult<usize> {
        Ok(self.require(label)?.out_degree())
    }

    pub fn in_degree(&self, label: Label) -> GraphResult<usize> {
        Ok(self.require(label)?.in_degree())
    }

    /// Attribute `key` of node `label`.
    pub fn attribute(&self, label: Label, key: &str) -> GraphResult<Option<&str>> {
        Ok(self.require(label)?.attribute(key))
    }

    /// Set attribute `key` of node `label`, returning the previous value.
    pub fn set_attribute(
        &mut self,
        label: Label,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> GraphResult<Option<String>> {
        Ok(self.require_mut(label)?.set_attribute(key, value))
    }

    pub fn remove_attribute(&mut self, label: Label, key: &str) -> GraphResult<Option<String>> {
        Ok(self.require_mut(label)?.remove_attribute(key))
    }

    /// Attach a free-form label to the edge joining `u` and `v`.
    pub fn set_edge_label(&mut self, u: Label, v: Label, label: Option<String>) -> GraphResult<()> {
        let id = self
            .edge_between(u, v)?
            .map(Edge::id)
            .ok_or_else(|| {
                GraphError::InvalidArgument(format!("no edge between {} and {}", u, v))
            })?;
        if let Some(edge) = self.edges.get_mut(&id) {
            edge.set_label(label);
        }
        Ok(())
    }

    /// Live cursor positioned on `label`.
    pub fn iterator(&self, label: Label) -> GraphResult<RandomAccessIterator> {
        RandomAccessIterator::new(self, label)
    }

    /// Snapshot of a depth-first walk from `start`.
    pub fn depth_first_search_iterator(
        &self,
        start: Label,
        include_disconnected: bool,
    ) -> GraphResult<DepthFirstIterator> {
        DepthFirstIterator::new(self, start, include_disconnected)
    }

    /// Snapshot of a breadth-first walk from `start`.
    pub fn breadth_first_search_iterator(
        &self,
        start: Label,
        include_disconnected: bool,
    ) -> GraphResult<BreadthFirstIterator> {
        BreadthFirstIterator::new(self, start, include_disconnected)
    }
}

impl<T: Duplicate, N: Number> Graph<T, N> {
    /// Deep copy with fresh nodes, edges and weights.
    ///
    /// Nodes are copied first without edges; then every edge is rebuilt
    /// between the copied endpoints.
    pub fn duplicate(&self) -> GraphResult<Self> {
        let mut copy = Self::new(self.directed, self.weighted);

        for node in self.nodes.values() {
            let mut cloned = Node::new(node.label(), node.payload().duplicate()?);
            cloned.replace_attributes(node.attributes().clone());
            copy.nodes.insert(node.label(), cloned);
        }
        copy.labels = self.labels.clone();

        for edge in self.edges.values() {
            let weight = edge.weight().map(|w| w.duplicate()).transpose()?;
            let id = copy.attach(edge.start(), edge.end(), weight)?;
            if let (Some(id), Some(label)) = (id, edge.label()) {
                if let Some(cloned) = copy.edges.get_mut(&id) {
                    cloned.set_label(Some(label.to_string()));
                }
            }
        }

        log::debug!(
            "Duplicated graph: {} nodes, {} edges",
            copy.size(),
            copy.edge_count()
        );
        Ok(copy)
    }
}
