//! Nodes and their adjacency maps.

use std::collections::BTreeMap;

use super::edge::EdgeId;
use super::Label;

/// A labelled node holding a payload and the ids of its incident edges.
///
/// `outgoing[v]` is the edge leaving this node towards `v`; `incoming[u]` is
/// the edge arriving from `u`. In an undirected graph every edge is indexed in
/// both maps of both endpoints.
#[derive(Debug)]
pub struct Node<T> {
    label: Label,
    payload: T,
    outgoing: BTreeMap<Label, EdgeId>,
    incoming: BTreeMap<Label, EdgeId>,
    attributes: BTreeMap<String, String>,
}

impl<T> Node<T> {
    pub(crate) fn new(label: Label, payload: T) -> Self {
        Self {
            label,
            payload,
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// This node's label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// The stored payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// The stored payload (mutable).
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// `(neighbor, edge)` pairs for edges leaving this node, by ascending neighbor.
    pub fn outgoing(&self) -> impl Iterator<Item = (Label, EdgeId)> + '_ {
        self.outgoing.iter().map(|(&l, &e)| (l, e))
    }

    /// `(neighbor, edge)` pairs for edges arriving at this node.
    pub fn incoming(&self) -> impl Iterator<Item = (Label, EdgeId)> + '_ {
        self.incoming.iter().map(|(&l, &e)| (l, e))
    }

    /// Edge leaving towards `neighbor`.
    pub fn outgoing_to(&self, neighbor: Label) -> Option<EdgeId> {
        self.outgoing.get(&neighbor).copied()
    }

    /// Edge arriving from `neighbor`.
    pub fn incoming_from(&self, neighbor: Label) -> Option<EdgeId> {
        self.incoming.get(&neighbor).copied()
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Attribute value for `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All attributes, ordered by key.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Remove an attribute, returning its value.
    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

    pub(crate) fn into_payload(self) -> T {
        self.payload
    }

    pub(crate) fn link_outgoing(&mut self, neighbor: Label, edge: EdgeId) {
        self.outgoing.insert(neighbor, edge);
    }

    pub(crate) fn link_incoming(&mut self, neighbor: Label, edge: EdgeId) {
        self.incoming.insert(neighbor, edge);
    }

    pub(crate) fn unlink_outgoing(&mut self, neighbor: Label, edge: EdgeId) {
        if self.outgoing.get(&neighbor) == Some(&edge) {
            self.outgoing.remove(&neighbor);
        }
    }

    pub(crate) fn unlink_incoming(&mut self, neighbor: Label, edge: EdgeId) {
        if self.incoming.get(&neighbor) == Some(&edge) {
            self.incoming.remove(&neighbor);
        }
    }

    /// Every incident edge id, each once.
    pub(crate) fn incident_edges(&self) -> Vec<EdgeId> {
        let mut ids: Vec<EdgeId> = self
            .outgoing
            .values()
            .chain(self.incoming.values())
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub(crate) fn replace_attributes(&mut self, attributes: BTreeMap<String, String>) {
        self.attributes = attributes;
    }
}
