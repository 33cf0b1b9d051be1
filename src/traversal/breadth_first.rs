//! Breadth-first visitation order.

use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;
use crate::types::{Label, Number};

use super::snapshot::{SnapshotIterator, TraversalOrder};

/// Level-order walk over outgoing edges, smaller labels first within a level.
#[derive(Debug, Clone, Copy)]
pub struct BreadthFirst;

/// Snapshot iterator over a breadth-first walk.
pub type BreadthFirstIterator = SnapshotIterator<BreadthFirst>;

impl TraversalOrder for BreadthFirst {
    fn walk<T, N: Number>(graph: &Graph<T, N>, start: Label) -> Vec<Label> {
        let mut visited: HashSet<Label> = HashSet::new();
        let mut order = Vec::new();
        let mut queue: VecDeque<Label> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(label) = queue.pop_front() {
            order.push(label);
            let Some(node) = graph.node(label) else {
                continue;
            };
            for (neighbor, _) in node.outgoing() {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        order
    }
}
