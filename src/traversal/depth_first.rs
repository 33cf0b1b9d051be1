//! Depth-first visitation order.

use std::collections::HashSet;

use crate::graph::Graph;
use crate::types::{Label, Number};

use super::snapshot::{SnapshotIterator, TraversalOrder};

/// Pre-order depth-first walk over outgoing edges, smaller labels first.
///
/// Uses an explicit stack, so deep chains cannot overflow the call stack.
#[derive(Debug, Clone, Copy)]
pub struct DepthFirst;

/// Snapshot iterator over a depth-first walk.
pub type DepthFirstIterator = SnapshotIterator<DepthFirst>;

impl TraversalOrder for DepthFirst {
    fn walk<T, N: Number>(graph: &Graph<T, N>, start: Label) -> Vec<Label> {
        let mut visited: HashSet<Label> = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(label) = stack.pop() {
            if !visited.insert(label) {
                continue;
            }
            order.push(label);

            if let Some(node) = graph.node(label) {
                let pending: Vec<Label> = node
                    .outgoing()
                    .map(|(neighbor, _)| neighbor)
                    .filter(|neighbor| !visited.contains(neighbor))
                    .collect();
                // Reversed so the smallest neighbor is popped first.
                stack.extend(pending.into_iter().rev());
            }
        }

        order
    }
}
