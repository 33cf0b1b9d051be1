//! Node label allocation.

use std::collections::BTreeSet;

use crate::types::{GraphError, GraphResult, Label};

/// Hands out unused labels.
///
/// A counter covers labels never issued; released labels below the counter go
/// to a free list and are reused smallest-first. Labels claimed explicitly
/// above the counter are skipped when the counter reaches them.
#[derive(Debug, Clone, Default)]
pub struct LabelAllocator {
    next: u64,
    free: BTreeSet<Label>,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a label for which `in_use` is false.
    pub fn allocate(&mut self, in_use: impl Fn(Label) -> bool) -> GraphResult<Label> {
        while let Some(label) = self.free.pop_first() {
            if !in_use(label) {
                return Ok(label);
            }
        }
        while self.next <= Label::MAX as u64 {
            let candidate = self.next as Label;
            self.next += 1;
            if !in_use(candidate) {
                return Ok(candidate);
            }
        }
        Err(GraphError::LabelSpaceExhausted)
    }

    /// Record that `label` was taken explicitly.
    pub fn claim(&mut self, label: Label) {
        self.free.remove(&label);
    }

    /// Return `label` to the pool.
    pub fn release(&mut self, label: Label) {
        if (label as u64) < self.next {
            self.free.insert(label);
        }
    }

    /// Number of released labels awaiting reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}
