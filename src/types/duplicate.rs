//! The explicit "cloneable value" capability used by graph duplication.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::sync::Arc;

use super::error::GraphResult;

/// A value that can produce an independent copy of itself.
///
/// `Graph::duplicate` requires every payload to implement this trait, so a
/// payload type without the capability is rejected at compile time. Types
/// that compile but must not be copied at run time (open handles, unique
/// tokens) return [`GraphError::CloneFailure`](super::GraphError::CloneFailure).
///
/// Shared pointers (`Rc`, `Arc`) are duplicated deeply: the copy never shares
/// an allocation with the original.
pub trait Duplicate: Sized {
    /// Produce a copy that shares no identity with `self`.
    fn duplicate(&self) -> GraphResult<Self>;
}

macro_rules! duplicate_by_clone {
    ($($t:ty),* $(,)?) => {
        $(
            impl Duplicate for $t {
                fn duplicate(&self) -> GraphResult<Self> {
                    Ok(self.clone())
                }
            }
        )*
    };
}

duplicate_by_clone!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    serde_json::Value,
);

impl<T: Duplicate> Duplicate for Vec<T> {
    fn duplicate(&self) -> GraphResult<Self> {
        self.iter().map(Duplicate::duplicate).collect()
    }
}

impl<T: Duplicate> Duplicate for Option<T> {
    fn duplicate(&self) -> GraphResult<Self> {
        self.as_ref().map(Duplicate::duplicate).transpose()
    }
}

impl<T: Duplicate> Duplicate for Box<T> {
    fn duplicate(&self) -> GraphResult<Self> {
        Ok(Box::new((**self).duplicate()?))
    }
}

impl<T: Duplicate> Duplicate for Rc<T> {
    fn duplicate(&self) -> GraphResult<Self> {
        Ok(Rc::new((**self).duplicate()?))
    }
}

impl<T: Duplicate> Duplicate for Arc<T> {
    fn duplicate(&self) -> GraphResult<Self> {
        Ok(Arc::new((**self).duplicate()?))
    }
}

impl<A: Duplicate, B: Duplicate> Duplicate for (A, B) {
    fn duplicate(&self) -> GraphResult<Self> {
        Ok((self.0.duplicate()?, self.1.duplicate()?))
    }
}

impl<A: Duplicate, B: Duplicate, C: Duplicate> Duplicate for (A, B, C) {
    fn duplicate(&self) -> GraphResult<Self> {
        Ok((self.0.duplicate()?, self.1.duplicate()?, self.2.duplicate()?))
    }
}

impl<K: Duplicate + Ord, V: Duplicate> Duplicate for BTreeMap<K, V> {
    fn duplicate(&self) -> GraphResult<Self> {
        self.iter()
            .map(|(k, v)| Ok((k.duplicate()?, v.duplicate()?)))
            .collect()
    }
}

impl<T: Duplicate + Ord> Duplicate for BTreeSet<T> {
    fn duplicate(&self) -> GraphResult<Self> {
        self.iter().map(Duplicate::duplicate).collect()
    }
}
