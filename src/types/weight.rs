//! Edge weights and the numeric capability they are built on.

use std::cmp::Ordering;
use std::fmt;

use super::duplicate::Duplicate;
use super::error::GraphResult;

/// A primitive numeric type usable as an edge weight.
pub trait Number: Copy + PartialOrd + fmt::Debug + fmt::Display + Duplicate + 'static {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Big-endian byte representation.
    fn to_be_vec(self) -> Vec<u8>;

    /// Parse a big-endian representation; `None` if `bytes` has the wrong width.
    fn from_be_slice(bytes: &[u8]) -> Option<Self>;

    /// Lossy conversion used for display and JSON output.
    fn to_f64(self) -> f64;
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn to_be_vec(self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }

                fn from_be_slice(bytes: &[u8]) -> Option<Self> {
                    let arr: [u8; std::mem::size_of::<$t>()] = bytes.try_into().ok()?;
                    Some(<$t>::from_be_bytes(arr))
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// The weight attached to an edge of a weighted graph.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight<N> {
    value: N,
}

impl<N: Number> Weight<N> {
    /// Wrap a numeric value.
    pub fn new(value: N) -> Self {
        Self { value }
    }

    /// The wrapped value.
    pub fn value(&self) -> N {
        self.value
    }

    /// Total comparison; incomparable values (NaN) order as equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.value
            .partial_cmp(&other.value)
            .unwrap_or(Ordering::Equal)
    }
}

impl<N: Number> From<N> for Weight<N> {
    fn from(value: N) -> Self {
        Self::new(value)
    }
}

impl<N: Number> Duplicate for Weight<N> {
    fn duplicate(&self) -> GraphResult<Self> {
        Ok(Self::new(self.value.duplicate()?))
    }
}

impl<N: Number> fmt::Display for Weight<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
