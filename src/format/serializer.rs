//! The serializer: a payload codec paired with a weight codec.

use super::codec::NumberCodec;

/// Reads and writes graphs in the binary graph format.
///
/// `C` encodes node payloads and `W` encodes edge weights. The encode side
/// lives in `writer.rs`, the decode side in `reader.rs`.
#[derive(Debug, Clone, Default)]
pub struct GraphSerializer<C, W = NumberCodec> {
    pub(crate) payload_codec: C,
    pub(crate) weight_codec: W,
}

impl<C> GraphSerializer<C, NumberCodec> {
    /// Serializer with the given payload codec and big-endian number weights.
    pub fn new(payload_codec: C) -> Self {
        Self {
            payload_codec,
            weight_codec: NumberCodec,
        }
    }
}

impl<C, W> GraphSerializer<C, W> {
    /// Serializer with custom payload and weight codecs.
    pub fn with_codecs(payload_codec: C, weight_codec: W) -> Self {
        Self {
            payload_codec,
            weight_codec,
        }
    }

    pub fn payload_codec(&self) -> &C {
        &self.payload_codec
    }

    pub fn weight_codec(&self) -> &W {
        &self.weight_codec
    }
}
