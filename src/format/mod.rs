//! Binary serialization of graphs.

pub mod codec;
pub mod reader;
pub mod serializer;
pub mod writer;

pub use codec::{BytesCodec, Codec, FnCodec, JsonCodec, Lz4Codec, NumberCodec, Utf8Codec};
pub use serializer::GraphSerializer;
