//! Pluggable payload and weight serializers.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::error::{GraphError, GraphResult};
use crate::types::Number;

/// Converts values of type `T` to and from the bytes stored in a graph file.
pub trait Codec<T> {
    /// Encode a value.
    fn encode(&self, value: &T) -> GraphResult<Vec<u8>>;

    /// Decode a value previously produced by [`encode`](Self::encode).
    fn decode(&self, bytes: &[u8]) -> GraphResult<T>;
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for Box<C> {
    fn encode(&self, value: &T) -> GraphResult<Vec<u8>> {
        (**self).encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> GraphResult<T> {
        (**self).decode(bytes)
    }
}

/// UTF-8 strings, stored verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Codec;

impl Codec<String> for Utf8Codec {
    fn encode(&self, value: &String) -> GraphResult<Vec<u8>> {
        Ok(value.as_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> GraphResult<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| GraphError::Codec(e.to_string()))
    }
}

/// Raw byte payloads, stored verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesCodec;

impl Codec<Vec<u8>> for BytesCodec {
    fn encode(&self, value: &Vec<u8>) -> GraphResult<Vec<u8>> {
        Ok(value.clone())
    }

    fn decode(&self, bytes: &[u8]) -> GraphResult<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

/// Fixed-width big-endian numbers (the default weight codec).
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberCodec;

impl<N: Number> Codec<N> for NumberCodec {
    fn encode(&self, value: &N) -> GraphResult<Vec<u8>> {
        Ok(value.to_be_vec())
    }

    fn decode(&self, bytes: &[u8]) -> GraphResult<N> {
        N::from_be_slice(bytes).ok_or_else(|| {
            GraphError::Codec(format!(
                "expected {} bytes for a number, found {}",
                N::WIDTH,
                bytes.len()
            ))
        })
    }
}

/// Any serde type, stored as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl<T: Serialize + DeserializeOwned> Codec<T> for JsonCodec {
    fn encode(&self, value: &T) -> GraphResult<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| GraphError::Codec(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> GraphResult<T> {
        serde_json::from_slice(bytes).map_err(|e| GraphError::Codec(e.to_string()))
    }
}

/// LZ4-compresses the bytes of an inner codec (size prepended).
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4Codec<C> {
    inner: C,
}

impl<C> Lz4Codec<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C: Codec<T>> Codec<T> for Lz4Codec<C> {
    fn encode(&self, value: &T) -> GraphResult<Vec<u8>> {
        Ok(lz4_flex::compress_prepend_size(&self.inner.encode(value)?))
    }

    fn decode(&self, bytes: &[u8]) -> GraphResult<T> {
        let raw = lz4_flex::decompress_size_prepended(bytes)
            .map_err(|e| GraphError::Compression(e.to_string()))?;
        self.inner.decode(&raw)
    }
}

/// Adapts a pair of closures into a codec.
pub struct FnCodec<T, E, D> {
    encode: E,
    decode: D,
    _value: PhantomData<fn() -> T>,
}

impl<T, E, D> FnCodec<T, E, D>
where
    E: Fn(&T) -> GraphResult<Vec<u8>>,
    D: Fn(&[u8]) -> GraphResult<T>,
{
    pub fn new(encode: E, decode: D) -> Self {
        Self {
            encode,
            decode,
            _value: PhantomData,
        }
    }
}

impl<T, E, D> Codec<T> for FnCodec<T, E, D>
where
    E: Fn(&T) -> GraphResult<Vec<u8>>,
    D: Fn(&[u8]) -> GraphResult<T>,
{
    fn encode(&self, value: &T) -> GraphResult<Vec<u8>> {
        (self.encode)(value)
    }

    fn decode(&self, bytes: &[u8]) -> GraphResult<T> {
        (self.decode)(bytes)
    }
}
