//! Reads graphs from the binary graph format.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use memmap2::Mmap;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::header::FileHeader;
use crate::types::{Label, Number};

use super::codec::Codec;
use super::serializer::GraphSerializer;

/// Upper bound on capacity reserved from counts read off the stream.
const PREALLOC_LIMIT: usize = 4096;

/// A node record read in the first pass.
struct PendingNode<T> {
    label: Label,
    payload: T,
    attributes: BTreeMap<String, String>,
}

/// An edge record buffered until every node has been inserted.
struct PendingEdge<N> {
    start: Label,
    end: Label,
    weight: Option<N>,
}

impl<C, W> GraphSerializer<C, W> {
    /// Read a graph from any reader.
    ///
    /// Nodes are read and inserted before any edge is replayed, since an edge
    /// record may reference a node that appears later in the stream. Nothing
    /// is returned unless the whole stream is valid.
    pub fn deserialize<T, N>(&self, reader: &mut impl Read) -> GraphResult<Graph<T, N>>
    where
        N: Number,
        C: Codec<T>,
        W: Codec<N>,
    {
        let header = FileHeader::read_from(reader)?;
        let mut input = StreamReader { inner: reader };

        // Pass 1: node records, edges buffered
        let mut nodes: Vec<PendingNode<T>> =
            Vec::with_capacity((header.node_count as usize).min(PREALLOC_LIMIT));
        let mut edges: Vec<PendingEdge<N>> = Vec::new();

        for _ in 0..header.node_count {
            let label = input.read_u32()?;
            let payload = self.payload_codec.decode(&input.read_block()?)?;

            let attribute_count = input.read_u32()?;
            let mut attributes = BTreeMap::new();
            for _ in 0..attribute_count {
                let key = input.read_string()?;
                let value = input.read_string()?;
                attributes.insert(key, value);
            }

            let edge_count = input.read_u32()?;
            for _ in 0..edge_count {
                let start = input.read_u32()?;
                let end = input.read_u32()?;
                let weight = match input.read_u8()? {
                    0 => None,
                    1 => Some(self.weight_codec.decode(&input.read_block()?)?),
                    other => {
                        return Err(GraphError::Corrupt(format!(
                            "weight_present must be 0 or 1, found {}",
                            other
                        )))
                    }
                };
                edges.push(PendingEdge { start, end, weight });
            }

            nodes.push(PendingNode {
                label,
                payload,
                attributes,
            });
        }

        // Pass 2: insert nodes, then replay edges
        let mut graph = Graph::new(header.directed, header.weighted);
        for PendingNode {
            label,
            payload,
            attributes,
        } in nodes
        {
            if !graph.add_at(label, payload) {
                return Err(GraphError::Corrupt(format!(
                    "label {} declared twice",
                    label
                )));
            }
            if let Some(node) = graph.node_mut(label) {
                node.replace_attributes(attributes);
            }
        }

        let edge_total = edges.len();
        for PendingEdge { start, end, weight } in edges {
            let added = match (header.weighted, weight) {
                (true, Some(w)) => graph.connect_weighted(start, end, w)?,
                (false, None) => graph.connect(start, end)?,
                (true, None) => {
                    return Err(GraphError::Corrupt(format!(
                        "edge {} -> {} has no weight in a weighted graph",
                        start, end
                    )))
                }
                (false, Some(_)) => {
                    return Err(GraphError::Corrupt(format!(
                        "edge {} -> {} has a weight in an unweighted graph",
                        start, end
                    )))
                }
            };
            if !added {
                return Err(GraphError::Corrupt(format!(
                    "edge {} -> {} declared twice",
                    start, end
                )));
            }
        }

        log::debug!(
            "Deserialized graph: {} nodes, {} edges",
            graph.size(),
            edge_total
        );
        Ok(graph)
    }

    /// Read a graph from a byte slice.
    pub fn deserialize_slice<T, N>(&self, mut bytes: &[u8]) -> GraphResult<Graph<T, N>>
    where
        N: Number,
        C: Codec<T>,
        W: Codec<N>,
    {
        self.deserialize(&mut bytes)
    }

    /// Read a graph file through a read-only memory map.
    pub fn read_from_file<T, N>(&self, path: &Path) -> GraphResult<Graph<T, N>>
    where
        N: Number,
        C: Codec<T>,
        W: Codec<N>,
    {
        let file = std::fs::File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Err(GraphError::TruncatedStream);
        }
        let mmap = unsafe { Mmap::map(&file)? };
        self.deserialize_slice(&mmap[..])
    }
}

/// Big-endian primitives over a reader; early EOF is `TruncatedStream`.
struct StreamReader<'r, R> {
    inner: &'r mut R,
}

impl<R: Read> StreamReader<'_, R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> GraphResult<()> {
        self.inner.read_exact(buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                GraphError::TruncatedStream
            } else {
                GraphError::Io(e)
            }
        })
    }

    fn read_u8(&mut self) -> GraphResult<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_u32(&mut self) -> GraphResult<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// A u32 length followed by that many bytes.
    fn read_block(&mut self) -> GraphResult<Vec<u8>> {
        let len = self.read_u32()? as u64;
        let mut buf = Vec::new();
        (&mut *self.inner).take(len).read_to_end(&mut buf)?;
        if (buf.len() as u64) < len {
            return Err(GraphError::TruncatedStream);
        }
        Ok(buf)
    }

    fn read_string(&mut self) -> GraphResult<String> {
        String::from_utf8(self.read_block()?)
            .map_err(|e| GraphError::Corrupt(format!("attribute is not UTF-8: {}", e)))
    }
}
