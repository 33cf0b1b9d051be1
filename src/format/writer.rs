//! Writes graphs in the binary graph format.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::header::FileHeader;
use crate::types::{Edge, Number};

use super::codec::Codec;
use super::serializer::GraphSerializer;

impl<C, W> GraphSerializer<C, W> {
    /// Write a graph to any writer.
    ///
    /// Each node record is followed by the node's outgoing edges. Undirected
    /// edges are written only from their start node, so each appears once.
    pub fn serialize<T, N>(&self, graph: &Graph<T, N>, writer: &mut impl Write) -> GraphResult<()>
    where
        N: Number,
        C: Codec<T>,
        W: Codec<N>,
    {
        let node_count = to_u32(graph.size(), "node count")?;
        FileHeader::new(graph.is_directed(), graph.is_weighted(), node_count).write_to(writer)?;

        let mut edges_written = 0usize;
        for node in graph.nodes() {
            writer.write_all(&node.label().to_be_bytes())?;
            write_block(writer, &self.payload_codec.encode(node.payload())?)?;

            let attributes = node.attributes();
            writer.write_all(&to_u32(attributes.len(), "attribute count")?.to_be_bytes())?;
            for (key, value) in attributes {
                write_block(writer, key.as_bytes())?;
                write_block(writer, value.as_bytes())?;
            }

            let records: Vec<&Edge<N>> = node
                .outgoing()
                .filter_map(|(_, id)| graph.edge(id))
                .filter(|edge| graph.is_directed() || edge.start() == node.label())
                .collect();
            writer.write_all(&to_u32(records.len(), "edge count")?.to_be_bytes())?;
            edges_written += records.len();
            for edge in records {
                self.write_edge_record(writer, edge)?;
            }
        }

        writer.flush()?;
        log::debug!(
            "Serialized graph: {} nodes, {} edges",
            node_count,
            edges_written
        );
        Ok(())
    }

    /// Serialize into a fresh buffer.
    pub fn serialize_to_vec<T, N>(&self, graph: &Graph<T, N>) -> GraphResult<Vec<u8>>
    where
        N: Number,
        C: Codec<T>,
        W: Codec<N>,
    {
        let mut buf = Vec::new();
        self.serialize(graph, &mut buf)?;
        Ok(buf)
    }

    /// Write a graph to a file, replacing its contents.
    ///
    /// The graph is encoded in memory and written to a `.tmp` sibling that is
    /// then renamed over `path`, so a failed write leaves the old file intact.
    pub fn write_to_file<T, N>(&self, graph: &Graph<T, N>, path: &Path) -> GraphResult<()>
    where
        N: Number,
        C: Codec<T>,
        W: Codec<N>,
    {
        let bytes = self.serialize_to_vec(graph)?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let written = std::fs::File::create(&tmp_path).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        std::fs::rename(&tmp_path, path)?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    fn write_edge_record<N>(&self, writer: &mut impl Write, edge: &Edge<N>) -> GraphResult<()>
    where
        N: Number,
        W: Codec<N>,
    {
        writer.write_all(&edge.start().to_be_bytes())?; // 4 bytes
        writer.write_all(&edge.end().to_be_bytes())?; // 4 bytes
        match edge.weight() {
            Some(weight) => {
                writer.write_all(&[1u8])?;
                write_block(writer, &self.weight_codec.encode(&weight.value())?)?;
            }
            None => writer.write_all(&[0u8])?,
        }
        Ok(())
    }
}

/// Write a length-prefixed byte block.
fn write_block(writer: &mut impl Write, bytes: &[u8]) -> GraphResult<()> {
    writer.write_all(&to_u32(bytes.len(), "block length")?.to_be_bytes())?;
    writer.write_all(bytes)?;
    Ok(())
}

fn to_u32(value: usize, what: &str) -> GraphResult<u32> {
    u32::try_from(value)
        .map_err(|_| GraphError::InvalidArgument(format!("{} {} exceeds u32", what, value)))
}
