//! File header for serialized graphs.

use std::io::{Read, Write};

use crate::types::error::{GraphError, GraphResult};
use crate::types::GRAPH_MAGIC;

/// Header of a serialized graph. Fixed size: 10 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic bytes: [0x47, 0x52, 0x50, 0x48] ("GRPH").
    pub magic: [u8; 4],
    /// Whether the graph is directed.
    pub directed: bool,
    /// Whether every edge carries a weight.
    pub weighted: bool,
    /// Number of node records that follow.
    pub node_count: u32,
}

/// The fixed size of a FileHeader on disk: 10 bytes.
pub const HEADER_SIZE: usize = 10;

impl FileHeader {
    /// Create a header with the default magic.
    pub fn new(directed: bool, weighted: bool, node_count: u32) -> Self {
        Self {
            magic: GRAPH_MAGIC,
            directed,
            weighted,
            node_count,
        }
    }

    /// Write this header to the given writer. Writes exactly 10 bytes.
    ///
    /// Layout (all big-endian):
    /// - 0x00..0x04: magic (4 bytes)
    /// - 0x04: directed flag (0/1)
    /// - 0x05: weighted flag (0/1)
    /// - 0x06..0x0A: node_count (u32)
    pub fn write_to(&self, writer: &mut impl Write) -> GraphResult<()> {
        writer.write_all(&self.magic)?;
        writer.write_all(&[self.directed as u8, self.weighted as u8])?;
        writer.write_all(&self.node_count.to_be_bytes())?;
        Ok(())
    }

    /// Read a header from the given reader. Reads exactly 10 bytes.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                GraphError::TruncatedStream
            } else {
                GraphError::Io(e)
            }
        })?;

        let magic = [buf[0], buf[1], buf[2], buf[3]];
        if magic != GRAPH_MAGIC {
            return Err(GraphError::BadMagicNumber(magic));
        }

        let directed = parse_flag(buf[4], "directed")?;
        let weighted = parse_flag(buf[5], "weighted")?;
        let node_count = u32::from_be_bytes([buf[6], buf[7], buf[8], buf[9]]);

        Ok(Self {
            magic,
            directed,
            weighted,
            node_count,
        })
    }
}

fn parse_flag(byte: u8, name: &str) -> GraphResult<bool> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(GraphError::Corrupt(format!(
            "{} flag must be 0 or 1, found {}",
            name, other
        ))),
    }
}
