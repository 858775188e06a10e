// src/processor.rs
//! Compress / decompress orchestration.
//!
//! Output layout:
//!   32 bits   HUFF_TREE magic tag
//!   variable  tree header (see `header`)
//!   variable  payload codes, ending with the PSEUDO_EOF code
//!   0..7 bits zero padding to the byte boundary

use tracing::debug;

use crate::alphabet::{FrequencyTable, BITS_PER_INT, HUFF_TREE};
use crate::bitio::{BitSink, BitSource};
use crate::codes::CodeTable;
use crate::config::{CodecConfig, Verbosity};
use crate::error::{Error, Result};
use crate::header::{header_bits, read_header, write_header};
use crate::payload::{decode_payload, encode_payload};
use crate::tree::build_tree;

#[derive(Debug, Clone, Copy, Default)]
pub struct HuffProcessor {
    config: CodecConfig,
}

impl HuffProcessor {
    pub fn new(config: CodecConfig) -> Self {
        HuffProcessor { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress everything `source` holds into `sink`. Reads the source
    /// twice, resetting it in between. The sink is closed on every path.
    ///
    /// Returns the number of input bytes.
    pub fn compress<I: BitSource, O: BitSink>(&self, source: &mut I, sink: &mut O) -> Result<u64> {
        let result = self.write_compressed(source, sink);
        close_after(sink, result)
    }

    /// Decompress a tree-header stream from `source` into `sink`. The sink
    /// is closed on every path.
    ///
    /// Returns the number of bytes written.
    pub fn decompress<I: BitSource, O: BitSink>(&self, source: &mut I, sink: &mut O) -> Result<u64> {
        let result = self.write_decompressed(source, sink);
        close_after(sink, result)
    }

    fn write_compressed<I: BitSource, O: BitSink>(&self, source: &mut I, sink: &mut O) -> Result<u64> {
        let freqs = FrequencyTable::count(source)?;
        let root = build_tree(&freqs);
        let codes = CodeTable::from_tree(&root);

        debug!(
            bytes = freqs.total_bytes(),
            distinct = freqs.distinct(),
            depth = root.depth(),
            "built tree"
        );
        if self.config.verbosity >= Verbosity::Low {
            for (symbol, code) in codes.iter() {
                debug!(symbol, code = %code, "code");
            }
        }

        sink.write_bits(BITS_PER_INT, HUFF_TREE)?;
        write_header(&root, sink)?;

        source.reset()?;
        let encoded = encode_payload(&codes, source, sink, self.config.verbosity)?;

        debug!(
            header_bits = header_bits(&root),
            payload_bits = codes.encoded_bits(&freqs),
            "compressed {} bytes",
            encoded
        );
        Ok(encoded)
    }

    fn write_decompressed<I: BitSource, O: BitSink>(&self, source: &mut I, sink: &mut O) -> Result<u64> {
        let tag = source.read_bits(BITS_PER_INT)?;
        if tag != Some(HUFF_TREE) {
            return Err(Error::BadMagic { found: tag });
        }

        let root = read_header(source)?;
        debug!(leaves = root.leaf_count(), depth = root.depth(), "read tree header");
        if self.config.verbosity >= Verbosity::Low {
            for (symbol, code) in CodeTable::from_tree(&root).iter() {
                debug!(symbol, code = %code, "code");
            }
        }

        let decoded = decode_payload(&root, source, sink, self.config.verbosity)?;
        debug!("decompressed {} bytes", decoded);
        Ok(decoded)
    }
}

/// Close `sink` whatever `result` is. An earlier error takes precedence
/// over a close error.
fn close_after<O: BitSink>(sink: &mut O, result: Result<u64>) -> Result<u64> {
    let closed = sink.close();
    let value = result?;
    closed?;
    Ok(value)
}
