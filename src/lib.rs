// src/lib.rs
//! treehuff: order-0 Huffman compression with a self-describing tree header.
//!
//! ```
//! let packed = treehuff::compress_bytes(b"abracadabra")?;
//! assert_eq!(treehuff::decompress_bytes(&packed)?, b"abracadabra");
//! # Ok::<(), treehuff::Error>(())
//! ```
pub mod alphabet;
pub mod bitio;
pub mod codes;
pub mod config;
pub mod error;
pub mod header;
pub mod payload;
pub mod processor;
pub mod tree;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

use tracing::{info, warn};

pub use bitio::{BitInput, BitOutput, BitSink, BitSource};
pub use config::{CodecConfig, Verbosity};
pub use error::{Error, Result};
pub use processor::HuffProcessor;

use bitio::bits_to_bytes;

/// Byte counts on either side of a file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// File layout (bit-packed, MSB-first):
///   Bits 0..32:   magic tag 0xface8201
///   Then:         preorder tree header, `0` per internal node,
///                 `1` + 9-bit symbol per leaf
///   Then:         one code per input byte, then the PSEUDO_EOF code
///   Final byte:   zero-padded
pub fn compress_bytes(input: &[u8]) -> Result<Vec<u8>> {
    let mut source = BitInput::new(Cursor::new(input));
    let mut sink = BitOutput::new(Vec::new());
    HuffProcessor::default().compress(&mut source, &mut sink)?;
    Ok(sink.into_inner())
}

pub fn decompress_bytes(input: &[u8]) -> Result<Vec<u8>> {
    let mut source = BitInput::new(Cursor::new(input));
    let mut sink = BitOutput::new(Vec::new());
    HuffProcessor::default().decompress(&mut source, &mut sink)?;
    Ok(sink.into_inner())
}

/// Compress `input` into `output`. On failure the partially written output
/// file is removed, as with `decompress_file`.
pub fn compress_file(input: &Path, output: &Path, config: &CodecConfig) -> Result<Summary> {
    info!("compressing {} → {}", input.display(), output.display());
    let mut source = BitInput::new(BufReader::new(File::open(input)?));
    let mut sink = BitOutput::new(BufWriter::new(File::create(output)?));

    match HuffProcessor::new(*config).compress(&mut source, &mut sink) {
        Ok(bytes_in) => Ok(Summary {
            bytes_in,
            bytes_out: bits_to_bytes(sink.bits_written()),
        }),
        Err(e) => {
            drop(sink);
            remove_partial(output);
            Err(e)
        }
    }
}

pub fn decompress_file(input: &Path, output: &Path, config: &CodecConfig) -> Result<Summary> {
    info!("decompressing {} → {}", input.display(), output.display());
    let mut source = BitInput::new(BufReader::new(File::open(input)?));
    let mut sink = BitOutput::new(BufWriter::new(File::create(output)?));

    match HuffProcessor::new(*config).decompress(&mut source, &mut sink) {
        Ok(bytes_out) => Ok(Summary {
            bytes_in: fs::metadata(input)?.len(),
            bytes_out,
        }),
        Err(e) => {
            drop(sink);
            remove_partial(output);
            Err(e)
        }
    }
}

fn remove_partial(output: &Path) {
    if let Err(e) = fs::remove_file(output) {
        warn!("could not remove {}: {}", output.display(), e);
    }
}
