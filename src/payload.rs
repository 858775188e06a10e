// src/payload.rs
//! Payload encode / decode. The payload is the concatenated codes of every
//! input byte followed by the code for PSEUDO_EOF, its only end marker.

use tracing::trace;

use crate::alphabet::{Symbol, BITS_PER_WORD, PSEUDO_EOF};
use crate::bitio::{BitSink, BitSource};
use crate::codes::CodeTable;
use crate::config::Verbosity;
use crate::error::{Error, Result};
use crate::tree::HuffNode;

/// Re-encode every 8-bit word left in `source`, then the end marker.
/// Returns the number of bytes encoded.
pub fn encode_payload<I: BitSource, O: BitSink>(
    codes: &CodeTable,
    source: &mut I,
    sink: &mut O,
    verbosity: Verbosity,
) -> Result<u64> {
    let mut encoded = 0u64;
    while let Some(word) = source.read_bits(BITS_PER_WORD)? {
        let symbol = word as Symbol;
        let code = codes.get(symbol).ok_or(Error::MissingCode { symbol })?;
        if verbosity >= Verbosity::High {
            trace!(symbol, code = %code, "encode");
        }
        code.write_to(sink)?;
        encoded += 1;
    }

    codes
        .get(PSEUDO_EOF)
        .ok_or(Error::MissingCode { symbol: PSEUDO_EOF })?
        .write_to(sink)?;
    Ok(encoded)
}

/// Walk `root` bit by bit, writing each decoded byte, until PSEUDO_EOF.
/// Returns the number of bytes written.
pub fn decode_payload<I: BitSource, O: BitSink>(
    root: &HuffNode,
    source: &mut I,
    sink: &mut O,
    verbosity: Verbosity,
) -> Result<u64> {
    // A lone leaf has the empty code, so no bits say how often it repeats.
    if let HuffNode::Leaf { symbol, .. } = root {
        return if *symbol == PSEUDO_EOF {
            Ok(0)
        } else {
            Err(Error::DegenerateTree { symbol: *symbol })
        };
    }

    let mut decoded = 0u64;
    loop {
        let symbol = read_symbol(root, source)?;
        if symbol == PSEUDO_EOF {
            return Ok(decoded);
        }
        if verbosity >= Verbosity::High {
            trace!(symbol, "decode");
        }
        sink.write_bits(BITS_PER_WORD, u32::from(symbol))?;
        decoded += 1;
    }
}

fn read_symbol<S: BitSource>(root: &HuffNode, source: &mut S) -> Result<Symbol> {
    let mut node = root;
    loop {
        match node {
            HuffNode::Leaf { symbol, .. } => return Ok(*symbol),
            HuffNode::Internal { left, right, .. } => {
                let bit = source
                    .read_bits(1)?
                    .ok_or_else(|| Error::truncated("payload before PSEUDO_EOF"))?;
                node = if bit == 0 { left } else { right };
            }
        }
    }
}
