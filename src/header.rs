// src/header.rs
//! Tree header: a preorder bit serialization of the Huffman tree.
//!
//!   internal node → `0`, left subtree, right subtree
//!   leaf          → `1`, symbol in LEAF_VALUE_BITS bits
//!
//! No length prefix; the bits alone determine where the header ends.

use crate::alphabet::{Symbol, ALPH_SIZE, LEAF_VALUE_BITS, PSEUDO_EOF};
use crate::bitio::{BitSink, BitSource};
use crate::error::{Error, Result};
use crate::tree::HuffNode;

/// Deepest internal node a tree over the full alphabet can have.
const MAX_INTERNAL_DEPTH: usize = ALPH_SIZE - 1;

pub fn write_header<S: BitSink>(node: &HuffNode, sink: &mut S) -> Result<()> {
    match node {
        HuffNode::Internal { left, right, .. } => {
            sink.write_bits(1, 0)?;
            write_header(left, sink)?;
            write_header(right, sink)
        }
        HuffNode::Leaf { symbol, .. } => {
            sink.write_bits(1, 1)?;
            sink.write_bits(LEAF_VALUE_BITS, u32::from(*symbol))
        }
    }
}

/// Read a header written by `write_header`. Rebuilt nodes carry weight 0.
pub fn read_header<S: BitSource>(source: &mut S) -> Result<HuffNode> {
    read_node(source, 0)
}

fn read_node<S: BitSource>(source: &mut S, depth: usize) -> Result<HuffNode> {
    let flag = source
        .read_bits(1)?
        .ok_or_else(|| Error::truncated("tree header"))?;

    if flag == 0 {
        if depth > MAX_INTERNAL_DEPTH {
            return Err(Error::TreeTooDeep { depth });
        }
        let left = read_node(source, depth + 1)?;
        let right = read_node(source, depth + 1)?;
        return Ok(HuffNode::merge(left, right));
    }

    let value = source
        .read_bits(LEAF_VALUE_BITS)?
        .ok_or_else(|| Error::truncated("tree leaf value"))?;
    if value > u32::from(PSEUDO_EOF) {
        return Err(Error::InvalidSymbol { value });
    }
    Ok(HuffNode::leaf(value as Symbol, 0))
}

/// Bits `write_header` emits for `node`.
pub fn header_bits(node: &HuffNode) -> u64 {
    match node {
        HuffNode::Internal { left, right, .. } => 1 + header_bits(left) + header_bits(right),
        HuffNode::Leaf { .. } => 1 + u64::from(LEAF_VALUE_BITS),
    }
}
