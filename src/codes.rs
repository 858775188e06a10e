// src/codes.rs
//! Per-symbol bit codes derived from a Huffman tree.

use std::fmt;

use crate::alphabet::{FrequencyTable, Symbol, BITS_PER_INT, SYMBOL_COUNT};
use crate::bitio::BitSink;
use crate::error::Result;
use crate::tree::HuffNode;

/// Root-to-leaf path, `false` = left, `true` = right. Not bounded to a
/// machine word: heavily skewed inputs can push codes past 32 bits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Only the lone-leaf tree produces an empty code.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Emit the code MSB-first, in sink-sized chunks.
    pub fn write_to<S: BitSink>(&self, sink: &mut S) -> Result<()> {
        for chunk in self.bits.chunks(BITS_PER_INT as usize) {
            let value = chunk.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b));
            sink.write_bits(chunk.len() as u32, value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<&str> for Code {
    /// Parse a string of `0`/`1` characters; anything but `0` is a one bit.
    fn from(s: &str) -> Self {
        Code {
            bits: s.chars().map(|c| c != '0').collect(),
        }
    }
}

/// Symbol → code, one slot per symbol in the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut codes = vec![None; SYMBOL_COUNT];
        let mut path = Vec::new();
        assign(root, &mut path, &mut codes);
        CodeTable { codes }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(symbol as usize).and_then(Option::as_ref)
    }

    /// Present entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.as_ref().map(|c| (s as Symbol, c)))
    }

    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload size in bits for data with these frequencies, end marker
    /// included.
    pub fn encoded_bits(&self, freqs: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(s, c)| freqs.get(s) * c.len() as u64)
            .sum()
    }
}

fn assign(node: &HuffNode, path: &mut Vec<bool>, codes: &mut [Option<Code>]) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Some(Code { bits: path.clone() });
        }
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            assign(left, path, codes);
            path.pop();
            path.push(true);
            assign(right, path, codes);
            path.pop();
        }
    }
}
