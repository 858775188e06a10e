// src/alphabet.rs
//! Symbol alphabet and frequency counting.
//! Single source of truth for every field width in the format.

use std::ops::Index;

use crate::bitio::BitSource;
use crate::error::Result;

/// A literal byte (0..=255) or `PSEUDO_EOF` (256).
pub type Symbol = u16;

// ── Field widths ──────────────────────────────────────────────────────────────
pub const BITS_PER_WORD:   u32 = 8;
pub const BITS_PER_INT:    u32 = 32;
/// Leaf symbols need one bit more than a byte to reach `PSEUDO_EOF`.
pub const LEAF_VALUE_BITS: u32 = BITS_PER_WORD + 1;

// ── Alphabet ──────────────────────────────────────────────────────────────────
pub const ALPH_SIZE:    usize  = 1 << BITS_PER_WORD;
pub const PSEUDO_EOF:   Symbol = ALPH_SIZE as Symbol;
/// Number of distinct symbols, `PSEUDO_EOF` included.
pub const SYMBOL_COUNT: usize  = ALPH_SIZE + 1;

// ── Magic tags ────────────────────────────────────────────────────────────────
pub const HUFF_NUMBER: u32 = 0xface_8200;
/// Tag for the tree-header format, the only format this crate writes.
pub const HUFF_TREE:   u32 = HUFF_NUMBER | 1;

/// Occurrence count per symbol. `PSEUDO_EOF` is always counted exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    fn empty() -> Self {
        let mut counts = [0u64; SYMBOL_COUNT];
        counts[PSEUDO_EOF as usize] = 1;
        FrequencyTable { counts }
    }

    /// Count 8-bit words until the source runs dry. Leaves the source at its
    /// end; the caller must `reset` it before reading it again.
    pub fn count<S: BitSource>(source: &mut S) -> Result<Self> {
        let mut table = Self::empty();
        while let Some(word) = source.read_bits(BITS_PER_WORD)? {
            table.counts[word as usize] += 1;
        }
        Ok(table)
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::empty();
        for &b in bytes {
            table.counts[b as usize] += 1;
        }
        table
    }

    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts[symbol as usize]
    }

    /// Symbols with a nonzero count, in ascending order.
    pub fn present(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(s, &c)| (s as Symbol, c))
    }

    /// Number of symbols with a nonzero count. Never less than 1.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Literal bytes counted, `PSEUDO_EOF` excluded.
    pub fn total_bytes(&self) -> u64 {
        self.counts[..ALPH_SIZE].iter().sum()
    }
}

impl Index<Symbol> for FrequencyTable {
    type Output = u64;

    fn index(&self, symbol: Symbol) -> &u64 {
        &self.counts[symbol as usize]
    }
}
