// src/tree.rs
//! Huffman tree and the greedy min-queue merge that builds it.
//!
//! Queue order is (weight, insertion sequence): among equal weights the node
//! queued first leaves first. Leaves are queued in ascending symbol order and
//! every merged node takes the next sequence number, so a given frequency
//! table always produces the same tree.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::alphabet::{FrequencyTable, Symbol, PSEUDO_EOF};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Internal node over `left` (bit 0) and `right` (bit 1).
    pub fn merge(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

// ── Priority queue entry ──────────────────────────────────────────────────────

struct Queued {
    seq: u64,
    node: HuffNode,
}

impl Queued {
    // BinaryHeap is a max-heap; reversing both keys pops lightest-then-oldest.
    fn key(&self) -> (Reverse<u64>, Reverse<u64>) {
        (Reverse(self.node.weight()), Reverse(self.seq))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Build the Huffman tree for `freqs`. The first node removed in each merge
/// becomes the left child.
pub fn build_tree(freqs: &FrequencyTable) -> HuffNode {
    let mut heap: BinaryHeap<Queued> = freqs
        .present()
        .enumerate()
        .map(|(seq, (symbol, weight))| Queued {
            seq: seq as u64,
            node: HuffNode::leaf(symbol, weight),
        })
        .collect();
    let mut next_seq = heap.len() as u64;

    while let Some(left) = heap.pop() {
        let Some(right) = heap.pop() else {
            return left.node;
        };
        heap.push(Queued {
            seq: next_seq,
            node: HuffNode::merge(left.node, right.node),
        });
        next_seq += 1;
    }

    // Unreachable for a real table: PSEUDO_EOF is always present.
    HuffNode::leaf(PSEUDO_EOF, 1)
}
