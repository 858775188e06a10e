// src/error.rs
//! Error types for compress / decompress.

use thiserror::Error;

use crate::alphabet::Symbol;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can abort a compress or decompress call.
#[derive(Debug, Error)]
pub enum Error {
    /// The leading 32-bit tag is missing or is not the tree-header tag.
    #[error("illegal header: {}", describe_tag(.found))]
    BadMagic { found: Option<u32> },

    /// The bit source ran dry where more bits were required.
    #[error("truncated stream: end of data while reading {context}")]
    Truncated { context: &'static str },

    /// A header leaf carries a value outside the symbol alphabet.
    #[error("invalid leaf symbol {value} in tree header")]
    InvalidSymbol { value: u32 },

    /// The header nests deeper than any tree over the alphabet can.
    #[error("tree header nested {depth} levels deep")]
    TreeTooDeep { depth: usize },

    /// Single-leaf tree whose leaf is not the end-of-stream symbol.
    #[error("degenerate tree: lone leaf {symbol} is not PSEUDO_EOF")]
    DegenerateTree { symbol: Symbol },

    /// Encoder met a symbol the code table has no entry for.
    #[error("no code for symbol {symbol}")]
    MissingCode { symbol: Symbol },

    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_tag(found: &Option<u32>) -> String {
    match found {
        Some(tag) => format!("starts with 0x{tag:08x}"),
        None => "stream ended before magic tag".to_string(),
    }
}

impl Error {
    pub fn truncated(context: &'static str) -> Self {
        Error::Truncated { context }
    }

    /// True when the input itself is bad, as opposed to an I/O failure
    /// or an encoder bug.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::BadMagic { .. }
                | Error::Truncated { .. }
                | Error::InvalidSymbol { .. }
                | Error::TreeTooDeep { .. }
                | Error::DegenerateTree { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_magic_message_shows_tag() {
        let e = Error::BadMagic { found: Some(0xdeadbeef) };
        assert_eq!(e.to_string(), "illegal header: starts with 0xdeadbeef");
        let e = Error::BadMagic { found: None };
        assert!(e.to_string().contains("before magic tag"));
    }

    #[test]
    fn io_errors_are_not_malformed() {
        let e: Error = std::io::Error::other("disk on fire").into();
        assert!(!e.is_malformed());
        assert!(Error::truncated("payload").is_malformed());
        assert!(!Error::MissingCode { symbol: 7 }.is_malformed());
    }
}
