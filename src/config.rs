// src/config.rs
//! Codec configuration. Passed to `HuffProcessor::new`; there is no global
//! debug state.

use tracing::Level;

/// How much diagnostic detail the codec emits on top of its normal
/// `debug!` summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Off,
    /// Per-symbol code table.
    Low,
    /// Per-symbol code table plus a per-byte trace of the payload.
    High,
}

impl Verbosity {
    /// Map a repeated CLI flag count (`-v`, `-vv`) to a verbosity.
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Off,
            1 => Verbosity::Low,
            _ => Verbosity::High,
        }
    }
}

impl From<Verbosity> for Level {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Off  => Level::INFO,
            Verbosity::Low  => Level::DEBUG,
            Verbosity::High => Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CodecConfig {
    pub verbosity: Verbosity,
}

impl CodecConfig {
    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        CodecConfig { verbosity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrences_saturate_at_high() {
        assert_eq!(Verbosity::from_occurrences(0), Verbosity::Off);
        assert_eq!(Verbosity::from_occurrences(1), Verbosity::Low);
        assert_eq!(Verbosity::from_occurrences(7), Verbosity::High);
        assert!(Verbosity::High > Verbosity::Low);
    }

    #[test]
    fn default_is_silent() {
        assert_eq!(CodecConfig::default().verbosity, Verbosity::Off);
        assert_eq!(Level::from(Verbosity::Off), Level::INFO);
    }
}
