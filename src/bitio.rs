// src/bitio.rs
//! Bit source / sink seam the codec is written against, and adapters over
//! bitstream-io's big-endian reader and writer.
//!
//! All fields are MSB-first: the first bit written lands in bit 7 of the
//! first output byte.

use std::io::{self, Read, Seek, SeekFrom, Write};

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::Result;

/// Something the codec can pull fixed-width unsigned fields from.
pub trait BitSource {
    /// Next `width` bits (1..=32) as an unsigned value, or `None` once the
    /// underlying data is exhausted.
    fn read_bits(&mut self, width: u32) -> Result<Option<u32>>;

    /// Rewind to the first bit of the underlying data.
    fn reset(&mut self) -> Result<()>;
}

/// Something the codec can push fixed-width unsigned fields into.
pub trait BitSink {
    /// Write the low `width` bits of `value`. `width` of 0 writes nothing.
    fn write_bits(&mut self, width: u32, value: u32) -> Result<()>;

    /// Zero-pad the final partial byte and flush.
    fn close(&mut self) -> Result<()>;
}

// ── Source ───────────────────────────────────────────────────────────────────

pub struct BitInput<R: Read + Seek> {
    reader: BitReader<R, BigEndian>,
    bits_read: u64,
}

impl<R: Read + Seek> BitInput<R> {
    pub fn new(inner: R) -> Self {
        BitInput {
            reader: BitReader::endian(inner, BigEndian),
            bits_read: 0,
        }
    }

    /// Bits consumed since construction or the last `reset`.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }
}

impl<R: Read + Seek> BitSource for BitInput<R> {
    fn read_bits(&mut self, width: u32) -> Result<Option<u32>> {
        match self.reader.read::<u32>(width) {
            Ok(v) => {
                self.bits_read += u64::from(width);
                Ok(Some(v))
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek_bits(SeekFrom::Start(0))?;
        self.bits_read = 0;
        Ok(())
    }
}

// ── Sink ─────────────────────────────────────────────────────────────────────

pub struct BitOutput<W: Write> {
    writer: BitWriter<W, BigEndian>,
    bits_written: u64,
}

impl<W: Write> BitOutput<W> {
    pub fn new(inner: W) -> Self {
        BitOutput {
            writer: BitWriter::endian(inner, BigEndian),
            bits_written: 0,
        }
    }

    /// Payload bits written so far, excluding close-time padding.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Unwrap the underlying writer. Call `close` first or any partial
    /// byte is lost.
    pub fn into_inner(self) -> W {
        self.writer.into_writer()
    }
}

impl<W: Write> BitSink for BitOutput<W> {
    fn write_bits(&mut self, width: u32, value: u32) -> Result<()> {
        if width == 0 {
            return Ok(());
        }
        self.writer.write(width, value)?;
        self.bits_written += u64::from(width);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.writer.byte_align()?;
        if let Some(w) = self.writer.writer() {
            w.flush()?;
        }
        Ok(())
    }
}

/// Whole bytes needed to hold `bits`.
pub fn bits_to_bytes(bits: u64) -> u64 {
    bits.div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn fields_are_msb_first_and_zero_padded() {
        let mut out = BitOutput::new(Vec::new());
        out.write_bits(1, 1).unwrap();
        out.write_bits(9, 0x100).unwrap();
        out.write_bits(0, 0).unwrap();
        assert_eq!(out.bits_written(), 10);
        out.close().unwrap();
        // 1 1000_0000 0 + 6 pad bits
        assert_eq!(out.into_inner(), vec![0b1100_0000, 0b0000_0000]);
    }

    #[test]
    fn source_signals_end_then_rewinds() {
        let data = [0xAB, 0xCD];
        let mut input = BitInput::new(Cursor::new(&data[..]));
        assert_eq!(input.read_bits(4).unwrap(), Some(0xA));
        assert_eq!(input.read_bits(8).unwrap(), Some(0xBC));
        assert_eq!(input.read_bits(4).unwrap(), Some(0xD));
        assert_eq!(input.read_bits(1).unwrap(), None);
        assert_eq!(input.bits_read(), 16);

        input.reset().unwrap();
        assert_eq!(input.bits_read(), 0);
        assert_eq!(input.read_bits(8).unwrap(), Some(0xAB));
    }

    #[test]
    fn thirty_two_bit_fields() {
        let mut out = BitOutput::new(Vec::new());
        out.write_bits(32, 0xface_8201).unwrap();
        out.close().unwrap();
        let bytes = out.into_inner();
        assert_eq!(bytes, vec![0xfa, 0xce, 0x82, 0x01]);

        let mut input = BitInput::new(Cursor::new(bytes));
        assert_eq!(input.read_bits(32).unwrap(), Some(0xface_8201));
    }

    #[test]
    fn byte_rounding() {
        assert_eq!(bits_to_bytes(0), 0);
        assert_eq!(bits_to_bytes(1), 1);
        assert_eq!(bits_to_bytes(16), 2);
        assert_eq!(bits_to_bytes(17), 3);
    }
}
