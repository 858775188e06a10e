//! End-to-end behaviour of the tree-header format.

use std::fs;

use treehuff::{compress_bytes, decompress_bytes, CodecConfig, Error, Verbosity};

fn round_trip(data: &[u8]) -> Vec<u8> {
    let packed = compress_bytes(data).unwrap();
    decompress_bytes(&packed).unwrap()
}

#[test]
fn empty_input_round_trips() {
    let packed = compress_bytes(b"").unwrap();
    // tag (4 bytes) + lone EOF leaf (10 bits) + empty EOF code
    assert_eq!(packed.len(), 6);
    assert!(decompress_bytes(&packed).unwrap().is_empty());
}

#[test]
fn single_repeated_byte_round_trips() {
    for len in [1usize, 2, 7, 8, 9, 1000] {
        let data = vec![b'q'; len];
        assert_eq!(round_trip(&data), data, "len {}", len);
    }
}

#[test]
fn every_byte_value_round_trips() {
    let data: Vec<u8> = (0u8..=255).rev().cycle().take(4099).collect();
    assert_eq!(round_trip(&data), data);
}

#[test]
fn text_shrinks() {
    let data = b"It was the best of times, it was the worst of times, it was the age of \
                 wisdom, it was the age of foolishness, it was the epoch of belief"
        .repeat(20);
    let packed = compress_bytes(&data).unwrap();
    assert!(packed.len() < data.len() * 3 / 4, "{} → {}", data.len(), packed.len());
    assert_eq!(decompress_bytes(&packed).unwrap(), data);
}

#[test]
fn compression_is_deterministic() {
    let data = b"abcabcabcdddeeffffffffffg".repeat(13);
    assert_eq!(compress_bytes(&data).unwrap(), compress_bytes(&data).unwrap());
}

#[test]
fn wrong_magic_is_rejected() {
    let mut packed = compress_bytes(b"hello world").unwrap();
    packed[3] ^= 0x01;
    let err = decompress_bytes(&packed).unwrap_err();
    assert!(matches!(err, Error::BadMagic { found: Some(0xface_8200) }));
    assert!(err.is_malformed());

    let err = decompress_bytes(b"PK\x03\x04 not ours").unwrap_err();
    assert!(matches!(err, Error::BadMagic { .. }));
}

#[test]
fn truncated_payload_is_rejected() {
    let data = b"abracadabra, abracadabra, abracadabra".repeat(4);
    let packed = compress_bytes(&data).unwrap();
    let cut = &packed[..packed.len() - 3];
    let err = decompress_bytes(cut).unwrap_err();
    assert!(matches!(err, Error::Truncated { .. }), "{:?}", err);
}

#[test]
fn truncated_header_is_rejected() {
    let packed = compress_bytes(b"abracadabra").unwrap();
    let err = decompress_bytes(&packed[..6]).unwrap_err();
    assert!(matches!(err, Error::Truncated { .. }), "{:?}", err);
}

#[test]
fn file_round_trip_reports_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("input.txt");
    let packed = dir.path().join("input.hf");
    let restored = dir.path().join("restored.txt");

    let data = b"huffman huffman huffman tree tree header".repeat(50);
    fs::write(&original, &data).unwrap();

    let config = CodecConfig::with_verbosity(Verbosity::Low);
    let summary = treehuff::compress_file(&original, &packed, &config).unwrap();
    assert_eq!(summary.bytes_in, data.len() as u64);
    assert_eq!(summary.bytes_out, fs::metadata(&packed).unwrap().len());

    let summary = treehuff::decompress_file(&packed, &restored, &config).unwrap();
    assert_eq!(summary.bytes_out, data.len() as u64);
    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn failed_file_decompress_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.hf");
    let out = dir.path().join("out.txt");
    fs::write(&bogus, b"definitely not compressed").unwrap();

    let err = treehuff::decompress_file(&bogus, &out, &CodecConfig::default()).unwrap_err();
    assert!(matches!(err, Error::BadMagic { .. }));
    assert!(!out.exists());
}

#[test]
fn missing_input_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = treehuff::compress_file(
        &dir.path().join("nope"),
        &dir.path().join("out"),
        &CodecConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_malformed());
}
