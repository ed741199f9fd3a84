//! Integration tests for payload segment decoding
//!
//! These exercise the public API end to end: byte-mode segments built bit by
//! bit are fed through both cursor types and every stop condition is checked
//! for its effect on the returned bytes and on cursor position.

use qr_payload::decoder::bitstream::{bits_to_codewords, codewords_to_bits};
use qr_payload::{
    BitReader, CodewordReader, FieldWidths, Mode, SegmentDecoder, SymbolTier, Termination,
    decode_payload, decode_payload_bits, decode_payloads,
};

fn push_bits(bits: &mut Vec<bool>, value: u32, count: usize) {
    for i in (0..count).rev() {
        bits.push(((value >> i) & 1) != 0);
    }
}

fn push_byte_segment(bits: &mut Vec<bool>, data: &[u8], version: u8) {
    let length_bits = Mode::Byte.length_field_bits(version).expect("valid version");
    push_bits(bits, Mode::Byte.code() as u32, 4);
    push_bits(bits, data.len() as u32, length_bits);
    for &byte in data {
        push_bits(bits, byte as u32, 8);
    }
}

#[test]
fn test_tier_resolution() {
    for v in 1..=9 {
        assert_eq!(SymbolTier::from_version(v), Some(SymbolTier::Small));
    }
    for v in 10..=26 {
        assert_eq!(SymbolTier::from_version(v), Some(SymbolTier::Medium));
    }
    for v in 27..=40 {
        assert_eq!(SymbolTier::from_version(v), Some(SymbolTier::Large));
    }
    assert_eq!(SymbolTier::from_version(0), None);
    assert_eq!(SymbolTier::from_version(41), None);
}

#[test]
fn test_byte_character_width_independent_of_version() {
    for v in [1, 9, 10, 26, 27, 40] {
        assert_eq!(FieldWidths::lookup(Mode::Byte, v).per_character_bits, Some(8));
    }
}

#[test]
fn test_round_trip_every_version() {
    let message = b"https://example.com/?q=\x00\xff";
    for version in 1..=40 {
        let mut bits = Vec::new();
        push_byte_segment(&mut bits, message, version);
        assert_eq!(decode_payload_bits(&bits, version), message, "version {version}");
    }
}

#[test]
fn test_fewer_than_four_bits() {
    for len in 0..4 {
        let bits = vec![true; len];
        assert!(decode_payload_bits(&bits, 1).is_empty());
    }
}

#[test]
fn test_end_of_message_consumes_four_bits() {
    let mut bits = Vec::new();
    push_bits(&mut bits, 0b0000, 4);
    push_byte_segment(&mut bits, b"ignored", 1);

    let mut reader = BitReader::new(&bits);
    let bytes = SegmentDecoder::new(1).decode(&mut reader);
    assert!(bytes.is_empty());
    assert_eq!(reader.position(), 4);
}

#[test]
fn test_unsupported_mode_first() {
    let mut bits = Vec::new();
    push_bits(&mut bits, 0b0001, 4);
    push_bits(&mut bits, 3, 10);
    push_bits(&mut bits, 512, 10);

    let mut reader = BitReader::new(&bits);
    let (bytes, stop) = SegmentDecoder::new(1).decode_with_termination(&mut reader);
    assert!(bytes.is_empty());
    assert_eq!(stop, Termination::UnsupportedMode(Mode::Numeric));
}

#[test]
fn test_version_1_two_bytes() {
    let mut bits = Vec::new();
    push_bits(&mut bits, 0b0100, 4);
    push_bits(&mut bits, 0b0000_0010, 8);
    push_bits(&mut bits, 0b0100_0001, 8);
    push_bits(&mut bits, 0b0100_0010, 8);
    assert_eq!(decode_payload_bits(&bits, 1), vec![0x41, 0x42]);
}

#[test]
fn test_version_15_empty_segment_consumes_20_bits() {
    let mut bits = Vec::new();
    push_bits(&mut bits, 0b0100, 4);
    push_bits(&mut bits, 0, 16);
    push_bits(&mut bits, 0b0110, 4);

    let mut reader = BitReader::new(&bits);
    let (bytes, stop) = SegmentDecoder::new(15).decode_with_termination(&mut reader);
    assert!(bytes.is_empty());
    // The second indicator is read from bit 20 and is undefined.
    assert_eq!(stop, Termination::UnknownMode(6));
    assert_eq!(reader.position(), 24);
}

#[test]
fn test_multiple_segments_concatenate() {
    let mut bits = Vec::new();
    push_byte_segment(&mut bits, b"Hello, ", 20);
    push_bits(&mut bits, 0b0011, 4);
    push_byte_segment(&mut bits, b"world", 20);
    push_bits(&mut bits, 0b0000, 4);
    push_byte_segment(&mut bits, b"!", 20);

    assert_eq!(decode_payload_bits(&bits, 20), b"Hello, world");
}

#[test]
fn test_codeword_cursor_matches_bit_cursor() {
    let mut bits = Vec::new();
    push_byte_segment(&mut bits, b"QR payload", 30);
    push_bits(&mut bits, 0b0000, 4);
    while bits.len() % 8 != 0 {
        bits.push(false);
    }
    let codewords = bits_to_codewords(&bits);
    assert_eq!(codewords_to_bits(&codewords), bits);

    let mut cursor = CodewordReader::new(&codewords);
    let from_codewords = SegmentDecoder::new(30).decode(&mut cursor);
    assert_eq!(from_codewords, b"QR payload");
    assert_eq!(decode_payload(&codewords, 30), decode_payload_bits(&bits, 30));
}

#[test]
fn test_padding_codewords_after_terminator() {
    // "A" at version 1, terminator, then the standard 0xEC/0x11 pad pattern.
    let codewords = [0x40, 0x14, 0x10, 0xEC, 0x11, 0xEC, 0x11];
    assert_eq!(decode_payload(&codewords, 1), b"A");
}

#[test]
fn test_invalid_version_returns_nothing() {
    let mut bits = Vec::new();
    push_byte_segment(&mut bits, b"abc", 1);
    assert!(decode_payload_bits(&bits, 0).is_empty());
    assert!(decode_payload_bits(&bits, 41).is_empty());
}

#[test]
fn test_batch_decode() {
    let mut small = Vec::new();
    push_byte_segment(&mut small, b"small", 5);
    let small = bits_to_codewords_padded(small);

    let mut large = Vec::new();
    push_byte_segment(&mut large, b"large", 35);
    let large = bits_to_codewords_padded(large);

    let symbols: Vec<(&[u8], u8)> = vec![
        (small.as_slice(), 5),
        (large.as_slice(), 35),
        (large.as_slice(), 5),
        (&[], 1),
    ];
    let results = decode_payloads(&symbols);
    assert_eq!(results[0], b"small");
    assert_eq!(results[1], b"large");
    // Wrong version: the 8-bit count reads the high byte of the 16-bit one.
    assert!(results[2].is_empty());
    assert!(results[3].is_empty());
}

fn bits_to_codewords_padded(mut bits: Vec<bool>) -> Vec<u8> {
    while bits.len() % 8 != 0 {
        bits.push(false);
    }
    bits_to_codewords(&bits)
}
