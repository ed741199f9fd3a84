//! qr_payload - segment decoder for QR code payloads
//!
//! Takes the error-corrected data codewords of a QR symbol together with its
//! version and walks the mode-indicator segments, collecting the bytes of
//! every byte-mode segment. Detection, sampling and Reed-Solomon recovery
//! happen upstream.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Payload decoding (modes, field widths, cursors, segment walker)
pub mod decoder;
/// Input helpers shared by the command-line tool
pub mod tools;

pub use decoder::bitstream::{BitCursor, BitReader, CodewordReader};
pub use decoder::mode::Mode;
pub use decoder::segment::{SUPPORTED_MODES, SegmentDecoder, Termination};
pub use decoder::tables::{FieldWidths, SymbolTier};

use rayon::prelude::*;

/// Decode the byte payload of one symbol from its data codewords
///
/// # Arguments
/// * `codewords` - Error-corrected data codewords, MSB first
/// * `version` - Symbol version (1-40)
///
/// # Returns
/// Bytes of all byte-mode segments up to the first stop condition
pub fn decode_payload(codewords: &[u8], version: u8) -> Vec<u8> {
    let mut cursor = CodewordReader::new(codewords);
    SegmentDecoder::new(version).decode(&mut cursor)
}

/// Decode the byte payload from one bool per bit
pub fn decode_payload_bits(bits: &[bool], version: u8) -> Vec<u8> {
    let mut cursor = BitReader::new(bits);
    SegmentDecoder::new(version).decode(&mut cursor)
}

/// Decode many independent symbols, given as `(codewords, version)` pairs
///
/// Batches of at least `QR_PARALLEL_MIN_BATCH` symbols (default 64) are
/// spread across the rayon thread pool. Output order follows input order.
pub fn decode_payloads(symbols: &[(&[u8], u8)]) -> Vec<Vec<u8>> {
    if symbols.len() >= decoder::config::parallel_min_batch() {
        symbols
            .par_iter()
            .map(|&(codewords, version)| decode_payload(codewords, version))
            .collect()
    } else {
        symbols
            .iter()
            .map(|&(codewords, version)| decode_payload(codewords, version))
            .collect()
    }
}
