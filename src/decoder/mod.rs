//! QR payload decoding
//!
//! Turns the error-corrected data codewords of a symbol into raw bytes:
//! - Mode indicators and their field widths
//! - Version tiers for character count fields
//! - Bit cursors over bits or packed codewords
//! - The segment walker itself

/// Bit cursors and bit/codeword conversion
pub mod bitstream;
/// Environment-driven tuning knobs
pub mod config;
/// Segment mode indicators
pub mod mode;
/// Segment walker producing the byte payload
pub mod segment;
/// Character count field widths per version tier
pub mod tables;
