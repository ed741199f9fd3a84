//! Segment walker over a payload bitstream.
//!
//! Reads a mode indicator, the character count and the character fields
//! of each segment in turn until the stream ends. Only byte-mode segments
//! produce output; see [`SUPPORTED_MODES`].

use crate::decoder::bitstream::BitCursor;
use crate::decoder::config;
use crate::decoder::mode::{MODE_INDICATOR_BITS, Mode};
use crate::decoder::tables::FieldWidths;

/// Modes the decoder steps through. Any other indicator stops decoding.
pub const SUPPORTED_MODES: [Mode; 3] = [Mode::StructuredAppend, Mode::Byte, Mode::EndOfMessage];

/// Why decoding stopped. Every variant is a normal end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Fewer than four bits left for a mode indicator
    OutOfBits,
    /// Indicator code with no defined mode
    UnknownMode(u8),
    /// Valid mode outside [`SUPPORTED_MODES`]
    UnsupportedMode(Mode),
    /// Terminator indicator
    EndOfMessage,
    /// Symbol version outside 1-40
    InvalidVersion,
}

/// Read the next mode indicator and decide whether to keep going.
///
/// Consumes four bits unless the cursor has fewer than four left.
pub fn next_segment<C: BitCursor + ?Sized>(cursor: &mut C) -> Result<Mode, Termination> {
    if !cursor.has_bits(MODE_INDICATOR_BITS) {
        return Err(Termination::OutOfBits);
    }
    let code = cursor.read_bits(MODE_INDICATOR_BITS) as u8;
    let mode = Mode::from_code(code).ok_or(Termination::UnknownMode(code))?;
    if !SUPPORTED_MODES.contains(&mode) {
        return Err(Termination::UnsupportedMode(mode));
    }
    if mode == Mode::EndOfMessage {
        return Err(Termination::EndOfMessage);
    }
    Ok(mode)
}

/// One-shot decoder for the payload of a single symbol
pub struct SegmentDecoder {
    symbol_version: u8,
    bytes: Vec<u8>,
}

impl SegmentDecoder {
    /// Decoder for a symbol of the given version (1-40)
    pub fn new(symbol_version: u8) -> Self {
        Self {
            symbol_version,
            bytes: Vec::new(),
        }
    }

    pub fn symbol_version(&self) -> u8 {
        self.symbol_version
    }

    /// Decode every segment the cursor holds and return the byte payload.
    pub fn decode<C: BitCursor + ?Sized>(self, cursor: &mut C) -> Vec<u8> {
        self.decode_with_termination(cursor).0
    }

    /// Like [`decode`](Self::decode), also reporting why decoding stopped.
    pub fn decode_with_termination<C: BitCursor + ?Sized>(
        mut self,
        cursor: &mut C,
    ) -> (Vec<u8>, Termination) {
        let mut segments = 0usize;
        let termination = loop {
            let mode = match next_segment(cursor) {
                Ok(mode) => mode,
                Err(stop) => break stop,
            };

            if mode == Mode::Byte {
                let Some((length_bits, char_bits)) =
                    FieldWidths::lookup(mode, self.symbol_version).both()
                else {
                    break Termination::InvalidVersion;
                };
                let count = cursor.read_bits(length_bits) as usize;
                self.bytes.reserve(count);
                for _ in 0..count {
                    self.bytes.push(cursor.read_bits(char_bits) as u8);
                }
                if cfg!(debug_assertions) && config::debug_enabled() {
                    log::trace!(
                        "segment {}: mode {} count {} ({} length bits)",
                        segments,
                        mode,
                        count,
                        length_bits
                    );
                }
            }
            segments += 1;
        };

        log::debug!(
            "payload decode stopped after {} segments ({:?}), {} bytes",
            segments,
            termination,
            self.bytes.len()
        );
        (self.bytes, termination)
    }
}
