//! Segment mode indicators (4-bit codes at the start of every segment)
use std::fmt;

use crate::decoder::tables;

/// Width of a mode indicator in bits
pub const MODE_INDICATOR_BITS: usize = 4;

/// Encoding mode of a payload segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Numeric mode (0001)
    Numeric,
    /// Alphanumeric mode (0010)
    Alphanumeric,
    /// 8-bit byte mode (0100)
    Byte,
    /// Kanji mode (1000)
    Kanji,
    /// Structured append header (0011)
    StructuredAppend,
    /// Extended channel interpretation (0111)
    Eci,
    /// FNC1 in first position (0101)
    Fnc1First,
    /// FNC1 in second position (1001)
    Fnc1Second,
    /// Terminator (0000)
    EndOfMessage,
}

impl Mode {
    /// All modes, ordered by indicator code.
    pub const ALL: [Mode; 9] = [
        Mode::EndOfMessage,
        Mode::Numeric,
        Mode::Alphanumeric,
        Mode::StructuredAppend,
        Mode::Byte,
        Mode::Fnc1First,
        Mode::Eci,
        Mode::Kanji,
        Mode::Fnc1Second,
    ];

    /// Resolve a 4-bit indicator. Code 6 and anything above 9 are undefined.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Mode::EndOfMessage),
            1 => Some(Mode::Numeric),
            2 => Some(Mode::Alphanumeric),
            3 => Some(Mode::StructuredAppend),
            4 => Some(Mode::Byte),
            5 => Some(Mode::Fnc1First),
            7 => Some(Mode::Eci),
            8 => Some(Mode::Kanji),
            9 => Some(Mode::Fnc1Second),
            _ => None,
        }
    }

    /// The 4-bit indicator code for this mode
    pub fn code(self) -> u8 {
        match self {
            Mode::EndOfMessage => 0,
            Mode::Numeric => 1,
            Mode::Alphanumeric => 2,
            Mode::StructuredAppend => 3,
            Mode::Byte => 4,
            Mode::Fnc1First => 5,
            Mode::Eci => 7,
            Mode::Kanji => 8,
            Mode::Fnc1Second => 9,
        }
    }

    /// Indicator as a binary string, e.g. `"0100"` for byte mode
    pub fn indicator(self) -> String {
        format!("{:04b}", self.code())
    }

    /// Whether a character count field follows the indicator
    pub fn has_length_field(self) -> bool {
        matches!(
            self,
            Mode::Numeric | Mode::Alphanumeric | Mode::Byte | Mode::Kanji
        )
    }

    /// Bits per character field. Independent of symbol version.
    pub fn per_character_bits(self) -> Option<usize> {
        match self {
            Mode::Numeric => Some(10),
            Mode::Alphanumeric => Some(11),
            Mode::Byte => Some(8),
            Mode::Kanji => Some(13),
            _ => None,
        }
    }

    /// Width of the character count field for `version` (1-40)
    pub fn length_field_bits(self, version: u8) -> Option<usize> {
        tables::length_field_bits(self, version)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.indicator())
    }
}
