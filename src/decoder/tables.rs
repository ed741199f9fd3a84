use crate::decoder::mode::Mode;

/// Version size class sharing identical field widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolTier {
    /// Versions 1-9
    Small,
    /// Versions 10-26
    Medium,
    /// Versions 27-40
    Large,
}

impl SymbolTier {
    /// Tier for a version, or `None` outside 1-40
    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            1..=9 => Some(SymbolTier::Small),
            10..=26 => Some(SymbolTier::Medium),
            27..=40 => Some(SymbolTier::Large),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            SymbolTier::Small => 0,
            SymbolTier::Medium => 1,
            SymbolTier::Large => 2,
        }
    }
}

// Character count indicator widths from the QR Code specification (Model 2).
// Index: [mode][tier]
const LENGTH_FIELD_BITS: [[u8; 3]; 4] = [
    [10, 12, 14], // Numeric
    [9, 11, 13],  // Alphanumeric
    [8, 16, 16],  // Byte
    [8, 10, 12],  // Kanji
];

/// Width of the character count field, if `mode` has one and `version` is valid
pub fn length_field_bits(mode: Mode, version: u8) -> Option<usize> {
    let tier = SymbolTier::from_version(version)?;
    let row = mode_index(mode)?;
    Some(LENGTH_FIELD_BITS[row][tier.index()] as usize)
}

fn mode_index(mode: Mode) -> Option<usize> {
    match mode {
        Mode::Numeric => Some(0),
        Mode::Alphanumeric => Some(1),
        Mode::Byte => Some(2),
        Mode::Kanji => Some(3),
        _ => None,
    }
}

/// Field widths of one segment for a given mode and symbol version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWidths {
    /// Character count field width
    pub length_field_bits: Option<usize>,
    /// Width of each character field
    pub per_character_bits: Option<usize>,
}

impl FieldWidths {
    /// Look up both widths for `mode` at `version`
    pub fn lookup(mode: Mode, version: u8) -> Self {
        Self {
            length_field_bits: length_field_bits(mode, version),
            per_character_bits: mode.per_character_bits(),
        }
    }

    /// Both widths, or `None` if the segment carries no character data
    pub fn both(&self) -> Option<(usize, usize)> {
        Some((self.length_field_bits?, self.per_character_bits?))
    }
}
