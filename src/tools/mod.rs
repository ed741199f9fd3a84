use std::fmt;
use std::fs;
use std::path::Path;

/// Errors from reading codeword input
#[derive(Debug)]
pub enum ParseError {
    /// Character that is not a hex digit
    InvalidHexDigit(char),
    /// Hex input with an odd number of digits
    OddHexLength(usize),
    /// Character other than `0` or `1` in a bit string
    InvalidBit(char),
    /// Input file could not be read
    Io(std::io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHexDigit(c) => write!(f, "invalid hex digit {c:?}"),
            Self::OddHexLength(len) => write!(f, "odd number of hex digits ({len})"),
            Self::InvalidBit(c) => write!(f, "invalid bit {c:?}, expected 0 or 1"),
            Self::Io(err) => write!(f, "failed to read input: {err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parse codewords written as hex, e.g. `"40 24 84 90"`.
///
/// Whitespace is ignored, as is an optional `0x` prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, ParseError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits = body
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ParseError::InvalidHexDigit(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    if digits.len() % 2 != 0 {
        return Err(ParseError::OddHexLength(digits.len()));
    }
    Ok(digits.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Parse a string of `0`/`1` characters into bits. Whitespace and `_` are skipped.
pub fn parse_bit_string(input: &str) -> Result<Vec<bool>, ParseError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(ParseError::InvalidBit(other)),
        })
        .collect()
}

/// Read a file of hex codewords.
pub fn read_hex_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, ParseError> {
    let text = fs::read_to_string(path)?;
    parse_hex(&text)
}

/// Format bytes as space-separated hex.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
