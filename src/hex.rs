//! Reading 24-bit RGB colors from `rrggbb` hex strings.

use std::{fmt, str::FromStr};

use crate::{color::Component, error::HexError, models::Srgb};

/// A color with 8 bits per channel, as written in a hex string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb8 {
    /// Create a new color from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Scale the channels to `[0, 1]` gamma encoded sRGB components.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb8 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_hex(s)
    }
}

/// Parse the first 6 characters of `hex` as `rrggbb`, case insensitive.
/// Anything after the sixth character is ignored.
pub fn try_parse_hex(hex: &str) -> Result<Rgb8, HexError> {
    let nibble = |position: usize, c: u8| -> Result<u8, HexError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(HexError::InvalidDigit { position }),
        }
    };

    let bytes = hex.as_bytes();
    let Some(digits) = bytes.get(..6) else {
        return Err(HexError::TooShort { len: hex.len() });
    };

    let byte = |index: usize| -> Result<u8, HexError> {
        let position = index * 2;
        let hi = nibble(position, digits[position])?;
        let lo = nibble(position + 1, digits[position + 1])?;
        Ok(hi << 4 | lo)
    };

    Ok(Rgb8::new(byte(0)?, byte(1)?, byte(2)?))
}

/// Parse `hex` leniently: anything [`try_parse_hex`] rejects is read as
/// black, so a bad color never stops a lookup.
pub fn parse_hex(hex: &str) -> Rgb8 {
    try_parse_hex(hex).unwrap_or_default()
}
