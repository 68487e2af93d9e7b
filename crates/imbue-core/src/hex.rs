//! `#rrggbb` strings for [`Rgb`].
//!
//! Output is always lowercase. Input may start with any run of whitespace
//! and `#`, hex digits are case-insensitive, and punctuation or whitespace
//! may separate the three byte groups (`ab-cd-ef`, `ab cd ef`). Anything
//! else, including a fourth group or a letter outside `a-f`, rejects the
//! whole string.

use std::iter::Peekable;
use std::str::{Chars, FromStr};

use crate::color_value::Rgb;
use crate::error::{ColorError, MalformedInput};

fn is_separator(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_whitespace()
}

fn hex_digit(chars: &mut Peekable<Chars<'_>>) -> Result<u8, MalformedInput> {
    match chars.next() {
        None => Err(MalformedInput::HexDigitCount),
        Some(c) if is_separator(c) => Err(MalformedInput::HexDigitCount),
        Some(c) => c
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or(MalformedInput::NonHexCharacter(c)),
    }
}

/// Parse three hex byte groups.
pub fn parse_hex(s: &str) -> Result<[u8; 3], MalformedInput> {
    let body = s.trim_start_matches(|c: char| c.is_whitespace() || c == '#');
    let mut chars = body.chars().peekable();

    let mut bytes = [0u8; 3];
    for (index, byte) in bytes.iter_mut().enumerate() {
        if index > 0 {
            while chars.next_if(|&c| is_separator(c)).is_some() {}
        }
        let high = hex_digit(&mut chars)?;
        let low = hex_digit(&mut chars)?;
        *byte = (high << 4) | low;
    }

    match chars.find(|c| !c.is_whitespace()) {
        None => Ok(bytes),
        Some(c) if c.is_ascii_hexdigit() => Err(MalformedInput::HexDigitCount),
        Some(c) => Err(MalformedInput::NonHexCharacter(c)),
    }
}

impl Rgb {
    /// Format as `#rrggbb`, quantizing each channel with
    /// [`to_bytes`](Rgb::to_bytes).
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn from_hex(s: &str) -> Result<Rgb, ColorError> {
        Ok(Rgb::from_bytes(parse_hex(s)?))
    }

    /// Replace this color with the parsed value. On error the color is
    /// left untouched.
    pub fn set_hex(&mut self, s: &str) -> Result<(), ColorError> {
        *self = Rgb::from_hex(s)?;
        Ok(())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}
