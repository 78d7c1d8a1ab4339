use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// Display colour of a player's pieces, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PieceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Preset colours offered by the colour picker.
pub const PALETTE: [PieceColor; 8] = [
    PieceColor::rgb(0xff, 0x00, 0x00),
    PieceColor::rgb(0x00, 0x00, 0xff),
    PieceColor::rgb(0xff, 0xd7, 0x00),
    PieceColor::rgb(0x00, 0xa8, 0x4f),
    PieceColor::rgb(0xff, 0x8c, 0x00),
    PieceColor::rgb(0x8a, 0x2b, 0xe2),
    PieceColor::rgb(0x00, 0xce, 0xd1),
    PieceColor::rgb(0xff, 0x69, 0xb4),
];

impl PieceColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        PieceColor { r, g, b }
    }

    /// Default colour for the first player
    pub const fn player_one_default() -> Self {
        PieceColor::rgb(0xff, 0x00, 0x00)
    }

    /// Default colour for the second player
    pub const fn player_two_default() -> Self {
        PieceColor::rgb(0x00, 0x00, 0xff)
    }

    /// Next colour in [`PALETTE`] after this one. Colours outside the
    /// palette move to its first entry.
    pub fn next_in_palette(self) -> Self {
        match PALETTE.iter().position(|&c| c == self) {
            Some(i) => PALETTE[(i + 1) % PALETTE.len()],
            None => PALETTE[0],
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for PieceColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(s.to_string()))
        };
        Ok(PieceColor::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for PieceColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PieceColor> for String {
    fn from(color: PieceColor) -> String {
        color.to_string()
    }
}
