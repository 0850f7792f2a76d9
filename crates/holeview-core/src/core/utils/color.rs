use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static NAMED_COLORS: Map<&'static str, [u8; 3]> = phf_map! {
    "black" => [0x00, 0x00, 0x00],
    "white" => [0xff, 0xff, 0xff],
    "red" => [0xff, 0x00, 0x00],
    "green" => [0x00, 0x80, 0x00],
    "blue" => [0x00, 0x00, 0xff],
    "orange" => [0xff, 0xa5, 0x00],
    "purple" => [0x80, 0x00, 0x80],
    "gray" => [0x80, 0x80, 0x80],
    "grey" => [0x80, 0x80, 0x80],
    "lightgray" => [0xd3, 0xd3, 0xd3],
    "lightgrey" => [0xd3, 0xd3, 0xd3],
    "darkgray" => [0xa9, 0xa9, 0xa9],
    "steelblue" => [0x46, 0x82, 0xb4],
    "crimson" => [0xdc, 0x14, 0x3c],
    "teal" => [0x00, 0x80, 0x80],
    "goldenrod" => [0xda, 0xa5, 0x20],
    "navy" => [0x00, 0x00, 0x80],
    "tab:blue" => [0x1f, 0x77, 0xb4],
    "tab:orange" => [0xff, 0x7f, 0x0e],
    "tab:green" => [0x2c, 0xa0, 0x2c],
    "tab:red" => [0xd6, 0x27, 0x28],
    "tab:purple" => [0x94, 0x67, 0xbd],
    "tab:brown" => [0x8c, 0x56, 0x4b],
    "tab:pink" => [0xe3, 0x77, 0xc2],
    "tab:gray" => [0x7f, 0x7f, 0x7f],
    "tab:olive" => [0xbc, 0xbd, 0x22],
    "tab:cyan" => [0x17, 0xbe, 0xcf],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown color '{0}'. Expected a color name (e.g. 'lightgray') or '#rrggbb'.")]
pub struct ParseColorError(pub String);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .get(name.to_lowercase().as_str())
            .map(|&[r, g, b]| Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(ParseColorError(s.to_string()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
            };
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }
        Self::named(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
