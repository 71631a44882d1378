//! Qualitative slice palette (Tableau 10)

use ratatui::style::Color;
use serde::{Serialize, Serializer};

/// An sRGB slice color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SliceColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<SliceColor> for Color {
    fn from(c: SliceColor) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

impl Serialize for SliceColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

pub const TABLEAU10: [SliceColor; 10] = [
    SliceColor::rgb(0x4e, 0x79, 0xa7),
    SliceColor::rgb(0xf2, 0x8e, 0x2c),
    SliceColor::rgb(0xe1, 0x57, 0x59),
    SliceColor::rgb(0x76, 0xb7, 0xb2),
    SliceColor::rgb(0x59, 0xa1, 0x4f),
    SliceColor::rgb(0xed, 0xc9, 0x48),
    SliceColor::rgb(0xb0, 0x7a, 0xa1),
    SliceColor::rgb(0xff, 0x9d, 0xa7),
    SliceColor::rgb(0x9c, 0x75, 0x5f),
    SliceColor::rgb(0xba, 0xb0, 0xab),
];

/// Color for the slice at `index`, cycling through the palette
pub fn slice_color(index: usize) -> SliceColor {
    TABLEAU10[index % TABLEAU10.len()]
}
