//! 16-bit 5-6-5 pixel encoding for panels that take packed colors

use super::Rgb;

/// Pack a color into 5-6-5, dropping the low bits of each channel
#[allow(clippy::cast_lossless)]
pub const fn pack(color: Rgb) -> u16 {
    ((color.r as u16 & 0xF8) << 8) | ((color.g as u16 & 0xFC) << 3) | (color.b as u16 >> 3)
}

/// Expand a 5-6-5 value back to 8 bits per channel
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack(packed: u16) -> Rgb {
    Rgb {
        r: (((packed >> 11) & 0x1F) << 3) as u8,
        g: (((packed >> 5) & 0x3F) << 2) as u8,
        b: ((packed & 0x1F) << 3) as u8,
    }
}
