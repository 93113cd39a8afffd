use image::Rgba;

/// A colour, expressed as 8-bit RGBA. Alpha is only meaningful where the
/// colour is blended over an existing raster, such as the label box fill.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour with an explicit alpha. All channels range from 0 to 255
    pub const fn new_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new opaque colour in the grey scale, g ranges from 0 to 255
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour::new_rgb_bytes(g, g, g)
    }

    /// Parse a CSS-style hex colour: `#rrggbb` or `#rrggbbaa`, the leading `#` optional.
    /// Returns [None] if the string is not a hex colour.
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Colour::new_rgba_bytes(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    /// Return the same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Colour {
        Colour { a, ..self }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Colour::new_rgba_bytes(c.0, c.1, c.2, c.3)
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey_bytes(0);
    pub const WHITE: Colour = Colour::new_grey_bytes(255);
    /// Near-black used for title text on light boxes
    pub const INK: Colour = Colour::new_rgb_bytes(30, 30, 30);
    /// Mid grey used for subtitle text on light boxes
    pub const SLATE: Colour = Colour::new_rgb_bytes(80, 80, 80);
    /// Default label box fill: white at ~86% opacity
    pub const VEIL: Colour = Colour::new_rgba_bytes(255, 255, 255, 220);
    /// Warm off-white paper background
    pub const PAPER: Colour = Colour::new_rgb_bytes(0xf7, 0xf5, 0xf2);
}
