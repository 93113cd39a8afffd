//! The built-in fallback font: a fixed 5x7 pixel face covering printable ASCII.
//!
//! Glyphs sit in a 6x8 cell (one column of spacing, one row for the descender
//! gap) and are scaled by a whole-pixel factor derived from the requested point
//! size, so the face can stand in for any family at roughly the right size.
//! Characters outside `' '..='~'` render as `?`.

use crate::metrics::TextSize;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance of one cell, including the spacing column
pub const CELL_WIDTH: u32 = GLYPH_WIDTH + 1;
/// The nominal point size at which the font is drawn unscaled
pub const NATIVE_SIZE: u32 = 8;

/// Whole-pixel scale factor for a point size: `max(1, round(size / 8))`
pub fn scale_for(size_pt: u32) -> u32 {
    (size_pt.saturating_add(NATIVE_SIZE / 2) / NATIVE_SIZE).max(1)
}

/// Row bitmaps for `c`, top row first. Bit 4 is the leftmost column.
pub fn glyph(c: char) -> &'static [u8; 7] {
    let index = match c {
        ' '..='~' => c as usize - ' ' as usize,
        _ => '?' as usize - ' ' as usize,
    };
    &FONT_5X7[index]
}

/// Measure `text` at `size_pt`. The trailing spacing column is not counted.
pub fn measure(text: &str, size_pt: u32) -> TextSize {
    let scale = scale_for(size_pt);
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return TextSize {
            width: 0,
            height: GLYPH_HEIGHT.saturating_mul(scale),
        };
    }
    TextSize {
        width: chars
            .saturating_mul(CELL_WIDTH)
            .saturating_mul(scale)
            .saturating_sub(scale),
        height: GLYPH_HEIGHT.saturating_mul(scale),
    }
}

/// Visit every lit pixel of `text` laid out from `(0, 0)` at `size_pt`, each as a
/// `scale x scale` block given by its top-left corner
pub fn for_each_pixel<F: FnMut(u32, u32, u32)>(text: &str, size_pt: u32, mut f: F) {
    let scale = scale_for(size_pt);
    for (i, c) in text.chars().enumerate() {
        let origin = i as u32 * CELL_WIDTH * scale;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b10000 >> col) != 0 {
                    f(origin + col * scale, row as u32 * scale, scale);
                }
            }
        }
    }
}

/// 5x7 patterns for ' ' (32) through '~' (126)
const FONT_5X7: [[u8; 7]; 95] = [
    // space
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // !
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00000, 0b00100],
    // "
    [0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000],
    // #
    [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
    // $
    [0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100],
    // %
    [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011],
    // &
    [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
    // '
    [0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
    // (
    [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
    // )
    [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
    // *
    [0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000],
    // +
    [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
    // ,
    [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
    // -
    [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
    // .
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
    // /
    [0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000],
    // 0
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 1
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 2
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    // 3
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    // 4
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 5
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 6
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // 7
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 8
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 9
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
    // :
    [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
    // ;
    [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000],
    // <
    [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
    // =
    [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
    // >
    [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
    // ?
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
    // @
    [0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110],
    // A
    [0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001],
    // B
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
    // C
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
    // D
    [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
    // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
    // F
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
    // G
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
    // H
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
    // I
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // J
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
    // K
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
    // L
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
    // M
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
    // N
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
    // O
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    // P
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
    // Q
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
    // R
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
    // S
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
    // T
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
    // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    // V
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
    // W
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
    // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
    // Y
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
    // Z
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
    // [
    [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
    // backslash
    [0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000],
    // ]
    [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
    // ^
    [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000],
    // _
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
    // `
    [0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000],
    // a
    [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
    // b
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110],
    // c
    [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
    // d
    [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
    // e
    [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
    // f
    [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
    // g
    [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
    // h
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
    // i
    [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
    // j
    [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
    // k
    [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
    // l
    [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // m
    [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
    // n
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
    // o
    [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
    // p
    [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
    // q
    [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001],
    // r
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
    // s
    [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
    // t
    [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
    // u
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
    // v
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
    // w
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
    // x
    [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
    // y
    [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
    // z
    [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
    // {
    [0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010],
    // |
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
    // }
    [0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000],
    // ~
    [0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_rounds_to_nearest_whole_pixel() {
        assert_eq!(scale_for(1), 1);
        assert_eq!(scale_for(11), 1);
        assert_eq!(scale_for(12), 2);
        assert_eq!(scale_for(32), 4);
        assert_eq!(scale_for(64), 8);
        assert_eq!(scale_for(u32::MAX), u32::MAX / NATIVE_SIZE);
    }

    #[test]
    fn measures_cells_without_trailing_spacing() {
        assert_eq!(
            measure("Day 7", 8),
            TextSize {
                width: 29,
                height: 7
            }
        );
        assert_eq!(
            measure("Day 7", 64),
            TextSize {
                width: 232,
                height: 56
            }
        );
    }

    #[test]
    fn huge_sizes_saturate() {
        let size = measure("Day 7", u32::MAX);
        assert_eq!(size.width, u32::MAX - u32::MAX / NATIVE_SIZE);
        assert_eq!(size.height, 7 * (u32::MAX / NATIVE_SIZE));
    }

    #[test]
    fn unknown_characters_use_the_question_mark() {
        assert_eq!(glyph('é'), glyph('?'));
        assert_ne!(glyph('A'), glyph('?'));
    }

    #[test]
    fn pixel_blocks_stay_inside_the_measured_box() {
        let size = measure("Hi!", 24);
        let mut lit = 0;
        for_each_pixel("Hi!", 24, |x, y, s| {
            lit += 1;
            assert!(x + s <= size.width);
            assert!(y + s <= size.height);
        });
        assert!(lit > 0);
    }
}
