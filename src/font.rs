use crate::{bitmap, metrics::TextSize, HeaderError};
use derive_more::Display;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// DejaVu Sans Mono, every glyph advancing 1233 of 2048 units
#[cfg(test)]
pub(crate) const DEJAVU_SANS_MONO: &[u8] = include_bytes!("../tests/assets/DejaVuSansMono.ttf");

/// A font description: a family name and a point size. This is what layout code
/// passes around; the glyph data itself lives in a [Font] that a
/// [FontProvider](crate::FontProvider) resolves from the family name.
///
/// Sizes are treated as pixels per em when rendering, the same way the header
/// scripts always have.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{family} {size_pt}pt")]
pub struct FittedFont {
    pub family: String,
    pub size_pt: u32,
}

impl FittedFont {
    pub fn new<S: ToString>(family: S, size_pt: u32) -> FittedFont {
        FittedFont {
            family: family.to_string(),
            size_pt,
        }
    }

    /// The same family at a different size
    pub fn with_size(&self, size_pt: u32) -> FittedFont {
        FittedFont {
            family: self.family.clone(),
            size_pt,
        }
    }
}

/// A loaded font face that can measure and rasterize text
pub enum Font {
    /// A parsed TrueType or OpenType font
    TrueType(TrueTypeFont),
    /// The built-in 5x7 bitmap face, see [bitmap](crate::bitmap)
    Builtin,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, HeaderError> {
        Ok(Font::TrueType(TrueTypeFont::load(bytes)?))
    }

    /// Read and parse a font file from disk
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Font, HeaderError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    /// Measure the bounding box of `text` at the given size
    pub fn measure(&self, text: &str, size_pt: u32) -> TextSize {
        match self {
            Font::TrueType(font) => font.measure(text, size_pt as f32),
            Font::Builtin => bitmap::measure(text, size_pt),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin)
    }
}

/// A parsed TrueType/OpenType face. Metrics come from [owned_ttf_parser]; glyph
/// coverage for drawing comes from [fontdue], parsed from the same bytes.
pub struct TrueTypeFont {
    pub face: OwnedFace,
    raster: fontdue::Font,
}

impl TrueTypeFont {
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, HeaderError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        let raster = fontdue::Font::from_bytes(face.as_slice(), fontdue::FontSettings::default())
            .map_err(HeaderError::FontRaster)?;

        Ok(TrueTypeFont { face, raster })
    }

    /// Obtain the family name of the font, if the font names one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: f32) -> f32 {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: f32) -> f32 {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: f32) -> f32 {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Glyph for `ch`, falling back to the replacement character and then `?`
    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Calculate the advance width of a given string of text at the given size
    pub fn width_of_text(&self, text: &str, size: f32) -> f32 {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(gid)
                        .unwrap_or_default() as f32
            })
            .sum()
    }

    /// Width is the advance width; height is the union of the glyphs' ink boxes,
    /// or the ascent-to-descent span for text without ink (e.g. only spaces)
    pub fn measure(&self, text: &str, size: f32) -> TextSize {
        let face = self.face.as_face_ref();
        let (y_min, y_max) = text
            .chars()
            .filter_map(|ch| self.glyph_id(ch))
            .filter_map(|gid| face.glyph_bounding_box(gid))
            .fold(None, |acc: Option<(i16, i16)>, bbox| match acc {
                Some((lo, hi)) => Some((lo.min(bbox.y_min), hi.max(bbox.y_max))),
                None => Some((bbox.y_min, bbox.y_max)),
            })
            .unwrap_or((face.descender(), face.ascender()));
        let height = self.scaling(size) * (y_max as f32 - y_min as f32);

        TextSize {
            width: self.width_of_text(text, size).ceil() as u32,
            height: height.ceil() as u32,
        }
    }

    /// Visit the coverage of every rasterized pixel of `text`, laid out with its left
    /// edge at x = 0 and its baseline at y = 0 (y grows downwards)
    pub fn for_each_coverage<F: FnMut(i32, i32, u8)>(&self, text: &str, size: f32, mut f: F) {
        let scaling = self.scaling(size);
        let mut pen_x = 0.0f32;
        for ch in text.chars() {
            let Some(gid) = self.glyph_id(ch) else {
                continue;
            };
            let (metrics, coverage) = self.raster.rasterize_indexed(gid.0, size);
            let left = pen_x.round() as i32 + metrics.xmin;
            let top = -(metrics.ymin + metrics.height as i32);
            if metrics.width > 0 {
                for (i, &c) in coverage.iter().enumerate() {
                    if c > 0 {
                        let col = (i % metrics.width) as i32;
                        let row = (i / metrics.width) as i32;
                        f(left + col, top + row, c);
                    }
                }
            }
            pen_x += scaling
                * self
                    .face
                    .as_face_ref()
                    .glyph_hor_advance(gid)
                    .unwrap_or_default() as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono() -> TrueTypeFont {
        TrueTypeFont::load(DEJAVU_SANS_MONO.to_vec()).expect("font parses")
    }

    #[test]
    fn names_its_family() {
        assert_eq!(mono().family().as_deref(), Some("DejaVu Sans Mono"));
    }

    #[test]
    fn width_is_the_rounded_up_advance() {
        let font = mono();
        // 5 * 1233 * 64 / 2048 = 192.66
        assert_eq!(font.measure("Day 7", 64.0).width, 193);
        // 5 * 1233 * 32 / 2048 = 96.33
        assert_eq!(font.measure("Day 7", 32.0).width, 97);
        assert_eq!(Font::TrueType(font).measure("Day 7", 64).width, 193);
    }

    #[test]
    fn height_is_the_ink_box() {
        let font = mono();
        let line = (font.ascent(64.0) - font.descent(64.0)).ceil() as u32;

        let caps = font.measure("HHH", 64.0).height;
        let descending = font.measure("Hyp", 64.0).height;
        assert!(caps > 0 && caps < descending, "{caps} vs {descending}");
        assert!(descending <= line);

        // no ink: falls back to the ascent-to-descent span
        assert_eq!(font.measure("   ", 64.0).height, line);
    }

    #[test]
    fn unknown_characters_use_a_replacement_glyph() {
        let font = mono();
        assert_eq!(
            font.measure("\u{10FFFD}", 64.0).width,
            font.measure("?", 64.0).width
        );
    }

    #[test]
    fn coverage_sits_on_the_baseline() {
        let font = mono();
        let mut rows = Vec::new();
        let mut right = 0;
        font.for_each_coverage("HH", 40.0, |x, y, coverage| {
            assert!(coverage > 0);
            rows.push(y);
            right = right.max(x);
        });
        // no descenders, so the ink ends on the baseline
        let lowest = *rows.iter().max().expect("ink");
        assert!((-2..=0).contains(&lowest), "lowest row {lowest}");
        assert!(*rows.iter().min().expect("ink") >= -(font.ascent(40.0).ceil() as i32));
        // two glyphs, the second starting one advance along
        assert!(right as f32 > font.width_of_text("H", 40.0));
        assert!(right as f32 <= font.width_of_text("HH", 40.0));
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert!(matches!(
            Font::load(b"not a font".to_vec()),
            Err(HeaderError::FaceParsingError(_))
        ));
    }
}
