use crate::font::FittedFont;
use crate::provider::{FontLibrary, FontProvider};

/// The pixel bounding box of a measured line of text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// The measurement primitive every layout step is built on. Implementations must
/// be pure: the same text and font always measure the same.
pub trait TextMeasure {
    /// Measure `text` set in `font`. `text` is expected to be non-empty and
    /// `font.size_pt` positive.
    fn measure(&self, text: &str, font: &FittedFont) -> TextSize;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str, font: &FittedFont) -> TextSize {
        (**self).measure(text, font)
    }
}

impl TextMeasure for FontLibrary {
    fn measure(&self, text: &str, font: &FittedFont) -> TextSize {
        self.resolve(&font.family).measure(text, font.size_pt)
    }
}

/// Measures every character at `em` of the font size, so width is exactly
/// linear in both length and size
#[cfg(test)]
pub(crate) struct LinearMeasure {
    pub em: f64,
}

#[cfg(test)]
impl TextMeasure for LinearMeasure {
    fn measure(&self, text: &str, font: &FittedFont) -> TextSize {
        let size = font.size_pt as f64;
        TextSize {
            width: (text.chars().count() as f64 * size * self.em).ceil() as u32,
            height: size.ceil() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap;

    #[test]
    fn unknown_families_measure_with_the_builtin_face() {
        let fonts = FontLibrary::new();
        let font = FittedFont::new("Arial", 32);
        assert_eq!(fonts.measure("Day 7", &font), bitmap::measure("Day 7", 32));
    }

    #[test]
    fn measuring_through_a_reference() {
        let fonts = FontLibrary::new();
        let by_ref: &dyn TextMeasure = &fonts;
        let font = FittedFont::new("Arial", 16);
        assert_eq!(by_ref.measure("x", &font), fonts.measure("x", &font));
    }
}
