use super::label_box::{layout_label_box, LabelBox};
use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::fit::fit_font;
use crate::font::FittedFont;
use crate::metrics::{TextMeasure, TextSize};
use crate::rect::Point;
use crate::HeaderError;

/// A line of text and the font it should be set in before any fitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpec {
    pub content: String,
    pub base_font: FittedFont,
}

impl TextSpec {
    pub fn new<S: ToString, F: ToString>(
        content: S,
        base_font_family: F,
        base_size_pt: u32,
    ) -> TextSpec {
        TextSpec {
            content: content.to_string(),
            base_font: FittedFont::new(base_font_family, base_size_pt),
        }
    }
}

/// Everything a [Compositor](crate::Compositor) needs to draw a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub title_font: FittedFont,
    pub subtitle_font: FittedFont,
    /// The title measured at `title_font`
    pub title_size: TextSize,
    /// The subtitle measured at `subtitle_font`
    pub subtitle_size: TextSize,
    pub label_box: LabelBox,
    /// The point the box was centred on
    pub anchor: Point,
}

/// Fits a title/subtitle pair and lays out the box behind them, using one
/// immutable [LayoutConfig]
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> LayoutEngine {
        LayoutEngine { config }
    }

    /// Fit both lines to the safe zone and compute the label box.
    ///
    /// The maximum line width is the safe zone width less
    /// [`title_margin_px`](LayoutConfig::title_margin_px). Each line is shrunk
    /// against it with [fit_font], measured again at its fitted size, and the
    /// box is laid out around `anchor`, which defaults to the canvas centre and
    /// must lie horizontally inside the safe zone and vertically on the canvas.
    pub fn layout<M: TextMeasure + ?Sized>(
        &self,
        measure: &M,
        title: &TextSpec,
        subtitle: &TextSpec,
        canvas: &Canvas,
        anchor: Option<Point>,
    ) -> Result<HeaderLayout, HeaderError> {
        if title.content.is_empty() {
            return Err(HeaderError::EmptyText("title"));
        }
        if subtitle.content.is_empty() {
            return Err(HeaderError::EmptyText("subtitle"));
        }
        if title.base_font.size_pt == 0 {
            return Err(HeaderError::ZeroFontSize("title"));
        }
        if subtitle.base_font.size_pt == 0 {
            return Err(HeaderError::ZeroFontSize("subtitle"));
        }

        let zone = self.config.safe_zone.to_px(canvas)?;
        let anchor = anchor.unwrap_or_else(|| canvas.centre());
        if anchor.x < zone.left || anchor.x > zone.right {
            return Err(HeaderError::AnchorOutsideSafeZone {
                x: anchor.x,
                left: zone.left,
                right: zone.right,
            });
        }
        if anchor.y < 0 || anchor.y as u32 > canvas.height() {
            return Err(HeaderError::AnchorOutsideCanvas {
                y: anchor.y,
                height: canvas.height(),
            });
        }

        let max_width = (zone.width() - self.config.title_margin_px as i32).max(1) as u32;

        let title_font = fit_font(measure, &title.content, &title.base_font, max_width, &self.config);
        let subtitle_font = fit_font(
            measure,
            &subtitle.content,
            &subtitle.base_font,
            max_width,
            &self.config,
        );

        let title_size = measure.measure(&title.content, &title_font);
        let subtitle_size = measure.measure(&subtitle.content, &subtitle_font);

        let label_box = layout_label_box(title_size, subtitle_size, &self.config, anchor, &zone);
        log::debug!(
            "laid out {canvas} header: title {title_font}, subtitle {subtitle_font}, box {:?}",
            label_box.bounds()
        );

        Ok(HeaderLayout {
            title_font,
            subtitle_font,
            title_size,
            subtitle_size,
            label_box,
            anchor,
        })
    }
}
