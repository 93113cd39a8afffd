use crate::config::LayoutConfig;
use crate::font::FittedFont;
use crate::metrics::TextMeasure;

/// Shrink `base` so that `text` fits in `max_width_px`.
///
/// If the text already fits, `base` comes back unchanged. Otherwise the size is
/// scaled once, proportionally to the overflow and then by
/// [`shrink_safety_factor`](LayoutConfig::shrink_safety_factor):
///
/// ```text
/// new_size = floor(base.size_pt * (max_width_px / width) * shrink_safety_factor)
/// ```
///
/// There is no re-measure afterwards, so a face whose width does not scale
/// linearly with size can still land slightly over `max_width_px`. Sizes that
/// round down to nothing are raised to [`min_font_size`](LayoutConfig::min_font_size).
pub fn fit_font<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    base: &FittedFont,
    max_width_px: u32,
    config: &LayoutConfig,
) -> FittedFont {
    let width = measure.measure(text, base).width;
    if width <= max_width_px {
        return base.clone();
    }

    let ratio = max_width_px as f64 / width as f64;
    let scaled = (base.size_pt as f64 * ratio * config.shrink_safety_factor).floor();
    let size_pt = if scaled < config.min_font_size as f64 {
        config.min_font_size.max(1)
    } else {
        scaled as u32
    };

    log::debug!(
        "'{text}' is {width}px wide at {base}, max {max_width_px}px; shrinking to {size_pt}pt"
    );
    base.with_size(size_pt.min(base.size_pt))
}
