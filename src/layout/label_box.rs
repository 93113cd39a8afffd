use super::safe_zone::SafeZonePx;
use crate::config::LayoutConfig;
use crate::metrics::TextSize;
use crate::rect::{Point, Rect};

/// The background rectangle sized and positioned to hold the title and subtitle
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LabelBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub padding: u32,
}

impl LabelBox {
    /// The box bounds, as stroked: `[x, y, x + width, y + height]`
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

impl From<LabelBox> for Rect {
    fn from(b: LabelBox) -> Self {
        b.bounds()
    }
}

/// Size a box around two measured lines, centre it on `anchor`, then clamp it
/// horizontally to the safe zone.
///
/// The box is `max(title.width, subtitle.width) + 2 * padding` wide and
/// `title.height + subtitle.height + inter_line_gap` tall. It is centred on the
/// anchor (halves rounded down) and moved by `vertical_bias`. If it starts left
/// of the safe zone it is moved right onto the edge; if it then runs past the
/// right edge it is cut to end there. Only the width is guarded: the height and
/// vertical position are never clamped.
pub fn layout_label_box(
    title: TextSize,
    subtitle: TextSize,
    config: &LayoutConfig,
    anchor: Point,
    safe_zone: &SafeZonePx,
) -> LabelBox {
    let padding = px(config.padding_px);
    let mut width = px(title.width.max(subtitle.width)).saturating_add(padding.saturating_mul(2));
    let height = px(title
        .height
        .saturating_add(subtitle.height)
        .saturating_add(config.inter_line_gap));

    let mut x = anchor.x.saturating_sub(width.div_euclid(2));
    let y = anchor
        .y
        .saturating_sub(height.div_euclid(2))
        .saturating_add(config.vertical_bias);

    if x < safe_zone.left {
        x = safe_zone.left;
    }
    if x.saturating_add(width) > safe_zone.right {
        width = (safe_zone.right - x).max(0);
    }

    LabelBox {
        x,
        y,
        width,
        height,
        padding: config.padding_px,
    }
}

/// Pixel extents past `i32::MAX` saturate
fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::BLOG_HEADER;
    use crate::layout::SafeZone;

    fn blog_zone() -> SafeZonePx {
        SafeZone::default().to_px(&BLOG_HEADER).expect("valid zone")
    }

    #[test]
    fn small_box_is_centred_and_biased() {
        let title = TextSize {
            width: 600,
            height: 60,
        };
        let subtitle = TextSize {
            width: 500,
            height: 30,
        };
        let b = layout_label_box(
            title,
            subtitle,
            &LayoutConfig::default(),
            BLOG_HEADER.centre(),
            &blog_zone(),
        );
        assert_eq!(
            b,
            LabelBox {
                x: 960 - 330,
                y: 540 - 75 - 200,
                width: 660,
                height: 150,
                padding: 30,
            }
        );
    }

    #[test]
    fn wide_box_is_clamped_to_the_safe_zone() {
        // 1340 + 2 * 30 = 1400 wide content
        let title = TextSize {
            width: 1340,
            height: 50,
        };
        let subtitle = TextSize {
            width: 900,
            height: 30,
        };
        let b = layout_label_box(
            title,
            subtitle,
            &LayoutConfig::default(),
            BLOG_HEADER.centre(),
            &blog_zone(),
        );
        assert_eq!(b.x, 288);
        assert_eq!(b.width, 1344);
        assert_eq!(b.x + b.width, 1632);
        // height is never clamped
        assert_eq!(b.height, 140);
    }

    #[test]
    fn off_centre_anchor_only_trims_the_right_edge() {
        let title = TextSize {
            width: 400,
            height: 40,
        };
        let b = layout_label_box(
            title,
            title,
            &LayoutConfig::default().with_vertical_bias(0),
            Point::new(1500, 540),
            &blog_zone(),
        );
        assert_eq!(b.x, 1500 - 230);
        assert_eq!(b.x + b.width, 1632);
        assert_eq!(b.y, 540 - 70);
    }

    #[test]
    fn box_contains_both_lines_with_padding() {
        let title = TextSize {
            width: 700,
            height: 64,
        };
        let subtitle = TextSize {
            width: 820,
            height: 32,
        };
        let config = LayoutConfig::default();
        let b = layout_label_box(title, subtitle, &config, BLOG_HEADER.centre(), &blog_zone());
        assert!(b.width as u32 >= subtitle.width + 2 * config.padding_px);
        assert!(b.height as u32 >= title.height + subtitle.height);
    }

    #[test]
    fn layout_is_idempotent() {
        let title = TextSize {
            width: 1100,
            height: 48,
        };
        let subtitle = TextSize {
            width: 640,
            height: 26,
        };
        let config = LayoutConfig::default();
        let zone = blog_zone();
        let a = layout_label_box(title, subtitle, &config, BLOG_HEADER.centre(), &zone);
        let b = layout_label_box(title, subtitle, &config, BLOG_HEADER.centre(), &zone);
        assert_eq!(a, b);
    }

    #[test]
    fn extreme_inputs_saturate() {
        let huge = TextSize {
            width: u32::MAX,
            height: u32::MAX,
        };
        let zone = blog_zone();
        let b = layout_label_box(
            huge,
            huge,
            &LayoutConfig::default(),
            Point::new(960, i32::MIN),
            &zone,
        );
        assert_eq!(b.x, 288);
        assert_eq!(b.width, 1344);
        assert_eq!(b.height, i32::MAX);
        assert_eq!(b.y, i32::MIN);
    }

    #[test]
    fn bounds_match_the_box() {
        let title = TextSize {
            width: 500,
            height: 40,
        };
        let b = layout_label_box(
            title,
            title,
            &LayoutConfig::default(),
            BLOG_HEADER.centre(),
            &blog_zone(),
        );
        let r = Rect::from(b);
        assert_eq!((r.width(), r.height()), (b.width, b.height));
        assert_eq!((r.x1, r.y1), (b.x, b.y));
    }
}
