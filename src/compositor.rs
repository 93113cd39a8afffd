use crate::colour::Colour;
use crate::config::LabelStyle;
use crate::font::FittedFont;
use crate::layout::HeaderLayout;
use crate::rect::{Point, Rect};

/// The draw primitives a label is painted with
pub trait DrawTarget {
    /// Blend a rectangle over the target. `rect` corners are inclusive; the
    /// outermost `outline_width` pixels take `outline`, the rest `fill`.
    fn draw_rect(&mut self, rect: Rect, fill: Colour, outline: Colour, outline_width: u32);

    /// Draw `text` centred both horizontally and vertically on `centre`
    fn draw_text(&mut self, text: &str, font: &FittedFont, centre: Point, colour: Colour);
}

/// Paints a [HeaderLayout]: the translucent box first, then the title and the
/// subtitle on top of it
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    style: LabelStyle,
}

impl Compositor {
    pub fn new(style: LabelStyle) -> Compositor {
        Compositor { style }
    }

    /// Title centre: `(anchor.x, box.y + title_height / 2 + title_offset)`
    pub fn title_centre(&self, layout: &HeaderLayout) -> Point {
        Point::new(
            layout.anchor.x,
            layout.label_box.y + (layout.title_size.height / 2) as i32 + self.style.title_offset,
        )
    }

    /// Subtitle centre: `(anchor.x, box.y + title_height + subtitle_offset)`
    pub fn subtitle_centre(&self, layout: &HeaderLayout) -> Point {
        Point::new(
            layout.anchor.x,
            layout.label_box.y + layout.title_size.height as i32 + self.style.subtitle_offset,
        )
    }

    pub fn compose<T: DrawTarget + ?Sized>(
        &self,
        target: &mut T,
        layout: &HeaderLayout,
        title: &str,
        subtitle: &str,
    ) {
        target.draw_rect(
            layout.label_box.bounds(),
            self.style.fill,
            self.style.outline,
            self.style.outline_width,
        );
        target.draw_text(
            title,
            &layout.title_font,
            self.title_centre(layout),
            self.style.title_colour,
        );
        target.draw_text(
            subtitle,
            &layout.subtitle_font,
            self.subtitle_centre(layout),
            self.style.subtitle_colour,
        );
    }
}
