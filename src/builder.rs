use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::compositor::Compositor;
use crate::config::{LabelStyle, LayoutConfig};
use crate::layout::{HeaderLayout, LayoutEngine, TextSpec};
use crate::provider::FontLibrary;
use crate::raster::Raster;
use crate::rect::Point;
use crate::HeaderError;

/// What the raster is painted with before the label goes on
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(Colour),
    /// Linear gradient from the top row to the bottom row
    VerticalGradient { top: Colour, bottom: Colour },
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(colours::PAPER)
    }
}

/// Renders a complete labelled header: background, fitted label box and text.
/// Decorations specific to one image can be drawn on the returned [Raster]
/// before it is saved.
pub struct HeaderBuilder<'f> {
    fonts: &'f FontLibrary,
    canvas: Canvas,
    background: Background,
    config: LayoutConfig,
    style: LabelStyle,
    anchor: Option<Point>,
}

impl<'f> HeaderBuilder<'f> {
    pub fn new(fonts: &'f FontLibrary, canvas: Canvas) -> HeaderBuilder<'f> {
        HeaderBuilder {
            fonts,
            canvas,
            background: Background::default(),
            config: LayoutConfig::default(),
            style: LabelStyle::default(),
            anchor: None,
        }
    }

    /// Set the background, modifying `self`
    pub fn background(&mut self, background: Background) -> &mut Self {
        self.background = background;
        self
    }

    /// Set the layout constants, modifying `self`
    pub fn config(&mut self, config: LayoutConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Set the label colours and offsets, modifying `self`
    pub fn style(&mut self, style: LabelStyle) -> &mut Self {
        self.style = style;
        self
    }

    /// Centre the label on `anchor` instead of the canvas centre, modifying `self`
    pub fn anchor(&mut self, anchor: Point) -> &mut Self {
        self.anchor = Some(anchor);
        self
    }

    /// Lay out and paint the header. Fails on empty text, an invalid safe zone,
    /// or an anchor outside the safe zone.
    pub fn render(
        &self,
        title: &TextSpec,
        subtitle: &TextSpec,
    ) -> Result<(Raster, HeaderLayout), HeaderError> {
        let layout = LayoutEngine::new(self.config.clone()).layout(
            self.fonts,
            title,
            subtitle,
            &self.canvas,
            self.anchor,
        )?;

        let mut raster = match self.background {
            Background::Solid(colour) => Raster::new(self.canvas, colour),
            Background::VerticalGradient { top, bottom } => {
                let mut raster = Raster::new(self.canvas, top);
                raster.vertical_gradient(top, bottom);
                raster
            }
        };

        Compositor::new(self.style.clone()).compose(
            &mut raster.target(self.fonts),
            &layout,
            &title.content,
            &subtitle.content,
        );

        Ok((raster, layout))
    }
}
