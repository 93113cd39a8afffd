use crate::bitmap;
use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::compositor::DrawTarget;
use crate::font::{FittedFont, Font};
use crate::provider::FontProvider;
use crate::rect::{Point, Rect};
use crate::HeaderError;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat, ImageOutputFormat, Rgba, RgbaImage};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JPEG quality used when saving to `.jpg` / `.jpeg`
pub const JPEG_QUALITY: u8 = 95;

/// An in-memory RGBA image that headers are painted onto. Everything drawn is
/// alpha-composited over what is already there.
pub struct Raster {
    canvas: Canvas,
    image: RgbaImage,
}

impl Raster {
    /// Create a raster filled with `background`
    pub fn new(canvas: Canvas, background: Colour) -> Raster {
        let image = RgbaImage::from_pixel(canvas.width(), canvas.height(), background.into());
        Raster { canvas, image }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Repaint the whole raster with a linear gradient from `top` to `bottom`
    pub fn vertical_gradient(&mut self, top: Colour, bottom: Colour) {
        let top: Rgba<u8> = top.into();
        let bottom: Rgba<u8> = bottom.into();
        image::imageops::vertical_gradient(&mut self.image, &top, &bottom);
    }

    /// Composite `colour` over the pixel at `(x, y)`. Out-of-bounds pixels are ignored.
    fn blend_pixel(&mut self, x: i32, y: i32, colour: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return;
        }
        over(self.image.get_pixel_mut(x as u32, y as u32), colour);
    }

    /// Blend a rectangle with an inset outline, see [DrawTarget::draw_rect]
    pub fn draw_rect(&mut self, rect: Rect, fill: Colour, outline: Colour, outline_width: u32) {
        let x_range = rect.x1.max(0)..=rect.x2.min(self.image.width() as i32 - 1);
        let y_range = rect.y1.max(0)..=rect.y2.min(self.image.height() as i32 - 1);
        for y in y_range {
            for x in x_range.clone() {
                let colour = match rect.edge_distance(Point::new(x, y)) {
                    Some(d) if d < outline_width as i32 => outline,
                    Some(_) => fill,
                    None => continue,
                };
                self.blend_pixel(x, y, colour.into());
            }
        }
    }

    /// Draw `text` centred on `centre` using whatever font `fonts` resolves for
    /// `font.family`
    pub fn draw_text<P: FontProvider + ?Sized>(
        &mut self,
        fonts: &P,
        text: &str,
        font: &FittedFont,
        centre: Point,
        colour: Colour,
    ) {
        match fonts.resolve(&font.family) {
            Font::TrueType(face) => {
                let size = font.size_pt as f32;
                let left = centre.x - (face.width_of_text(text, size) / 2.0).round() as i32;
                let baseline =
                    centre.y + ((face.ascent(size) + face.descent(size)) / 2.0).round() as i32;
                face.for_each_coverage(text, size, |x, y, coverage| {
                    let alpha = (coverage as u32 * colour.a as u32 / 255) as u8;
                    self.blend_pixel(left + x, baseline + y, colour.with_alpha(alpha).into());
                });
            }
            Font::Builtin => {
                let extent = bitmap::measure(text, font.size_pt);
                let left = centre.x - (extent.width / 2) as i32;
                let top = centre.y - (extent.height / 2) as i32;
                bitmap::for_each_pixel(text, font.size_pt, |x, y, scale| {
                    for dy in 0..scale {
                        for dx in 0..scale {
                            self.blend_pixel(
                                left + (x + dx) as i32,
                                top + (y + dy) as i32,
                                colour.into(),
                            );
                        }
                    }
                });
            }
        }
    }

    /// Borrow the raster as a [DrawTarget] that resolves fonts through `fonts`
    pub fn target<'a, P: FontProvider + ?Sized>(&'a mut self, fonts: &'a P) -> RasterTarget<'a, P> {
        RasterTarget {
            raster: self,
            fonts,
        }
    }

    /// Write the raster to `path`, creating the parent directory first. The format
    /// follows the extension: `.jpg`/`.jpeg` are written as JPEG at [JPEG_QUALITY],
    /// everything else is handed to [image] to pick an encoder (PNG in practice).
    /// Alpha is flattened away in both cases.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), HeaderError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let rgb = DynamicImage::ImageRgba8(self.image.clone()).to_rgb8();
        let is_jpeg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
            .unwrap_or(false);

        let format = if is_jpeg {
            ImageFormat::Jpeg
        } else {
            ImageFormat::from_path(path)?
        };

        let mut writer = BufWriter::new(std::fs::File::create(path)?);
        if format == ImageFormat::Jpeg {
            let mut encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
            encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)?;
        } else {
            rgb.write_to(&mut writer, ImageOutputFormat::from(format))?;
        }
        // dropping a BufWriter swallows the last write error
        writer.flush()?;

        log::info!("wrote {} header image to {}", self.canvas, path.display());
        Ok(())
    }
}

/// Porter-Duff "source over" in integer arithmetic. An opaque destination stays
/// exactly opaque.
fn over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as u32;
    if sa == 0 {
        return;
    }
    if sa == 255 {
        *dst = src;
        return;
    }

    let da = dst[3] as u32;
    let inv = 255 - sa;
    // both alpha terms are scaled by 255
    let dst_weight = da * inv;
    let out_a = sa * 255 + dst_weight;
    if out_a == 0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        let value = src[c] as u32 * sa * 255 + dst[c] as u32 * dst_weight;
        dst[c] = ((value + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}

/// A [Raster] paired with the fonts its text is drawn in
pub struct RasterTarget<'a, P: FontProvider + ?Sized> {
    raster: &'a mut Raster,
    fonts: &'a P,
}

impl<P: FontProvider + ?Sized> DrawTarget for RasterTarget<'_, P> {
    fn draw_rect(&mut self, rect: Rect, fill: Colour, outline: Colour, outline_width: u32) {
        self.raster.draw_rect(rect, fill, outline, outline_width);
    }

    fn draw_text(&mut self, text: &str, font: &FittedFont, centre: Point, colour: Colour) {
        self.raster.draw_text(self.fonts, text, font, centre, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::DEJAVU_SANS_MONO;
    use crate::FontLibrary;
    use image::GenericImageView;

    fn small_canvas() -> Canvas {
        Canvas::new(40, 20).expect("valid canvas")
    }

    #[test]
    fn translucent_fill_blends_with_the_background() {
        let mut raster = Raster::new(small_canvas(), Colour::new_rgb_bytes(200, 16, 46));
        let rect = Rect::from_origin_size(5, 5, 20, 10);
        raster.draw_rect(rect, colours::VEIL, colours::WHITE, 2);

        // outline pixels are opaque white
        assert_eq!(raster.image().get_pixel(5, 5), &Rgba([255, 255, 255, 255]));
        assert_eq!(raster.image().get_pixel(6, 10), &Rgba([255, 255, 255, 255]));
        // the inside is mostly white but still tinted by the background
        // 220/255 of white over Liverpool red, still fully opaque
        assert_eq!(raster.image().get_pixel(15, 10), &Rgba([247, 222, 226, 255]));
        // untouched outside
        assert_eq!(raster.image().get_pixel(0, 0), &Rgba([200, 16, 46, 255]));
    }

    #[test]
    fn blending_onto_transparency_keeps_the_source() {
        let mut pixel = Rgba([0, 0, 0, 0]);
        over(&mut pixel, Rgba([10, 20, 30, 128]));
        assert_eq!(pixel, Rgba([10, 20, 30, 128]));

        let mut pixel = Rgba([90, 90, 90, 255]);
        over(&mut pixel, Rgba([0, 0, 0, 0]));
        assert_eq!(pixel, Rgba([90, 90, 90, 255]));
    }

    #[test]
    fn stacked_translucent_layers_stay_opaque() {
        let mut raster = Raster::new(small_canvas(), colours::PAPER);
        for _ in 0..10 {
            raster.draw_rect(
                Rect::from_origin_size(0, 0, 39, 19),
                colours::VEIL,
                colours::VEIL,
                1,
            );
        }
        assert!(raster.image().pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn rects_are_clipped_to_the_canvas() {
        let mut raster = Raster::new(small_canvas(), colours::BLACK);
        raster.draw_rect(
            Rect::from_origin_size(-10, -10, 100, 100),
            colours::WHITE,
            colours::WHITE,
            1,
        );
        assert!(raster.image().pixels().all(|p| p == &Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn gradient_runs_top_to_bottom() {
        let mut raster = Raster::new(small_canvas(), colours::BLACK);
        raster.vertical_gradient(colours::WHITE, colours::BLACK);
        let top = raster.image().get_pixel(3, 0)[0];
        let bottom = raster.image().get_pixel(3, 19)[0];
        assert!(top > bottom);
    }

    #[test]
    fn builtin_text_is_centred() {
        let fonts = FontLibrary::new();
        let mut raster = Raster::new(Canvas::new(100, 40).expect("canvas"), colours::WHITE);
        // "I" at 8pt is one unscaled 5x7 glyph with its serifs in columns 1..=3
        raster.draw_text(
            &fonts,
            "I",
            &FittedFont::new("Arial", 8),
            Point::new(50, 20),
            colours::BLACK,
        );
        let lit: Vec<(u32, u32)> = raster
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] == 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        let min_x = lit.iter().map(|p| p.0).min().expect("lit pixels");
        let max_x = lit.iter().map(|p| p.0).max().expect("lit pixels");
        let min_y = lit.iter().map(|p| p.1).min().expect("lit pixels");
        let max_y = lit.iter().map(|p| p.1).max().expect("lit pixels");
        assert_eq!((min_x, max_x), (49, 51));
        assert_eq!((min_y, max_y), (17, 23));
    }

    #[test]
    fn truetype_text_is_centred() {
        let mut fonts = FontLibrary::new();
        fonts.add_family("Mono", Font::load(DEJAVU_SANS_MONO.to_vec()).expect("font parses"));
        let mut raster = Raster::new(Canvas::new(200, 100).expect("canvas"), colours::WHITE);
        raster.draw_text(
            &fonts,
            "H",
            &FittedFont::new("Mono", 40),
            Point::new(100, 50),
            colours::BLACK,
        );

        let inked: Vec<(u32, u32, u8)> = raster
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] < 128)
            .map(|(x, y, p)| (x, y, p[0]))
            .collect();
        assert!(!inked.is_empty());
        let min_x = inked.iter().map(|p| p.0).min().expect("ink");
        let max_x = inked.iter().map(|p| p.0).max().expect("ink");
        let min_y = inked.iter().map(|p| p.1).min().expect("ink");
        let max_y = inked.iter().map(|p| p.1).max().expect("ink");
        let cx = (min_x + max_x) as i32 / 2;
        let cy = (min_y + max_y) as i32 / 2;
        assert!((cx - 100).abs() <= 2, "ink spans x {min_x}..={max_x}");
        assert!((cy - 50).abs() <= 4, "ink spans y {min_y}..={max_y}");
        // the stems are fully covered, the edges anti-aliased
        assert!(inked.iter().any(|p| p.2 < 30));
        assert!(raster.image().pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn saving_below_a_file_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, b"").expect("write");
        let raster = Raster::new(small_canvas(), colours::PAPER);
        let result = raster.save(blocker.join("header.png"));
        assert!(matches!(result, Err(HeaderError::Io(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_errors_are_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let raster = Raster::new(small_canvas(), colours::PAPER);
        for name in ["full.jpg", "full.png"] {
            let link = dir.path().join(name);
            std::os::unix::fs::symlink("/dev/full", &link).expect("symlink");
            let result = raster.save(&link);
            assert!(
                matches!(result, Err(HeaderError::Io(_)) | Err(HeaderError::Image(_))),
                "{name}: {result:?}"
            );
        }
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let raster = Raster::new(small_canvas(), colours::PAPER);
        assert!(matches!(
            raster.save(dir.path().join("header.xyz")),
            Err(HeaderError::Image(_))
        ));
    }

    #[test]
    fn saves_png_and_jpeg_into_new_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let raster = Raster::new(small_canvas(), colours::PAPER);

        let png = dir.path().join("DS-7").join("header.png");
        raster.save(&png).expect("png saved");
        let decoded = image::open(&png).expect("png decodes");
        assert_eq!((decoded.width(), decoded.height()), (40, 20));

        let jpg = dir.path().join("BL-6").join("header.jpg");
        raster.save(&jpg).expect("jpeg saved");
        let bytes = std::fs::read(&jpg).expect("read jpeg");
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }
}
