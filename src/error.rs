use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to encode or decode the raster
    Image(#[from] image::ImageError),

    #[error("fontdue could not load the font: {0}")]
    /// [fontdue] rejected font data that [owned_ttf_parser] accepted
    FontRaster(&'static str),

    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("safe zone fractions must satisfy 0 <= left < right <= 1 and 0 <= top < bottom <= 1")]
    InvalidSafeZone,

    #[error("{0} text must not be empty")]
    /// The named label line (title or subtitle) was empty
    EmptyText(&'static str),

    #[error("{0} font size must be at least 1")]
    /// The named label line was given a zero base size
    ZeroFontSize(&'static str),

    #[error("anchor y={y} lies outside the canvas [0, {height}]")]
    AnchorOutsideCanvas { y: i32, height: u32 },

    #[error("anchor x={x} lies outside the safe zone [{left}, {right}]")]
    AnchorOutsideSafeZone { x: i32, left: i32, right: i32 },
}
