//! Canvas dimensions for generated header images.
//!
//! # Available Sizes
//!
//! `BLOG_HEADER` (1920×1080, 16:9 hero image), `BANNER` (1200×400, series strip)
//! and `WIDESCREEN` (1600×900, inline diagram).
//!
//! # Example
//!
//! ```
//! use header_gen::canvas::{Canvas, BLOG_HEADER};
//!
//! assert_eq!(BLOG_HEADER.centre().x, 960);
//! assert!(Canvas::new(0, 400).is_err());
//! ```

use crate::rect::Point;
use crate::HeaderError;
use derive_more::Display;

/// The pixel dimensions of an image. Immutable once created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[display("{width}x{height}")]
pub struct Canvas {
    width: u32,
    height: u32,
}

pub const BLOG_HEADER: Canvas = Canvas {
    width: 1920,
    height: 1080,
};
pub const BANNER: Canvas = Canvas {
    width: 1200,
    height: 400,
};
pub const WIDESCREEN: Canvas = Canvas {
    width: 1600,
    height: 900,
};

impl Canvas {
    /// Create a canvas, failing if either dimension is zero or too large to
    /// address with signed pixel coordinates
    pub fn new(width: u32, height: u32) -> Result<Canvas, HeaderError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(HeaderError::InvalidCanvas { width, height });
        }
        Ok(Canvas { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The centre of the canvas, rounded down
    pub fn centre(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}
