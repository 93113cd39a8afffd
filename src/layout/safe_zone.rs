use crate::canvas::Canvas;
use crate::HeaderError;

/// The fractional sub-rectangle of a canvas that survives downstream cropping
/// (thumbnails, `object-cover` previews). Critical content, such as the label
/// box, must stay inside it. Each field is a fraction of the canvas width
/// (`left`, `right`) or height (`top`, `bottom`) measured from the top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SafeZone {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for SafeZone {
    /// 15% margins on all sides
    fn default() -> Self {
        SafeZone::uniform(0.15)
    }
}

impl SafeZone {
    /// Create a safe zone where every side is inset by the same fraction
    pub fn uniform(inset: f64) -> SafeZone {
        SafeZone::symmetric(inset, inset)
    }

    /// Create a safe zone by specifying different insets for the vertical (top and
    /// bottom) and horizontal (left and right) sides
    pub fn symmetric(vertical: f64, horizontal: f64) -> SafeZone {
        SafeZone {
            left: horizontal,
            right: 1.0 - horizontal,
            top: vertical,
            bottom: 1.0 - vertical,
        }
    }

    /// Check the zone is a non-empty rectangle inside the unit square
    pub fn validate(&self) -> Result<(), HeaderError> {
        let in_unit = |f: f64| (0.0..=1.0).contains(&f);
        let valid = [self.left, self.right, self.top, self.bottom]
            .into_iter()
            .all(in_unit)
            && self.left < self.right
            && self.top < self.bottom;
        if valid {
            Ok(())
        } else {
            Err(HeaderError::InvalidSafeZone)
        }
    }

    /// Resolve the fractions against a canvas. Pixel edges are truncated toward zero.
    pub fn to_px(&self, canvas: &Canvas) -> Result<SafeZonePx, HeaderError> {
        self.validate()?;
        let w = canvas.width() as f64;
        let h = canvas.height() as f64;
        Ok(SafeZonePx {
            left: (w * self.left) as i32,
            right: (w * self.right) as i32,
            top: (h * self.top) as i32,
            bottom: (h * self.bottom) as i32,
        })
    }
}

/// A [SafeZone] resolved to pixel edges on a specific canvas
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SafeZonePx {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl SafeZonePx {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}
