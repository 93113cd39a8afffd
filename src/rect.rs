use derive_more::{Add, Display, Sub};

/// A pixel coordinate on a canvas. The origin is the top-left corner and y grows downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Add, Sub, Display)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// A rectangle, specified by two opposite corners. Both corners are inclusive,
/// matching how a rectangle with an outline is stroked onto a raster.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x1: i32,
    /// The y-coordinate of the top-left corner.
    pub y1: i32,
    /// The x-coordinate of the bottom-right corner.
    pub x2: i32,
    /// The y-coordinate of the bottom-right corner.
    pub y2: i32,
}

impl Rect {
    /// Create a rectangle from its origin and size
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Whether `point` lies within the rectangle, edges included
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x1 && point.x <= self.x2 && point.y >= self.y1 && point.y <= self.y2
    }

    /// Distance from `point` to the nearest edge, or [None] if the point is outside
    pub fn edge_distance(&self, point: Point) -> Option<i32> {
        if !self.contains(point) {
            return None;
        }
        let dx = (point.x - self.x1).min(self.x2 - point.x);
        let dy = (point.y - self.y1).min(self.y2 - point.y);
        Some(dx.min(dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_distance_is_measured_from_the_closest_side() {
        let r = Rect::from_origin_size(10, 10, 100, 20);
        assert_eq!(r.edge_distance(Point::new(10, 15)), Some(0));
        assert_eq!(r.edge_distance(Point::new(50, 12)), Some(2));
        assert_eq!(r.edge_distance(Point::new(109, 20)), Some(1));
        assert_eq!(r.edge_distance(Point::new(9, 15)), None);
    }

    #[test]
    fn points_add_and_subtract() {
        let p = Point::new(960, 540) - Point::new(0, 200);
        assert_eq!(p, Point::new(960, 340));
        assert_eq!(p.to_string(), "(960, 340)");
    }
}
