//! Screen geometry reported alongside drag events

use serde::{Deserialize, Serialize};

/// A point in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned rectangle in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Corners in top-left, top-right, bottom-left, bottom-right order
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right(), self.top),
            Point::new(self.left, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// Whether this rectangle's top edge sits below `other`'s bottom edge
    pub fn is_below(&self, other: &Rect) -> bool {
        self.top > other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_below_is_strict() {
        let hovered = Rect::new(0.0, 100.0, 200.0, 40.0);
        assert!(Rect::new(0.0, 141.0, 200.0, 40.0).is_below(&hovered));
        assert!(!Rect::new(0.0, 140.0, 200.0, 40.0).is_below(&hovered));
        assert!(!Rect::new(0.0, 90.0, 200.0, 40.0).is_below(&hovered));
    }

    #[test]
    fn test_corners() {
        let [tl, tr, bl, br] = Rect::new(1.0, 2.0, 3.0, 4.0).corners();
        assert_eq!(tl, Point::new(1.0, 2.0));
        assert_eq!(tr, Point::new(4.0, 2.0));
        assert_eq!(bl, Point::new(1.0, 6.0));
        assert_eq!(br, Point::new(4.0, 6.0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(&Point::new(3.0, 4.0)), 5.0);
    }
}
