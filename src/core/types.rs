use serde::{Deserialize, Serialize};

/// Location in the caller's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolved on-screen bounds of a laid-out view (origin + size).
///
/// This is what the overlay reports after each layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Finite origin and strictly positive size.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Grows the rect by `amount` on every side.
    #[must_use]
    pub fn outset(self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outset_grows_every_side() {
        let rect = FrameRect::new(10.0, 20.0, 30.0, 40.0).outset(5.0);
        assert_eq!(rect, FrameRect::new(5.0, 15.0, 40.0, 50.0));
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn contains_includes_edges() {
        let rect = FrameRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(10.0, 0.0)));
        assert!(!rect.contains(Point::new(10.5, 5.0)));
    }

    #[test]
    fn empty_or_non_finite_rects_are_invalid() {
        assert!(!FrameRect::new(0.0, 0.0, 0.0, 5.0).is_valid());
        assert!(!FrameRect::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
        assert!(FrameRect::default().translated(1.0, 1.0).outset(0.5).is_valid());
    }
}
