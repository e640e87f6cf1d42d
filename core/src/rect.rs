//! Axis-aligned screen-space rectangle.

use crate::math::Vec2;

/// Axis-aligned rectangle in screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Creates a rectangle from two corners, normalizing their ordering.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Rectangle from the origin to `size`.
    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::new(0.0, 0.0), size)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_normalize() {
        let r = Rect::new(Vec2::new(10.0, 40.0), Vec2::new(-5.0, 20.0));
        assert_eq!(r.min, Vec2::new(-5.0, 20.0));
        assert_eq!(r.max, Vec2::new(10.0, 40.0));
        assert!((r.width() - 15.0).abs() < 1e-6);
        assert!((r.height() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn from_size_center() {
        let r = Rect::from_size(Vec2::new(640.0, 480.0));
        assert_eq!(r.center(), Vec2::new(320.0, 240.0));
    }
}
