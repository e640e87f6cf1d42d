//! Conversion between screen points and simulation meters.
//!
//! A [`Scale`] holds the points-per-meter factor and applies it at call
//! time. Changing the factor never rescales geometry that already exists;
//! only subsequent conversions see the new value.

use crate::math::{Point2, Vec2};

/// Default points-per-meter factor (5 pixels per decimeter).
pub const DEFAULT_POINTS_PER_METER: f32 = 50.0;

/// Points-per-meter conversion scale.
///
/// Stores the factor and its reciprocal so either direction is a single
/// multiply. Callers supply a positive factor; like the wrapped engine,
/// no validation is performed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    points_per_meter: f32,
    meters_per_point: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(DEFAULT_POINTS_PER_METER)
    }
}

impl Scale {
    /// Creates a scale from a points-per-meter factor.
    pub fn new(points_per_meter: f32) -> Self {
        Self {
            points_per_meter,
            meters_per_point: 1.0 / points_per_meter,
        }
    }

    /// How many points (dpi-agnostic pixels) there are in a meter.
    pub fn points_per_meter(&self) -> f32 {
        self.points_per_meter
    }

    /// How many meters there are in a point.
    pub fn meters_per_point(&self) -> f32 {
        self.meters_per_point
    }

    /// Replaces the factor, keeping the reciprocal in sync.
    pub fn set_points_per_meter(&mut self, points: f32) {
        *self = Self::new(points);
    }

    /// Screen points to simulation meters (scalar).
    pub fn to_physics(&self, points: f32) -> f32 {
        points * self.meters_per_point
    }

    /// Simulation meters to screen points (scalar).
    pub fn to_points(&self, meters: f32) -> f32 {
        meters * self.points_per_meter
    }

    /// Screen points to simulation meters (vector).
    pub fn to_physics_vec(&self, points: Vec2) -> Vec2 {
        points * self.meters_per_point
    }

    /// Simulation meters to screen points (vector).
    pub fn to_points_vec(&self, meters: Vec2) -> Vec2 {
        meters * self.points_per_meter
    }

    /// Screen points to simulation meters (point).
    pub fn to_physics_point(&self, points: Point2) -> Point2 {
        Point2::from(self.to_physics_vec(points.coords))
    }

    /// Simulation meters to screen points (point).
    pub fn to_points_point(&self, meters: Point2) -> Point2 {
        Point2::from(self.to_points_vec(meters.coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_roundtrip() {
        for factor in [1.0, 32.0, 50.0, 128.5] {
            let scale = Scale::new(factor);
            for value in [0.0, 1.0, -17.25, 640.0] {
                let back = scale.to_points(scale.to_physics(value));
                assert!((back - value).abs() < 1e-4, "factor {factor}, value {value}");
            }
        }
    }

    #[test]
    fn vector_roundtrip() {
        let scale = Scale::new(50.0);
        let v = Vec2::new(320.0, -240.0);
        let back = scale.to_points_vec(scale.to_physics_vec(v));
        assert!((back - v).norm() < 1e-4);
    }

    #[test]
    fn point_roundtrip() {
        let scale = Scale::new(72.0);
        let p = Point2::new(100.0, 350.0);
        let back = scale.to_points_point(scale.to_physics_point(p));
        assert!((back - p).norm() < 1e-4);
    }

    #[test]
    fn default_factor() {
        let scale = Scale::default();
        assert!((scale.to_physics(50.0) - 1.0).abs() < 1e-6);
        assert!((scale.to_points(1.0) - 50.0).abs() < 1e-6);
    }

    #[test]
    fn set_factor_updates_reciprocal() {
        let mut scale = Scale::new(50.0);
        scale.set_points_per_meter(100.0);
        assert!((scale.to_physics(100.0) - 1.0).abs() < 1e-6);
    }
}
