//! Math type aliases and helper functions.
//!
//! Screen points and simulation meters both use f32. nalgebra is the
//! backing math crate so vector types unify with the physics engine's.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 2D point (f32).
pub type Point2 = nalgebra::Point2<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Build a right-handed orthographic projection with depth range [0, 1] (wgpu/Vulkan convention).
pub fn orthographic_rh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rml = right - left;
    let tmb = top - bottom;
    let fmn = far - near;
    #[rustfmt::skip]
    let result = Mat4::new(
        2.0 / rml, 0.0,       0.0,         -(right + left) / rml,
        0.0,       2.0 / tmb, 0.0,         -(top + bottom) / tmb,
        0.0,       0.0,       -1.0 / fmn,  -near / fmn,
        0.0,       0.0,       0.0,          1.0,
    );
    result
}

/// Pixel-space projection: maps `(0, 0)..(width, height)` with the origin at
/// the top-left and y growing downward onto clip space.
///
/// This is the transform a host renderer installs before drawing debug
/// geometry emitted in point units.
pub fn screen_projection(width: f32, height: f32) -> Mat4 {
    orthographic_rh(0.0, width, height, 0.0, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;

    #[test]
    fn screen_projection_maps_corners() {
        let proj = screen_projection(640.0, 480.0);

        let top_left = proj * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((top_left.x - (-1.0)).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = proj * Vector4::new(640.0, 480.0, 0.0, 1.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn screen_projection_center_is_origin() {
        let proj = screen_projection(800.0, 600.0);
        let center = proj * Vector4::new(400.0, 300.0, 0.0, 1.0);
        assert!(center.x.abs() < 1e-6);
        assert!(center.y.abs() < 1e-6);
    }
}
