//! Screen-space shape descriptions turned into collider builders.
//!
//! Everything here converts point units into simulation units through the
//! caller's [`Scale`] and applies the sandbox's default material. Like the
//! wrapped engine, no geometric validation is performed; degenerate input
//! produces degenerate fixtures.

use marionette_core::math::Vec2;
use marionette_core::{Rect, Scale};
use rapier2d::na;
use rapier2d::prelude::*;

/// Default density for factory-created fixtures.
pub const DEFAULT_DENSITY: f32 = 1.0;
/// Default friction for factory-created fixtures.
pub const DEFAULT_FRICTION: f32 = 0.3;
/// Default restitution for factory-created fixtures.
pub const DEFAULT_RESTITUTION: f32 = 0.5;

/// Applies the factory default material and opts the fixture into
/// contact-filter hooks.
pub fn default_fixture(builder: ColliderBuilder) -> ColliderBuilder {
    builder
        .density(DEFAULT_DENSITY)
        .friction(DEFAULT_FRICTION)
        .restitution(DEFAULT_RESTITUTION)
        .active_hooks(ActiveHooks::FILTER_CONTACT_PAIRS)
}

/// Box fixture from full extents in screen points.
pub fn box_fixture(scale: Scale, size: Vec2) -> ColliderBuilder {
    let half = scale.to_physics_vec(size) * 0.5;
    default_fixture(ColliderBuilder::cuboid(half.x, half.y))
}

/// Circle fixture from a radius in screen points.
pub fn circle_fixture(scale: Scale, radius: f32) -> ColliderBuilder {
    default_fixture(ColliderBuilder::ball(scale.to_physics(radius)))
}

/// One triangle fixture per entry of a pre-triangulated mesh.
///
/// Vertices are in points, relative to the body origin.
pub fn mesh_fixtures(scale: Scale, triangles: &[[Vec2; 3]]) -> Vec<ColliderBuilder> {
    triangles
        .iter()
        .map(|triangle| {
            let a = scale.to_physics_vec(triangle[0]);
            let b = scale.to_physics_vec(triangle[1]);
            let c = scale.to_physics_vec(triangle[2]);
            default_fixture(ColliderBuilder::triangle(
                na::Point2::new(a.x, a.y),
                na::Point2::new(b.x, b.y),
                na::Point2::new(c.x, c.y),
            ))
        })
        .collect()
}

/// Fan triangulation of a hull outline around the body origin.
///
/// Pass the outside vertices like you would to a TRIANGLE_FAN: each
/// consecutive pair closes a triangle with the origin, including the
/// wrap-around pair, so `n` hull vertices produce `n` fixtures. The caller
/// supplies a sane ordering; this is not a robust triangulator.
pub fn fan_fixtures(scale: Scale, hull: &[Vec2]) -> Vec<ColliderBuilder> {
    if hull.len() < 2 {
        return Vec::new();
    }
    let center = na::Point2::origin();
    (0..hull.len())
        .map(|i| {
            let a = scale.to_physics_vec(hull[i]);
            let b = scale.to_physics_vec(hull[(i + 1) % hull.len()]);
            default_fixture(ColliderBuilder::triangle(
                center,
                na::Point2::new(a.x, a.y),
                na::Point2::new(b.x, b.y),
            ))
        })
        .collect()
}

/// Four static wall fixtures enclosing a screen rectangle.
///
/// Walls sit just outside the rectangle's edges, `thickness` points deep,
/// and overlap at the corners so nothing escapes diagonally.
pub fn boundary_fixtures(scale: Scale, screen_bounds: Rect, thickness: f32) -> Vec<ColliderBuilder> {
    let min = scale.to_physics_vec(screen_bounds.min);
    let max = scale.to_physics_vec(screen_bounds.max);
    let half_t = scale.to_physics(thickness) * 0.5;
    let half_w = (max.x - min.x) * 0.5 + 2.0 * half_t;
    let half_h = (max.y - min.y) * 0.5 + 2.0 * half_t;
    let center_x = (min.x + max.x) * 0.5;
    let center_y = (min.y + max.y) * 0.5;

    vec![
        // top
        default_fixture(ColliderBuilder::cuboid(half_w, half_t))
            .translation(vector![center_x, min.y - half_t]),
        // bottom
        default_fixture(ColliderBuilder::cuboid(half_w, half_t))
            .translation(vector![center_x, max.y + half_t]),
        // left
        default_fixture(ColliderBuilder::cuboid(half_t, half_h))
            .translation(vector![min.x - half_t, center_y]),
        // right
        default_fixture(ColliderBuilder::cuboid(half_t, half_h))
            .translation(vector![max.x + half_t, center_y]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_covers_every_hull_edge() {
        let scale = Scale::default();
        let hull: Vec<Vec2> = (0..6)
            .map(|i| {
                let angle = i as f32 / 6.0 * std::f32::consts::TAU;
                Vec2::new(angle.cos(), angle.sin()) * 30.0
            })
            .collect();
        assert_eq!(fan_fixtures(scale, &hull).len(), 6);
        assert!(fan_fixtures(scale, &hull[..1]).is_empty());
    }

    #[test]
    fn boundary_is_four_walls() {
        let scale = Scale::default();
        let bounds = Rect::from_size(Vec2::new(640.0, 480.0));
        assert_eq!(boundary_fixtures(scale, bounds, 5.0).len(), 4);
    }

    #[test]
    fn box_fixture_uses_half_extents() {
        let scale = Scale::new(50.0);
        let collider = box_fixture(scale, Vec2::new(100.0, 50.0)).build();
        let cuboid = collider.shape().as_cuboid().expect("cuboid shape");
        assert!((cuboid.half_extents.x - 1.0).abs() < 1e-6);
        assert!((cuboid.half_extents.y - 0.5).abs() < 1e-6);
    }
}
