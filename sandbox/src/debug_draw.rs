//! Screen-space outlines of the physics world.
//!
//! Walks the world's collider list and emits line vertices in point units
//! through a [`DebugDrawerContext`]. The drawing primitives themselves
//! belong to the host renderer; nothing here touches the GPU or mutates
//! simulation state.

use marionette_core::math::Vec2;
use marionette_core::Scale;
use marionette_debug_drawer::DebugDrawerContext;
use rapier2d::na;
use rapier2d::prelude::*;

use crate::world::PhysicsWorld;

/// Outline color for fixed bodies and free colliders.
const FIXED_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Outline color for awake dynamic or kinematic bodies.
const ACTIVE_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
/// Outline color for sleeping bodies.
const SLEEPING_COLOR: [f32; 4] = [0.45, 0.55, 0.65, 1.0];

/// Emits outlines for every collider in the world.
pub fn draw_world(ctx: &mut DebugDrawerContext<'_>, world: &PhysicsWorld, scale: Scale) {
    for (_, collider) in world.colliders.iter() {
        let color = collider
            .parent()
            .and_then(|parent| world.bodies.get(parent))
            .map_or(FIXED_COLOR, body_color);
        draw_collider(ctx, collider, scale, color);
    }
}

fn body_color(body: &RigidBody) -> [f32; 4] {
    if body.is_fixed() {
        FIXED_COLOR
    } else if body.is_sleeping() {
        SLEEPING_COLOR
    } else {
        ACTIVE_COLOR
    }
}

fn draw_collider(
    ctx: &mut DebugDrawerContext<'_>,
    collider: &Collider,
    scale: Scale,
    color: [f32; 4],
) {
    let position = collider.position();
    let shape = collider.shape();

    if let Some(ball) = shape.as_ball() {
        let center = to_screen(scale, position * na::Point2::origin());
        let radius = scale.to_points(ball.radius);
        ctx.draw_circle(center, radius, color);
        // radius spoke so rotation is visible
        let rim = to_screen(scale, position * na::Point2::new(ball.radius, 0.0));
        ctx.draw_line(center, rim, color);
    } else if let Some(cuboid) = shape.as_cuboid() {
        let he = cuboid.half_extents;
        let corners = [
            na::Point2::new(-he.x, -he.y),
            na::Point2::new(he.x, -he.y),
            na::Point2::new(he.x, he.y),
            na::Point2::new(-he.x, he.y),
        ]
        .map(|corner| to_screen(scale, position * corner));
        ctx.draw_polygon(&corners, color);
    } else if let Some(triangle) = shape.as_triangle() {
        let corners =
            [triangle.a, triangle.b, triangle.c].map(|corner| to_screen(scale, position * corner));
        ctx.draw_polygon(&corners, color);
    } else {
        // anything fancier falls back to its bounding box
        let aabb = collider.compute_aabb();
        ctx.draw_rect(
            to_screen(scale, aabb.mins),
            to_screen(scale, aabb.maxs),
            color,
        );
    }
}

fn to_screen(scale: Scale, point: na::Point2<f32>) -> [f32; 2] {
    let p = scale.to_points_vec(Vec2::new(point.x, point.y));
    [p.x, p.y]
}

#[cfg(test)]
mod tests {
    use super::*;
    use marionette_debug_drawer::DebugDrawer;

    #[test]
    fn outlines_cover_all_shape_kinds() {
        let mut world = PhysicsWorld::default();
        let body = world.add_body(RigidBodyBuilder::fixed().build());
        world.add_collider(ColliderBuilder::ball(0.5).build(), body);
        world.add_collider(ColliderBuilder::cuboid(1.0, 0.5).build(), body);
        world.add_collider(
            ColliderBuilder::triangle(
                na::Point2::new(0.0, 0.0),
                na::Point2::new(1.0, 0.0),
                na::Point2::new(0.5, 1.0),
            )
            .build(),
            body,
        );

        let drawer = DebugDrawer::new();
        {
            let mut ctx = drawer.context();
            draw_world(&mut ctx, &world, Scale::default());
        }
        drawer.advance_tick();
        let vertices = drawer.take_render_data();

        // circle (64 + 2 spoke) + cuboid (8) + triangle (6)
        assert_eq!(vertices.len(), 80);
        assert!(vertices
            .iter()
            .all(|v| v.position[0].is_finite() && v.position[1].is_finite()));
    }
}
