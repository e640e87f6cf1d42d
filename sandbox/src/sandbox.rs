//! The sandbox coordinator.
//!
//! [`Sandbox`] creates a mapping between the window and the physics world:
//! it owns the simulation, converts screen points into simulation meters at
//! every call, and provides the creation, interaction, and introspection
//! surface a creative-coding host works against. A boundary shape matching
//! the window edges can be created on demand.

use marionette_core::math::Vec2;
use marionette_core::{Rect, Scale};
use marionette_debug_drawer::{DebugDrawer, DebugUniforms};
use rapier2d::na;
use rapier2d::parry::query::PointQuery;
use rapier2d::prelude::*;

use crate::debug_draw;
use crate::error::SandboxError;
use crate::filter::ContactFilter;
use crate::settings::SandboxSettings;
use crate::shapes;
use crate::world::PhysicsWorld;

/// Boundary wall thickness in screen points.
const BOUNDARY_DEPTH: f32 = 5.0;
/// Mouse spring frequency in Hz.
const MOUSE_FREQUENCY: f32 = 5.0;
/// Mouse spring damping ratio.
const MOUSE_DAMPING: f32 = 0.7;

/// Active mouse-drag constraint: a collider-less kinematic anchor body that
/// tracks the cursor, tied to the grabbed body by a soft spring joint.
struct MouseConstraint {
    joint: ImpulseJointHandle,
    anchor: RigidBodyHandle,
    grabbed: RigidBodyHandle,
}

/// Coordinator between a window and the physics world.
///
/// Bodies are created from screen-space descriptions and handed back as
/// non-owning generational handles; the world owns them. All mutation is
/// expected from the same thread that calls [`step`](Self::step), matching
/// the host's per-frame update cycle.
pub struct Sandbox {
    world: PhysicsWorld,
    scale: Scale,
    settings: SandboxSettings,
    viewport: Rect,
    boundary: Option<RigidBodyHandle>,
    mouse: Option<MouseConstraint>,
}

impl Sandbox {
    /// Creates a sandbox viewing a window of the given size in points.
    ///
    /// The world starts empty but usable; call [`init`](Self::init) to add
    /// the screen boundary or to reset later.
    pub fn new(viewport_size: Vec2) -> Self {
        let settings = SandboxSettings::default();
        let mut world = PhysicsWorld::default();
        world.apply_settings(&settings);
        Self {
            world,
            scale: Scale::new(settings.points_per_meter),
            settings,
            viewport: Rect::from_size(viewport_size),
            boundary: None,
            mouse: None,
        }
    }

    /// Resets the world with the default downward gravity, optionally
    /// creating boundaries at the edges of the screen.
    ///
    /// Every body and joint created so far is discarded; handles obtained
    /// before this call become stale. An installed contact filter is
    /// discarded with the world it was attached to.
    pub fn init(&mut self, use_screen_bounds: bool) {
        self.world = PhysicsWorld::default();
        self.world.apply_settings(&self.settings);
        self.boundary = None;
        self.mouse = None;
        if use_screen_bounds {
            let bounds = self.viewport;
            self.create_boundary_rect(bounds, BOUNDARY_DEPTH);
        }
        log::debug!("sandbox initialized (screen bounds: {use_screen_bounds})");
    }

    /// Runs the physics timestep.
    ///
    /// Advances by the configured fixed timestep with the configured
    /// iteration counts; no sub-stepping or accumulation is performed, so
    /// the caller invokes this once per frame or accepts drift.
    pub fn step(&mut self) {
        self.world.apply_settings(&self.settings);
        self.world.step();
    }

    /// Removes all bodies and joints.
    ///
    /// The world stays initialized; recreate the boundary afterwards if it
    /// is still wanted. Any active mouse drag is released.
    pub fn clear(&mut self) {
        self.world.clear();
        self.boundary = None;
        self.mouse = None;
    }

    // ---- Shape factories ----

    /// Creates a custom static boundary enclosing `screen_bounds`.
    ///
    /// The sandbox remembers the most recent boundary so interactive
    /// picking skips it. Remove it through [`destroy_body`](Self::destroy_body).
    pub fn create_boundary_rect(
        &mut self,
        screen_bounds: Rect,
        thickness: f32,
    ) -> RigidBodyHandle {
        let body = self.world.add_body(RigidBodyBuilder::fixed().build());
        for fixture in shapes::boundary_fixtures(self.scale, screen_bounds, thickness) {
            self.world.add_collider(fixture.build(), body);
        }
        self.boundary = Some(body);
        body
    }

    /// Creates a dynamic box. `pos` and `size` (full extents) are in points.
    pub fn create_box(&mut self, pos: Vec2, size: Vec2) -> RigidBodyHandle {
        let body = self.body_at(pos);
        let fixture = shapes::box_fixture(self.scale, size);
        self.create_body(body, [fixture])
    }

    /// Creates a dynamic circle. `pos` and `radius` are in points.
    pub fn create_circle(&mut self, pos: Vec2, radius: f32) -> RigidBodyHandle {
        let body = self.body_at(pos);
        let fixture = shapes::circle_fixture(self.scale, radius);
        self.create_body(body, [fixture])
    }

    /// Creates a dynamic body from a pre-triangulated mesh, one fixture per
    /// triangle. Triangle vertices are in points relative to `pos`.
    pub fn create_shape(&mut self, pos: Vec2, triangles: &[[Vec2; 3]]) -> RigidBodyHandle {
        let body = self.body_at(pos);
        let fixtures = shapes::mesh_fixtures(self.scale, triangles);
        self.create_body(body, fixtures)
    }

    /// Performs simple fan triangulation of `hull` to create a hull around
    /// `pos`. Pass the outside vertices, in points relative to `pos`, like
    /// you would to a TRIANGLE_FAN.
    pub fn create_fan_shape(&mut self, pos: Vec2, hull: &[Vec2]) -> RigidBodyHandle {
        let body = self.body_at(pos);
        let fixtures = shapes::fan_fixtures(self.scale, hull);
        self.create_body(body, fixtures)
    }

    /// Creates a body from raw rapier definitions.
    ///
    /// No unit conversion is applied; the caller prepares simulation-space
    /// values, usually through [`scale`](Self::scale).
    pub fn create_body(
        &mut self,
        body: RigidBodyBuilder,
        fixtures: impl IntoIterator<Item = ColliderBuilder>,
    ) -> RigidBodyHandle {
        let handle = self.world.add_body(body.build());
        for fixture in fixtures {
            self.world.add_collider(fixture.build(), handle);
        }
        handle
    }

    fn body_at(&self, pos: Vec2) -> RigidBodyBuilder {
        let p = self.scale.to_physics_vec(pos);
        RigidBodyBuilder::dynamic().translation(vector![p.x, p.y])
    }

    // ---- Destruction ----

    /// Removes a body together with its fixtures and attached joints.
    ///
    /// The handle must not be retained afterwards; reuse is rejected as
    /// [`SandboxError::StaleBody`]. Destroying the currently grabbed body
    /// releases the mouse drag first.
    pub fn destroy_body(&mut self, body: RigidBodyHandle) -> Result<(), SandboxError> {
        if self
            .mouse
            .as_ref()
            .is_some_and(|m| m.grabbed == body || m.anchor == body)
        {
            self.release_mouse();
        }
        if self.boundary == Some(body) {
            self.boundary = None;
        }
        self.world.remove_body(body)
    }

    /// Removes a joint. Destroying the active mouse joint resets the drag
    /// state as if the mouse had been released.
    pub fn destroy_joint(&mut self, joint: ImpulseJointHandle) -> Result<(), SandboxError> {
        if self.mouse.as_ref().is_some_and(|m| m.joint == joint) {
            self.release_mouse();
            return Ok(());
        }
        self.world.remove_joint(joint)
    }

    // ---- World introspection ----

    /// Number of live bodies (the drag anchor counts while dragging).
    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    /// Number of narrow-phase pairs with at least one active contact.
    pub fn contact_count(&self) -> usize {
        self.world.contact_count()
    }

    /// Iterates live bodies with their handles.
    pub fn bodies(&self) -> impl Iterator<Item = (RigidBodyHandle, &RigidBody)> {
        self.world.bodies.iter()
    }

    /// The wrapped physics world.
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// Mutable access to the wrapped physics world.
    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    /// The most recent boundary body, if one exists.
    pub fn boundary(&self) -> Option<RigidBodyHandle> {
        self.boundary
    }

    // ---- Settings ----

    /// Sets the gravity vector in m/s^2; positive y points down the screen.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.world.gravity = Vector::new(gravity.x, gravity.y);
    }

    /// Current gravity in m/s^2.
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.world.gravity.x, self.world.gravity.y)
    }

    pub fn set_velocity_iterations(&mut self, iterations: usize) {
        self.settings.velocity_iterations = iterations;
    }

    pub fn set_position_iterations(&mut self, iterations: usize) {
        self.settings.position_iterations = iterations;
    }

    /// Sets the fixed timestep in seconds.
    pub fn set_time_step(&mut self, dt: f32) {
        self.settings.time_step = dt;
    }

    /// How many points (dpi-agnostic pixels) there are in a meter.
    ///
    /// Only affects conversions from this call on; existing bodies keep
    /// their simulation-space geometry.
    pub fn set_points_per_meter(&mut self, points: f32) {
        self.settings.points_per_meter = points;
        self.scale.set_points_per_meter(points);
    }

    /// Replaces the whole configuration at once.
    pub fn set_settings(&mut self, settings: SandboxSettings) {
        self.scale.set_points_per_meter(settings.points_per_meter);
        self.settings = settings;
    }

    pub fn settings(&self) -> &SandboxSettings {
        &self.settings
    }

    /// Current points-to-meters conversion scale.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The viewport rectangle in points.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Updates the viewport size, e.g. after a window resize.
    ///
    /// An existing boundary is not moved; recreate it if it should follow.
    pub fn set_viewport(&mut self, size: Vec2) {
        self.viewport = Rect::from_size(size);
    }

    /// Installs the filter deciding which fixtures may collide; the sandbox
    /// keeps it alive for the world.
    pub fn set_contact_filter(&mut self, filter: Box<dyn ContactFilter>) {
        self.world.set_contact_filter(filter);
    }

    /// Uninstalls the contact filter.
    pub fn clear_contact_filter(&mut self) {
        self.world.clear_contact_filter();
    }

    // ---- User interaction ----

    /// Finds a dynamic body with a fixture containing the given point (in
    /// points), skipping the boundary. The last hit in collider storage
    /// order wins.
    pub fn body_at_point(&self, pos: Vec2) -> Option<RigidBodyHandle> {
        let p = self.scale.to_physics_vec(pos);
        let point = na::Point2::new(p.x, p.y);
        let mut hit = None;
        for (_, collider) in self.world.colliders.iter() {
            let Some(parent) = collider.parent() else {
                continue;
            };
            if Some(parent) == self.boundary {
                continue;
            }
            let Some(body) = self.world.bodies.get(parent) else {
                continue;
            };
            if !body.is_dynamic() {
                continue;
            }
            if collider.shape().contains_point(collider.position(), &point) {
                hit = Some(parent);
            }
        }
        hit
    }

    /// Grabs the body under the cursor, starting a spring drag.
    ///
    /// Creates a hidden kinematic anchor body at the cursor and ties it to
    /// the grabbed body with a spring tuned from the body's mass, the way
    /// the engine's native mouse joint behaves. Returns `true` when the
    /// event was consumed; the host can stop propagating it then. A press
    /// while already dragging is consumed without starting a second drag.
    pub fn mouse_down(&mut self, pos: Vec2) -> bool {
        if self.mouse.is_some() {
            return true;
        }
        let Some(grabbed) = self.body_at_point(pos) else {
            return false;
        };
        let p = self.scale.to_physics_vec(pos);
        let cursor = na::Point2::new(p.x, p.y);

        let anchor = self.world.add_body(
            RigidBodyBuilder::kinematic_position_based()
                .translation(vector![p.x, p.y])
                .build(),
        );

        let (mass, local_anchor) = match self.world.bodies.get(grabbed) {
            Some(body) => (
                body.mass().max(f32::EPSILON),
                body.position().inverse_transform_point(&cursor),
            ),
            None => (1.0, na::Point2::origin()),
        };
        let omega = std::f32::consts::TAU * MOUSE_FREQUENCY;
        let stiffness = mass * omega * omega;
        let damping = 2.0 * mass * MOUSE_DAMPING * omega;

        let joint = SpringJointBuilder::new(0.0, stiffness, damping)
            .local_anchor1(na::Point2::origin())
            .local_anchor2(local_anchor);
        let joint = self.world.add_impulse_joint(anchor, grabbed, joint);
        if let Some(body) = self.world.bodies.get_mut(grabbed) {
            body.wake_up(true);
        }

        log::trace!("grabbed body {grabbed:?}");
        self.mouse = Some(MouseConstraint {
            joint,
            anchor,
            grabbed,
        });
        true
    }

    /// Retargets the active drag to the cursor position.
    ///
    /// No-op returning `false` while idle.
    pub fn mouse_drag(&mut self, pos: Vec2) -> bool {
        let Some(constraint) = &self.mouse else {
            return false;
        };
        let p = self.scale.to_physics_vec(pos);
        if let Some(anchor) = self.world.bodies.get_mut(constraint.anchor) {
            anchor.set_next_kinematic_translation(vector![p.x, p.y]);
        }
        if let Some(body) = self.world.bodies.get_mut(constraint.grabbed) {
            body.wake_up(true);
        }
        true
    }

    /// Releases the active drag.
    ///
    /// Safe no-op returning `false` when nothing was grabbed; an unmatched
    /// release never changes the joint count.
    pub fn mouse_up(&mut self) -> bool {
        self.release_mouse()
    }

    /// Whether a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.mouse.is_some()
    }

    fn release_mouse(&mut self) -> bool {
        let Some(constraint) = self.mouse.take() else {
            return false;
        };
        let _ = self.world.remove_joint(constraint.joint);
        let _ = self.world.remove_body(constraint.anchor);
        log::trace!("released body {:?}", constraint.grabbed);
        true
    }

    // ---- Debug rendering ----

    /// Draws every fixture's outline in screen space into `drawer`'s
    /// current tick and returns the pixel-space projection for the host's
    /// line pipeline. Read-only; simulation state is untouched.
    pub fn debug_draw(&self, drawer: &DebugDrawer) -> DebugUniforms {
        let mut ctx = drawer.context();
        debug_draw::draw_world(&mut ctx, &self.world, self.scale);
        DebugUniforms::for_screen(self.viewport.width(), self.viewport.height())
    }
}
