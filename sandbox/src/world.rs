//! Owned rapier2d simulation state.
//!
//! [`PhysicsWorld`] bundles every piece of rapier state behind one struct,
//! steps it with a fixed timestep, and exposes the insertion, removal, and
//! introspection surface the [`Sandbox`](crate::Sandbox) facade builds on.

use std::num::NonZeroUsize;

use rapier2d::prelude::*;

use crate::error::SandboxError;
use crate::filter::{ContactFilter, FilterHooks};
use crate::settings::SandboxSettings;

/// Default downward gravity in m/s^2. Positive y points down the screen.
pub const DEFAULT_GRAVITY: f32 = 10.0;

/// Single owner of all rapier 2D physics state.
///
/// The screen-space conveniences live on [`Sandbox`](crate::Sandbox); this
/// type works purely in simulation units.
pub struct PhysicsWorld {
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    hooks: FilterHooks,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self {
            gravity: Vector::new(0.0, DEFAULT_GRAVITY),
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            hooks: FilterHooks::default(),
        }
    }
}

impl PhysicsWorld {
    /// Creates a new physics world with the given gravity.
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        Self {
            gravity,
            ..Default::default()
        }
    }

    /// Steps the physics simulation by one timestep.
    ///
    /// Blocking and deterministic; cost is proportional to the body and
    /// contact count. The installed contact filter is consulted for new
    /// pairs during the step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &self.hooks,
            &(),
        );
    }

    /// Maps sandbox settings onto the solver's iteration and timestep knobs.
    pub fn apply_settings(&mut self, settings: &SandboxSettings) {
        self.integration_parameters.dt = settings.time_step;
        if let Some(iterations) = NonZeroUsize::new(settings.velocity_iterations) {
            self.integration_parameters.num_solver_iterations = iterations;
        }
        self.integration_parameters.num_internal_pgs_iterations =
            settings.position_iterations.max(1);
    }

    /// Adds a rigid body and returns its handle.
    pub fn add_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.bodies.insert(body)
    }

    /// Adds a collider attached to a rigid body and returns its handle.
    pub fn add_collider(&mut self, collider: Collider, parent: RigidBodyHandle) -> ColliderHandle {
        self.colliders
            .insert_with_parent(collider, parent, &mut self.bodies)
    }

    /// Adds an impulse joint between two bodies and returns its handle.
    pub fn add_impulse_joint(
        &mut self,
        body1: RigidBodyHandle,
        body2: RigidBodyHandle,
        joint: impl Into<GenericJoint>,
    ) -> ImpulseJointHandle {
        self.impulse_joints.insert(body1, body2, joint, true)
    }

    /// Removes a body together with its colliders and attached joints.
    ///
    /// A handle whose slot was already freed is rejected.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> Result<(), SandboxError> {
        self.bodies
            .remove(
                handle,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .map(|_| ())
            .ok_or(SandboxError::StaleBody(handle))
    }

    /// Removes an impulse joint. A stale handle is rejected.
    pub fn remove_joint(&mut self, handle: ImpulseJointHandle) -> Result<(), SandboxError> {
        self.impulse_joints
            .remove(handle, true)
            .map(|_| ())
            .ok_or(SandboxError::StaleJoint(handle))
    }

    /// Removes every body, collider, and joint.
    ///
    /// Gravity, solver parameters, and the installed contact filter are
    /// kept; the world stays initialized and immediately usable.
    pub fn clear(&mut self) {
        let old = std::mem::take(self);
        self.gravity = old.gravity;
        self.integration_parameters = old.integration_parameters;
        self.hooks = old.hooks;
    }

    /// Number of live bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of live colliders.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Number of narrow-phase pairs with at least one active contact.
    pub fn contact_count(&self) -> usize {
        self.narrow_phase
            .contact_pairs()
            .filter(|pair| pair.has_any_active_contact)
            .count()
    }

    /// Installs the contact filter consulted on every new contact pair.
    pub fn set_contact_filter(&mut self, filter: Box<dyn ContactFilter>) {
        self.hooks.filter = Some(filter);
    }

    /// Uninstalls the contact filter, restoring collide-everything behavior.
    pub fn clear_contact_filter(&mut self) {
        self.hooks.filter = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gravity_points_down_screen() {
        let world = PhysicsWorld::default();
        assert!((world.gravity.y - DEFAULT_GRAVITY).abs() < 1e-6);
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.collider_count(), 0);
    }

    #[test]
    fn add_body_and_collider() {
        let mut world = PhysicsWorld::default();

        let body = world.add_body(
            RigidBodyBuilder::dynamic()
                .translation(Vector::new(0.0, 1.0))
                .build(),
        );
        let _collider = world.add_collider(ColliderBuilder::ball(0.5).build(), body);

        assert_eq!(world.body_count(), 1);
        assert_eq!(world.collider_count(), 1);
    }

    #[test]
    fn step_moves_dynamic_body_down() {
        let mut world = PhysicsWorld::default();

        let body = world.add_body(
            RigidBodyBuilder::dynamic()
                .translation(Vector::new(0.0, 1.0))
                .build(),
        );
        world.add_collider(ColliderBuilder::ball(0.5).build(), body);

        let initial_y = world.bodies[body].position().translation.y;

        for _ in 0..10 {
            world.step();
        }

        let final_y = world.bodies[body].position().translation.y;
        assert!(final_y > initial_y);
    }

    #[test]
    fn remove_body_rejects_stale_handle() {
        let mut world = PhysicsWorld::default();
        let body = world.add_body(RigidBodyBuilder::dynamic().build());

        assert!(world.remove_body(body).is_ok());
        assert_eq!(
            world.remove_body(body),
            Err(SandboxError::StaleBody(body))
        );
    }

    #[test]
    fn clear_keeps_world_usable() {
        let mut world = PhysicsWorld::with_gravity(Vector::new(0.0, 3.0));
        let body = world.add_body(RigidBodyBuilder::dynamic().build());
        world.add_collider(ColliderBuilder::ball(0.5).build(), body);

        world.clear();
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.collider_count(), 0);
        assert_eq!(world.contact_count(), 0);
        assert!((world.gravity.y - 3.0).abs() < 1e-6);

        world.add_body(RigidBodyBuilder::dynamic().build());
        assert_eq!(world.body_count(), 1);
    }
}
