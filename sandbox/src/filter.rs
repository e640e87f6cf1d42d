//! User-controlled collision filtering.
//!
//! The sandbox keeps the installed filter alive for as long as the world
//! consults it; uninstalling or clearing the world drops it.

use rapier2d::prelude::*;

/// Decides whether two fixtures are allowed to collide.
///
/// Install via [`Sandbox::set_contact_filter`](crate::Sandbox::set_contact_filter).
/// The engine consults the filter for every new pair whose colliders opted
/// into hook filtering, which every fixture built by the sandbox factories
/// does.
pub trait ContactFilter: Send + Sync {
    /// Returns `true` if the pair may collide.
    fn should_collide(&self, colliders: &ColliderSet, a: ColliderHandle, b: ColliderHandle) -> bool;
}

impl<F> ContactFilter for F
where
    F: Fn(&ColliderSet, ColliderHandle, ColliderHandle) -> bool + Send + Sync,
{
    fn should_collide(&self, colliders: &ColliderSet, a: ColliderHandle, b: ColliderHandle) -> bool {
        self(colliders, a, b)
    }
}

/// rapier hook adapter holding the installed filter.
///
/// Passed to the pipeline on every step; with no filter installed it
/// behaves like the engine's default hooks.
#[derive(Default)]
pub(crate) struct FilterHooks {
    pub(crate) filter: Option<Box<dyn ContactFilter>>,
}

impl PhysicsHooks for FilterHooks {
    fn filter_contact_pair(&self, context: &PairFilterContext) -> Option<SolverFlags> {
        match &self.filter {
            Some(filter)
                if !filter.should_collide(context.colliders, context.collider1, context.collider2) =>
            {
                None
            }
            _ => Some(SolverFlags::COMPUTE_IMPULSES),
        }
    }

    fn filter_intersection_pair(&self, context: &PairFilterContext) -> bool {
        self.filter.as_ref().map_or(true, |filter| {
            filter.should_collide(context.colliders, context.collider1, context.collider2)
        })
    }
}
