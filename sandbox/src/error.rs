//! Detectable misuse of sandbox handles.

use rapier2d::prelude::{ImpulseJointHandle, RigidBodyHandle};
use thiserror::Error;

/// Errors surfaced by the sandbox.
///
/// Body and joint handles are generational arena indices. Destroying
/// through a handle whose slot was already freed is reported instead of
/// silently corrupting whatever reused the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SandboxError {
    /// The body handle does not refer to a live body.
    #[error("stale body handle {0:?}")]
    StaleBody(RigidBodyHandle),
    /// The joint handle does not refer to a live joint.
    #[error("stale joint handle {0:?}")]
    StaleJoint(ImpulseJointHandle),
}
