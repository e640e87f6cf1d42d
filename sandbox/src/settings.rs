//! Solver and scale configuration.

/// Fixed-step solver configuration.
///
/// Plain mutable data; every field takes effect on the next
/// [`step`](crate::Sandbox::step) or creation call. No retroactive
/// rescaling or re-solving of existing state happens when a field changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SandboxSettings {
    /// Solver velocity iterations per step.
    pub velocity_iterations: usize,
    /// Solver position stabilization iterations per step.
    pub position_iterations: usize,
    /// Fixed timestep in seconds.
    pub time_step: f32,
    /// Screen points per simulation meter.
    pub points_per_meter: f32,
}

impl Default for SandboxSettings {
    fn default() -> Self {
        Self {
            velocity_iterations: 8,
            position_iterations: 3,
            time_step: 1.0 / 60.0,
            points_per_meter: 50.0,
        }
    }
}
