//! Platform-agnostic pointer input types.
//!
//! Mirrors the mouse subset a sandbox cares about without depending on any
//! windowing crate. Platform layers (e.g. winit) map their native events to
//! these types.

use crate::math::Vec2;

/// Mouse/pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// What a pointer sample describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Moved,
    Released,
}

/// One pointer event in window points.
///
/// For `Moved` samples the button field carries the most recently pressed
/// button, `Primary` when none has been pressed yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub button: PointerButton,
    pub phase: PointerPhase,
}
