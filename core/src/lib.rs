//! # Marionette Core
//!
//! Shared vocabulary for the Marionette sandbox crates: f32 math aliases
//! over nalgebra, the points-to-meters [`Scale`], screen-space rectangles,
//! and a platform-agnostic pointer-input model.

pub mod input;
pub mod math;
pub mod rect;
pub mod units;

pub use rect::Rect;
pub use units::Scale;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
