//! Debug drawing utilities for the Marionette sandbox.
//!
//! Provides immediate-mode 2D line drawing that any host renderer can
//! upload as a line list. Thread-safe with one-frame latency.
//!
//! # Architecture
//!
//! - [`DebugDrawer`] — Thread-safe accumulator (store as a shared resource)
//! - [`DebugDrawerContext`] — Short-lived drawing context
//! - [`DebugVertex`] / [`DebugUniforms`] — Pod layouts for the host's line pipeline
//!
//! # Usage
//!
//! ```
//! use marionette_debug_drawer::{DebugDrawer, DebugUniforms};
//!
//! let drawer = DebugDrawer::new();
//!
//! // Each frame:
//! drawer.advance_tick();
//!
//! // Anywhere during the frame (can run in parallel):
//! let mut ctx = drawer.context();
//! ctx.draw_line([0.0, 0.0], [100.0, 100.0], [1.0, 0.0, 0.0, 1.0]);
//! ctx.draw_circle([320.0, 240.0], 25.0, [0.0, 1.0, 0.0, 1.0]);
//! drop(ctx); // or let it go out of scope
//!
//! // At render time (previous tick's data):
//! let uniforms = DebugUniforms::for_screen(640.0, 480.0);
//! let vertices = drawer.take_render_data();
//! # let _ = (uniforms, vertices);
//! ```

mod draw_api;
mod drawer;
mod vertex;

pub use drawer::{DebugDrawer, DebugDrawerContext};
pub use vertex::{DebugUniforms, DebugVertex};
