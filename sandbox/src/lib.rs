//! # Marionette
//!
//! A 2D physics sandbox for creative-coding hosts. [`Sandbox`] creates a
//! mapping between the window and the physics world: positions and sizes go
//! in as screen points, get converted into [rapier](https://rapier.rs/)'s
//! metric space, and come back out as screen-space debug outlines. The
//! solver itself is rapier's; this crate is the bridge between it and the
//! host window.
//!
//! ## Overview
//!
//! - [`Sandbox`] — coordinator facade: shape factories, mouse-drag
//!   interaction, settings, debug draw
//! - [`PhysicsWorld`] — owned rapier2d state and the fixed timestep
//! - [`ContactFilter`] — user predicate deciding what may collide
//! - [`WindowSignals`] — winit event wiring (feature `winit`, on by default)
//!
//! The active rapier crate is re-exported as [`rapier2d`] so hosts name
//! engine types through one path.

pub mod debug_draw;
pub mod error;
pub mod filter;
pub mod sandbox;
pub mod settings;
pub mod shapes;
#[cfg(feature = "winit")]
pub mod signals;
pub mod world;

pub use error::SandboxError;
pub use filter::ContactFilter;
pub use sandbox::Sandbox;
pub use settings::SandboxSettings;
#[cfg(feature = "winit")]
pub use signals::WindowSignals;
pub use world::PhysicsWorld;

pub use rapier2d;
