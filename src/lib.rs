//! # pxdrift
//!
//! Pointer-reactive image particles: a static raster image becomes a field
//! of discrete particles that reproduces the image at rest and scatters away
//! from an approaching mouse cursor or touch contact, springing back once
//! the pointer leaves.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pxdrift::Simulation;
//!
//! fn main() -> Result<(), pxdrift::SimulationError> {
//!     let image = image::open("logo.png")?.to_rgba8();
//!     Simulation::from_image(image)
//!         .with_title("logo")
//!         .run()
//! }
//! ```
//!
//! ## How it works
//!
//! - [`sampler`] turns the decoded image into particle seeds, one per
//!   "contentful" pixel (RGB sum over a small threshold).
//! - [`field::ParticleField`] holds the per-particle state as parallel
//!   arrays: original position, target position, current position, velocity
//!   and color, plus a 20-entry pool of squared influence radii reused
//!   cyclically by particle index.
//! - [`pointer::PointerTracker`] maintains the live pointer set: a permanent
//!   primary pointer on mouse devices, transient touch pointers elsewhere.
//! - [`influence::InfluenceEngine`] retargets every particle per pointer per
//!   frame and hands the field to [`integrator`], a fixed spring/damping
//!   rule normalized to a 144 Hz baseline.
//! - [`Simulation`] wires all of it to a winit window and a wgpu point-quad
//!   renderer and runs the loop until the window closes.
//!
//! Everything runs on the event-loop thread; input events and frame ticks
//! interleave but never overlap, so no particle or pointer state is locked.

pub mod error;
pub mod field;
mod gpu;
pub mod influence;
pub mod integrator;
pub mod pointer;
pub mod sampler;
mod shader;
mod simulation;
pub mod time;
pub mod viewport;

pub use error::{GpuError, SimulationError};
pub use field::ParticleField;
pub use glam::{Vec2, Vec3};
pub use gpu::Camera;
pub use influence::InfluenceEngine;
pub use pointer::{Pointer, PointerId, PointerTracker};
pub use sampler::{contentful_pixels, PixelSeed, CONTENTFUL_PIXEL_THRESHOLD};
pub use simulation::Simulation;
pub use viewport::Viewport;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::field::ParticleField;
    pub use crate::influence::InfluenceEngine;
    pub use crate::pointer::{Pointer, PointerId, PointerTracker};
    pub use crate::sampler::{contentful_pixels, PixelSeed};
    pub use crate::simulation::Simulation;
    pub use crate::time::Time;
    pub use crate::viewport::Viewport;
    pub use crate::{Vec2, Vec3};
}
